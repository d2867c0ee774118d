// ParcelScout - app/mod.rs
//
// Application layer: session state orchestrating the core pipeline.

pub mod session;
