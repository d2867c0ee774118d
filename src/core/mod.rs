// ParcelScout - core/mod.rs
//
// Core business logic layer: the extract -> merge -> evaluate pipeline
// plus catalog parsing and export.
// Must NOT depend on: app, platform, or any I/O crate directly.

pub mod catalog;
pub mod export;
pub mod extract;
pub mod filter;
pub mod model;
