// ParcelScout - platform/mod.rs
//
// Platform integration: config directories and config.toml loading.

pub mod config;
