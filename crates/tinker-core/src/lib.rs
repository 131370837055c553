//! tinker-core: data model, state container, and read projections for a
//! catalog of DIY project tutorials.
//!
//! The heart of the crate is [`store::Store`]: one owner of an immutable
//! [`store::AppState`] snapshot, mutated only through the closed
//! [`store::Action`] set and read through the pure projections in [`query`].
//!
//! # Conventions
//!
//! - **Errors**: typed [`error::StoreError`] at the store boundary,
//!   `anyhow::Result` at I/O seams (config loading).
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod seed;
pub mod store;
