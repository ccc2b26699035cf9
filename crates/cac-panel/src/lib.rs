//! Client for the base-tier CloudAtCost panel API operations.
//!
//! This crate provides [`PanelClient`], one method per base-tier panel
//! operation: server/template/task listing, power operations, console
//! access, rename, reverse DNS, and run mode.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{PanelClient, PanelClientBuilder};
pub use models::{PowerAction, RunMode};

/// Convenient result alias that reuses the shared panel error type.
pub type Result<T> = cac_core::Result<T>;
