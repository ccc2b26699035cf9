//! Client for the CloudPRO tier of the CloudAtCost panel API.
//!
//! CloudPRO accounts can provision and delete servers against a purchased
//! resource pool. This crate provides [`CloudProClient`] with those
//! operations plus the resource-usage query; base-tier operations live in
//! `cac-panel`.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{CloudProClient, CloudProClientBuilder};
pub use models::BuildRequest;

/// Convenient result alias that reuses the shared panel error type.
pub type Result<T> = cac_core::Result<T>;
