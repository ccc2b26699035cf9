//! # cac-core
//!
//! Core types and HTTP plumbing for the CloudAtCost panel API.
//!
//! This crate provides the shared transport, credential handling, and error
//! types that the per-tier client crates (`cac-panel`, `cac-cloudpro`) are
//! built on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and their stable machine-readable codes
//! - [`config`] - Credentials and panel endpoint configuration
//! - [`id`] - Opaque identifier newtypes for vendor-assigned tokens
//! - [`params`] - Request parameter builder and credential merging
//! - [`observe`] - Request lifecycle observation hooks
//! - [`client`] - The shared request transport all operations funnel through

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod id;
pub mod observe;
pub mod params;

// Re-export commonly used types
pub use client::{PanelTransport, PanelTransportBuilder, Verb};
pub use config::{Credentials, PanelConfig};
pub use error::{Error, Result};
pub use id::{ServerId, TemplateId};
pub use params::ParamSet;
