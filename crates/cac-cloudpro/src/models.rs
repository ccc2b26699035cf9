//! Typed inputs for the CloudPRO operations.

use cac_core::id::TemplateId;
use cac_core::params::ParamSet;
use serde::{Deserialize, Serialize};

/// Provisioning request for the CloudPRO `build` endpoint.
///
/// The ranges below are the panel's documented constraints. They are not
/// enforced locally: out-of-range values are sent as-is and come back as a
/// vendor-reported JSON error, which keeps this client honest about where
/// validation actually happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    /// CPU count; the panel accepts 1 through 9.
    pub cpu: u8,
    /// RAM in MB; the panel requires a multiple of 4.
    pub ram: u32,
    /// Storage in GB; the panel requires a multiple of 10.
    pub storage: u32,
    /// OS template to install, from the template listing.
    pub os: TemplateId,
}

impl BuildRequest {
    /// Convert the request into wire parameters.
    #[must_use]
    pub fn to_params(&self) -> ParamSet {
        let mut params = ParamSet::new();
        params.push("cpu", self.cpu);
        params.push("ram", self.ram);
        params.push("storage", self.storage);
        params.push("os", &self.os);
        params
    }
}
