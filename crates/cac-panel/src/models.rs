//! Typed inputs for the base-tier panel operations.

use cac_core::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Power operations accepted by the `powerop` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerAction {
    /// Power the server on.
    PowerOn,
    /// Power the server off.
    PowerOff,
    /// Power cycle the server.
    Reset,
}

impl PowerAction {
    /// Returns the action's wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PowerOn => "poweron",
            Self::PowerOff => "poweroff",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for PowerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server idle policy accepted by the `runmode` endpoint.
///
/// `Safe` servers are powered off automatically after the panel's idle
/// threshold; `Normal` servers stay on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Always on.
    Normal,
    /// Auto power-off after the idle threshold.
    Safe,
}

impl RunMode {
    /// Returns the mode's wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Safe => "safe",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "safe" => Ok(Self::Safe),
            other => Err(Error::Config(format!("unknown run mode: {other}"))),
        }
    }
}
