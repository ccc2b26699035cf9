//! Opaque identifier newtypes for vendor-assigned tokens.
//!
//! The panel hands out identifiers (`sid`, OS template ids) whose form it
//! does not document, so these wrappers deliberately perform no parsing or
//! validation. They exist to keep the different token kinds from being
//! mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate opaque string identifier types.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw vendor token.
            #[must_use]
            pub fn new(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            /// Returns the token as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Converts into the inner token string.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                Self(token)
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                Self(token.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Generate all identifier types
id_type!(ServerId, "Vendor-assigned server identifier (`sid`)");
id_type!(TemplateId, "Vendor-assigned OS template identifier");
