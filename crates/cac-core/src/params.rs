//! Request parameter builder and credential merging.
//!
//! Every panel request carries its parameters as flat string pairs (query
//! string for GET, form body for POST). This module provides the builder
//! the operation methods shape those pairs with, and the merge step that
//! appends the account credentials.

use crate::config::Credentials;
use std::fmt::Display;

/// Parameter name the API key is sent under.
pub const KEY_PARAM: &str = "key";

/// Parameter name the account login is sent under.
pub const LOGIN_PARAM: &str = "login";

/// Builder for assembling request parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct ParamSet {
    pairs: Vec<(&'static str, String)>,
}

impl ParamSet {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Return the collected key/value pairs without credentials.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Return the collected pairs with the credential pair appended.
    ///
    /// Credentials are merged last and any caller-supplied `key`/`login`
    /// entry is dropped, so operation parameters can never displace the
    /// account credentials.
    #[must_use]
    pub fn into_pairs_with_credentials(
        self,
        credentials: &Credentials,
    ) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = self
            .pairs
            .into_iter()
            .filter(|(key, _)| *key != KEY_PARAM && *key != LOGIN_PARAM)
            .collect();

        pairs.push((KEY_PARAM, credentials.key().to_string()));
        pairs.push((LOGIN_PARAM, credentials.login().to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("user@example.com", "secret").unwrap()
    }

    #[test]
    fn push_opt_skips_none() {
        let mut params = ParamSet::new();
        params.push_opt("sid", Option::<String>::None);
        assert!(params.is_empty());
    }

    #[test]
    fn push_collects_in_order() {
        let mut params = ParamSet::new();
        params.push("sid", "123");
        params.push("action", "poweron");
        assert_eq!(
            params.into_pairs(),
            vec![
                ("sid", "123".to_string()),
                ("action", "poweron".to_string())
            ]
        );
    }

    #[test]
    fn credentials_are_appended_last() {
        let mut params = ParamSet::new();
        params.push("sid", "123");
        let pairs = params.into_pairs_with_credentials(&credentials());
        assert_eq!(
            pairs,
            vec![
                ("sid", "123".to_string()),
                ("key", "secret".to_string()),
                ("login", "user@example.com".to_string())
            ]
        );
    }

    #[test]
    fn colliding_pairs_cannot_displace_credentials() {
        let mut params = ParamSet::new();
        params.push("key", "forged");
        params.push("login", "attacker@example.com");
        params.push("sid", "123");

        let pairs = params.into_pairs_with_credentials(&credentials());
        assert_eq!(
            pairs,
            vec![
                ("sid", "123".to_string()),
                ("key", "secret".to_string()),
                ("login", "user@example.com".to_string())
            ]
        );
    }

    #[test]
    fn empty_set_still_carries_credentials() {
        let pairs = ParamSet::new().into_pairs_with_credentials(&credentials());
        assert_eq!(pairs.len(), 2);
    }
}
