// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform connection configuration.

use std::env;

/// Environment variable naming the platform host URL.
const HOST_VAR: &str = "PLATFORM_HOST";
/// Environment variable holding the platform access token.
const TOKEN_VAR: &str = "PLATFORM_TOKEN";
/// Environment variable naming the platform type.
const TYPE_VAR: &str = "PLATFORM_TYPE";
/// Platform type reported when none is configured.
const DEFAULT_TYPE: &str = "custom";

/// Connection settings for the upstream data platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    host: Option<String>,
    token: Option<String>,
    kind: String,
}

impl PlatformConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(HOST_VAR).ok(),
            env::var(TOKEN_VAR).ok(),
            env::var(TYPE_VAR).ok(),
        )
    }

    /// Builds a configuration from raw variable values.
    ///
    /// Empty strings count as unset, matching how the variables behave when
    /// exported but blank.
    pub fn from_vars(host: Option<String>, token: Option<String>, kind: Option<String>) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            host: non_empty(host),
            token: non_empty(token),
            kind: non_empty(kind).unwrap_or_else(|| String::from(DEFAULT_TYPE)),
        }
    }

    /// Returns the configured host URL, if any.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the platform type label.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// True iff both a host and an access token are present.
    pub fn configured(&self) -> bool {
        self.host.is_some() && self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_requires_both_host_and_token() {
        let both = PlatformConfig::from_vars(
            Some("https://example.test".into()),
            Some("secret".into()),
            None,
        );
        assert!(both.configured());

        let host_only =
            PlatformConfig::from_vars(Some("https://example.test".into()), None, None);
        assert!(!host_only.configured());

        let token_only = PlatformConfig::from_vars(None, Some("secret".into()), None);
        assert!(!token_only.configured());
    }

    #[test]
    fn empty_variables_count_as_unset() {
        let config =
            PlatformConfig::from_vars(Some(String::new()), Some("secret".into()), Some(String::new()));
        assert!(!config.configured());
        assert_eq!(config.kind(), "custom");
    }

    #[test]
    fn kind_defaults_to_custom() {
        let config = PlatformConfig::from_vars(None, None, None);
        assert_eq!(config.kind(), "custom");

        let config = PlatformConfig::from_vars(None, None, Some("warehouse".into()));
        assert_eq!(config.kind(), "warehouse");
    }
}
