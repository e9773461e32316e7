// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reachability probe.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;

use crate::config::PlatformConfig;
use crate::report::{AppInfo, HealthReport, PlatformStatus};

/// Upper bound on one probe round-trip.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Probes the configured platform and assembles [`HealthReport`]s.
///
/// Every path through [`HealthCheck::probe`] resolves to a boolean: an
/// unconfigured platform, a failed client build, a network error, a non-2xx
/// answer, and a timeout all read as "not reachable". Nothing here returns
/// an error or panics.
#[derive(Debug, Clone)]
pub struct HealthCheck {
    config: PlatformConfig,
    client: Option<Client>,
    app: AppInfo,
}

impl HealthCheck {
    /// Creates a checker for the given configuration.
    ///
    /// The application identity defaults to this crate's package metadata;
    /// override it with [`HealthCheck::with_app`] to report the host
    /// application instead.
    pub fn new(config: PlatformConfig) -> Self {
        let client = Client::builder().timeout(PROBE_TIMEOUT).build();
        if let Err(err) = &client {
            log::warn!("health probe client unavailable: {err}");
        }
        Self {
            config,
            client: client.ok(),
            app: AppInfo {
                name: String::from(env!("CARGO_PKG_NAME")),
                version: String::from(env!("CARGO_PKG_VERSION")),
            },
        }
    }

    /// Sets the reported application identity.
    pub fn with_app(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.app = AppInfo {
            name: name.into(),
            version: version.into(),
        };
        self
    }

    /// Sends a `HEAD` probe to the configured host.
    ///
    /// Returns false without touching the network when the platform is not
    /// configured.
    pub async fn probe(&self) -> bool {
        if !self.config.configured() {
            return false;
        }
        let Some(host) = self.config.host() else {
            return false;
        };
        let Some(client) = &self.client else {
            return false;
        };
        match client.head(host).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                log::debug!("platform probe failed: {err}");
                false
            }
        }
    }

    /// Assembles the full health report, probing when configured.
    pub async fn report(&self) -> HealthReport {
        let configured = self.config.configured();
        let reachable = configured && self.probe().await;
        HealthReport {
            status: "ok",
            timestamp: Utc::now(),
            app: self.app.clone(),
            platform: PlatformStatus {
                configured,
                reachable,
                kind: String::from(self.config.kind()),
            },
        }
    }
}
