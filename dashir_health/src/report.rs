// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The health endpoint payload.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identity of the application serving the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
}

/// Platform connection status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformStatus {
    /// True iff both a host and an access token are configured.
    pub configured: bool,
    /// True iff the configured host answered the probe. Always false when
    /// not configured.
    pub reachable: bool,
    /// Platform type label.
    #[serde(rename = "type")]
    pub kind: String,
}

/// The full health endpoint payload.
///
/// Serializes to
/// `{status, timestamp, app: {name, version},
///   platform: {configured, reachable, type}}`
/// with an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Always `"ok"`; the endpoint itself cannot fail.
    pub status: &'static str,
    /// Report generation time.
    pub timestamp: DateTime<Utc>,
    /// Serving application identity.
    pub app: AppInfo,
    /// Platform connection status.
    pub platform: PlatformStatus,
}
