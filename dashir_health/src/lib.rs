// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform reachability probe and health report.
//!
//! Dashboards built on dashir usually sit in front of a data platform; this
//! crate answers "is it configured, and can we reach it?" as a health
//! endpoint payload. The probe is deliberately total: network errors and
//! timeouts surface as `reachable: false`, never as an error value, so a
//! health endpoint built on it cannot fail.

mod check;
mod config;
mod report;

pub use check::{HealthCheck, PROBE_TIMEOUT};
pub use config::PlatformConfig;
pub use report::{AppInfo, HealthReport, PlatformStatus};
