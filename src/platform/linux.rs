//! Linux platform implementation.
//!
//! Desktop Linux has no per-application battery-optimization exemptions;
//! the closest facility is power-profiles-daemon's system-wide profile.
//! The application counts as throttled while the `power-saver` profile is
//! active, and the feature is reported unsupported when the daemon's CLI
//! is not installed.

use std::process::Command;

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use super::PowerPlatform;
use crate::error::{PowerError, PowerResult};

/// Linux power-platform implementation backed by powerprofilesctl.
pub struct LinuxPowerPlatform {
    /// Cached capability probe (populated on first query)
    supported: OnceCell<bool>,
}

impl LinuxPowerPlatform {
    /// Create a new Linux platform instance.
    pub fn new() -> Self {
        Self {
            supported: OnceCell::new(),
        }
    }
}

impl PowerPlatform for LinuxPowerPlatform {
    fn battery_optimization_supported(&self) -> bool {
        *self.supported.get_or_init(|| {
            let found = Command::new("powerprofilesctl")
                .arg("version")
                .output()
                .map(|output| output.status.success())
                .unwrap_or(false);
            debug!(found, "probed for power-profiles-daemon");
            found
        })
    }

    fn is_ignoring_battery_optimizations(&self, _app_id: &str) -> PowerResult<bool> {
        let output = Command::new("powerprofilesctl")
            .arg("get")
            .output()
            .map_err(|e| {
                PowerError::Platform(format!("Failed to run powerprofilesctl: {}", e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("powerprofilesctl get returned non-zero: {}", stderr.trim());
            return Err(PowerError::Platform(format!(
                "powerprofilesctl exited with {}",
                output.status
            )));
        }

        let profile = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(%profile, "active power profile");
        Ok(profile != "power-saver")
    }
}
