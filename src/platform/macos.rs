//! macOS platform implementation.
//!
//! Low Power Mode shipped with macOS 12; earlier releases have no
//! battery-optimization control, so the capability probe reports the
//! feature unsupported there. On supporting releases the live query reads
//! the `lowpowermode` flag out of `pmset -g`.

use std::process::Command;

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use super::PowerPlatform;
use crate::error::{PowerError, PowerResult};

/// First macOS major version with Low Power Mode.
const LOW_POWER_MODE_MIN_MAJOR: u32 = 12;

/// macOS power-platform implementation backed by pmset.
pub struct MacOsPowerPlatform {
    /// Cached capability probe (populated on first query)
    supported: OnceCell<bool>,
}

impl MacOsPowerPlatform {
    /// Create a new macOS platform instance.
    pub fn new() -> Self {
        Self {
            supported: OnceCell::new(),
        }
    }
}

/// Read the product major version from `sw_vers` (e.g. "14.3.1" -> 14).
fn product_major_version() -> Option<u32> {
    let output = Command::new("sw_vers")
        .arg("-productVersion")
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let version = String::from_utf8_lossy(&output.stdout);
    version.trim().split('.').next()?.parse().ok()
}

impl PowerPlatform for MacOsPowerPlatform {
    fn battery_optimization_supported(&self) -> bool {
        *self.supported.get_or_init(|| match product_major_version() {
            Some(major) => {
                debug!(major, "probed macOS product version");
                major >= LOW_POWER_MODE_MIN_MAJOR
            }
            None => {
                warn!("could not determine macOS version, treating Low Power Mode as unsupported");
                false
            }
        })
    }

    fn is_ignoring_battery_optimizations(&self, _app_id: &str) -> PowerResult<bool> {
        let output = Command::new("pmset")
            .arg("-g")
            .output()
            .map_err(|e| PowerError::Platform(format!("Failed to run pmset: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("pmset -g returned non-zero: {}", stderr.trim());
            return Err(PowerError::Platform(format!(
                "pmset exited with {}",
                output.status
            )));
        }

        let report = String::from_utf8_lossy(&output.stdout);
        let low_power = report.lines().any(|line| {
            let line = line.trim();
            line.starts_with("lowpowermode") && line.ends_with('1')
        });
        debug!(low_power, "read lowpowermode from pmset");
        Ok(!low_power)
    }
}
