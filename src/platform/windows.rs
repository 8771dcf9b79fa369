//! Windows platform implementation.

use super::PowerPlatform;
use crate::error::{PowerError, PowerResult};

/// Stub Windows backend: the battery-saver query is not wired up yet, so
/// the feature is reported unsupported and the bridge treats the
/// application as exempt.
pub struct WindowsPowerPlatform;

impl PowerPlatform for WindowsPowerPlatform {
    fn battery_optimization_supported(&self) -> bool {
        false
    }

    fn is_ignoring_battery_optimizations(&self, _app_id: &str) -> PowerResult<bool> {
        Err(PowerError::Platform(
            "Windows battery-saver query not yet implemented".to_string(),
        ))
    }
}
