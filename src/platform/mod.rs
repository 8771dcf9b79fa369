//! Platform abstraction layer for the battery-optimization query.
//!
//! This module defines the `PowerPlatform` trait that abstracts the
//! OS-specific power-management facility, allowing the bridge to remain
//! platform-agnostic.

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

use crate::error::PowerResult;

/// Platform-specific power-management operations trait.
///
/// Implementations answer two questions:
/// - does this host expose battery-optimization controls at all, and
/// - is the current application exempt from them right now.
pub trait PowerPlatform: Send + Sync {
    /// Whether the host OS supports battery-optimization restrictions.
    ///
    /// Probed once per instance. When this returns `false` the caller
    /// must treat the application as exempt without issuing the live
    /// query, since no restriction can apply.
    fn battery_optimization_supported(&self) -> bool;

    /// Live exemption flag for the given application identifier.
    ///
    /// Only called when [`battery_optimization_supported`] returned
    /// `true`. Returns `Ok(true)` when the application is allowed to run
    /// background work unthrottled.
    ///
    /// [`battery_optimization_supported`]: PowerPlatform::battery_optimization_supported
    fn is_ignoring_battery_optimizations(&self, app_id: &str) -> PowerResult<bool>;
}

/// Get the platform implementation for the current OS.
pub fn current() -> Box<dyn PowerPlatform> {
    #[cfg(target_os = "linux")]
    {
        Box::new(linux::LinuxPowerPlatform::new())
    }

    #[cfg(target_os = "macos")]
    {
        Box::new(macos::MacOsPowerPlatform::new())
    }

    #[cfg(target_os = "windows")]
    {
        Box::new(windows::WindowsPowerPlatform)
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        compile_error!("Unsupported platform")
    }
}

/// Platform name as a string (for logging/display).
pub fn name() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "Linux"
    }

    #[cfg(target_os = "macos")]
    {
        "macOS"
    }

    #[cfg(target_os = "windows")]
    {
        "Windows"
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        "Unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform_probes_without_panicking() {
        let platform = current();
        // The probe must settle to a stable answer on any host, including
        // CI machines without the underlying power tooling installed.
        let first = platform.battery_optimization_supported();
        let second = platform.battery_optimization_supported();
        assert_eq!(first, second);
    }

    #[test]
    fn test_platform_name_matches_os() {
        let platform_name = name();

        #[cfg(target_os = "linux")]
        assert_eq!(platform_name, "Linux");

        #[cfg(target_os = "macos")]
        assert_eq!(platform_name, "macOS");

        #[cfg(target_os = "windows")]
        assert_eq!(platform_name, "Windows");
    }
}
