//! Method-call bridge between a UI host layer and the platform backend.
//!
//! The host invokes operations by name over a channel; the bridge
//! dispatches on the method name and answers with a tagged outcome:
//! a value, a "not implemented" marker for unrecognized names, or a
//! structured error with a fixed code and message.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::platform::PowerPlatform;

/// The one method name the channel recognizes.
pub const METHOD_IS_IGNORING_BATTERY_OPTIMIZATIONS: &str = "isIgnoringBatteryOptimizations";

/// Error code returned to the host when the OS query fails.
pub const QUERY_ERROR_CODE: &str = "ERROR";

/// Error message returned to the host when the OS query fails.
pub const QUERY_ERROR_MESSAGE: &str = "Could not check battery optimizations";

/// Default channel name when no config overrides it.
pub const DEFAULT_CHANNEL_NAME: &str = "powerbridge/battery";

/// A named invocation from the host layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    /// Method name to dispatch on
    pub method: String,
    /// Arguments are carried for wire compatibility; no recognized method
    /// reads them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<serde_json::Value>,
}

impl MethodCall {
    /// Create a call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: None,
        }
    }
}

/// Outcome of dispatching a method call.
///
/// Serialized for the host as `{"status": "success", "value": ...}`,
/// `{"status": "notImplemented"}`, or
/// `{"status": "error", "code": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodOutcome {
    /// The method ran and produced a value.
    Success { value: serde_json::Value },
    /// The method name is not handled by this channel. Distinct from an
    /// error so the host can tell "unsupported request" from "failed".
    NotImplemented,
    /// The method ran and failed.
    Error { code: String, message: String },
}

impl MethodOutcome {
    fn success(value: bool) -> Self {
        MethodOutcome::Success {
            value: serde_json::Value::Bool(value),
        }
    }

    fn query_failed() -> Self {
        MethodOutcome::Error {
            code: QUERY_ERROR_CODE.to_string(),
            message: QUERY_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Channel handler owning the platform backend.
///
/// Stateless between calls: each invocation is an independent, read-only
/// query against the OS power-management facility.
pub struct BatteryChannel {
    name: String,
    app_id: String,
    platform: Box<dyn PowerPlatform>,
}

impl BatteryChannel {
    /// Create a channel for the given backend.
    pub fn new(
        name: impl Into<String>,
        app_id: impl Into<String>,
        platform: Box<dyn PowerPlatform>,
    ) -> Self {
        Self {
            name: name.into(),
            app_id: app_id.into(),
            platform,
        }
    }

    /// The channel name the host addresses this handler by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dispatch a method call and produce its outcome.
    pub fn handle(&self, call: &MethodCall) -> MethodOutcome {
        match call.method.as_str() {
            METHOD_IS_IGNORING_BATTERY_OPTIMIZATIONS => self.is_ignoring_battery_optimizations(),
            other => {
                debug!(channel = %self.name, method = other, "unhandled method");
                MethodOutcome::NotImplemented
            }
        }
    }

    fn is_ignoring_battery_optimizations(&self) -> MethodOutcome {
        if !self.platform.battery_optimization_supported() {
            // No optimization feature means nothing can throttle us.
            return MethodOutcome::success(true);
        }

        match self.platform.is_ignoring_battery_optimizations(&self.app_id) {
            Ok(flag) => MethodOutcome::success(flag),
            Err(e) => {
                warn!(channel = %self.name, error = %e, "battery-optimization query failed");
                MethodOutcome::query_failed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PowerError, PowerResult};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Fake backend with a scripted capability gate and exemption flag.
    /// `flag: None` makes the live query fail.
    struct FakePlatform {
        supported: bool,
        flag: Option<bool>,
        queried: Arc<AtomicBool>,
    }

    impl PowerPlatform for FakePlatform {
        fn battery_optimization_supported(&self) -> bool {
            self.supported
        }

        fn is_ignoring_battery_optimizations(&self, _app_id: &str) -> PowerResult<bool> {
            self.queried.store(true, Ordering::SeqCst);
            match self.flag {
                Some(flag) => Ok(flag),
                None => Err(PowerError::Platform("power service unavailable".to_string())),
            }
        }
    }

    fn channel(supported: bool, flag: Option<bool>) -> (BatteryChannel, Arc<AtomicBool>) {
        let queried = Arc::new(AtomicBool::new(false));
        let platform = FakePlatform {
            supported,
            flag,
            queried: queried.clone(),
        };
        let channel = BatteryChannel::new(DEFAULT_CHANNEL_NAME, "com.example.app", Box::new(platform));
        (channel, queried)
    }

    fn query() -> MethodCall {
        MethodCall::new(METHOD_IS_IGNORING_BATTERY_OPTIMIZATIONS)
    }

    #[test]
    fn test_unsupported_platform_is_always_exempt() {
        // Backend would report "not exempt", but the gate short-circuits
        // before the live query runs.
        let (channel, queried) = channel(false, Some(false));
        let outcome = channel.handle(&query());
        assert_eq!(
            outcome,
            MethodOutcome::Success {
                value: serde_json::Value::Bool(true)
            }
        );
        assert!(!queried.load(Ordering::SeqCst));
    }

    #[test]
    fn test_supported_platform_reports_live_flag() {
        let (exempt, _) = channel(true, Some(true));
        assert_eq!(
            exempt.handle(&query()),
            MethodOutcome::Success {
                value: serde_json::Value::Bool(true)
            }
        );

        let (throttled, _) = channel(true, Some(false));
        assert_eq!(
            throttled.handle(&query()),
            MethodOutcome::Success {
                value: serde_json::Value::Bool(false)
            }
        );
    }

    #[test]
    fn test_unknown_method_is_not_implemented() {
        let (channel, queried) = channel(true, Some(true));
        let outcome = channel.handle(&MethodCall::new("unknownMethod"));
        assert_eq!(outcome, MethodOutcome::NotImplemented);
        assert!(!queried.load(Ordering::SeqCst));
    }

    #[test]
    fn test_failed_query_maps_to_fixed_error() {
        let (channel, _) = channel(true, None);
        let outcome = channel.handle(&query());
        assert_eq!(
            outcome,
            MethodOutcome::Error {
                code: "ERROR".to_string(),
                message: "Could not check battery optimizations".to_string(),
            }
        );
    }

    #[test]
    fn test_arguments_are_ignored() {
        let (channel, _) = channel(true, Some(true));
        let call = MethodCall {
            method: METHOD_IS_IGNORING_BATTERY_OPTIMIZATIONS.to_string(),
            args: Some(serde_json::json!({ "ignored": 42 })),
        };
        assert_eq!(
            channel.handle(&call),
            MethodOutcome::Success {
                value: serde_json::Value::Bool(true)
            }
        );
    }

    #[test]
    fn test_outcome_json_shape() {
        let success = MethodOutcome::Success {
            value: serde_json::Value::Bool(true),
        };
        assert_eq!(
            serde_json::to_string(&success).unwrap(),
            r#"{"status":"success","value":true}"#
        );

        assert_eq!(
            serde_json::to_string(&MethodOutcome::NotImplemented).unwrap(),
            r#"{"status":"notImplemented"}"#
        );

        let error = MethodOutcome::Error {
            code: QUERY_ERROR_CODE.to_string(),
            message: QUERY_ERROR_MESSAGE.to_string(),
        };
        assert_eq!(
            serde_json::to_string(&error).unwrap(),
            r#"{"status":"error","code":"ERROR","message":"Could not check battery optimizations"}"#
        );
    }

    #[test]
    fn test_method_call_deserializes_without_args() {
        let call: MethodCall =
            serde_json::from_str(r#"{"method":"isIgnoringBatteryOptimizations"}"#).unwrap();
        assert_eq!(call.method, METHOD_IS_IGNORING_BATTERY_OPTIMIZATIONS);
        assert!(call.args.is_none());
    }
}
