//! powerbridge - Battery-optimization exemption bridge.
//!
//! powerbridge exposes one named operation to a UI host layer: whether the
//! running application is currently exempt from the host OS's
//! battery-optimization (power-saving) restrictions. Each request is a
//! stateless, synchronous, read-only query.
//!
//! # Architecture
//!
//! The library is organized into these main modules:
//!
//! - [`bridge`] - Method-call dispatch and tagged outcome types
//! - [`platform`] - Platform abstraction layer (Linux, macOS, Windows)
//! - [`config`] - Configuration loading and management
//!
//! # FFI Layer
//!
//! Native hosts (Swift, GTK4, webview shells) interact via the C FFI
//! layer in [`ffi`]. This provides a stable ABI for cross-language
//! interop.
//!
//! # Example
//!
//! ```ignore
//! use powerbridge::{BatteryChannel, Config, MethodCall};
//!
//! let config = Config::load();
//! let channel = BatteryChannel::new(
//!     config.channel.name.clone(),
//!     config.app_id(),
//!     powerbridge::platform::current(),
//! );
//!
//! let outcome = channel.handle(&MethodCall::new("isIgnoringBatteryOptimizations"));
//! ```

// Public modules
pub mod bridge;
pub mod config;
pub mod platform;

// FFI module - internal implementation details
#[doc(hidden)]
pub mod ffi;

// Internal modules
mod error;

// Re-export commonly used types for convenience
pub use bridge::{BatteryChannel, MethodCall, MethodOutcome};
pub use config::Config;
pub use error::{PowerError, PowerResult};
pub use platform::PowerPlatform;
