//! Diagnostic CLI for the battery-optimization bridge.
//!
//! Invokes a channel method (the exemption query by default) and prints
//! the JSON outcome, so the native layer can be exercised without a UI
//! host attached.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use powerbridge::bridge::METHOD_IS_IGNORING_BATTERY_OPTIMIZATIONS;
use powerbridge::{platform, BatteryChannel, Config, MethodCall, MethodOutcome};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "powerbridge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let method = std::env::args()
        .nth(1)
        .unwrap_or_else(|| METHOD_IS_IGNORING_BATTERY_OPTIMIZATIONS.to_string());

    let config = Config::load();
    tracing::debug!(
        platform = platform::name(),
        channel = %config.channel.name,
        method = %method,
        "dispatching"
    );

    let channel = BatteryChannel::new(
        config.channel.name.clone(),
        config.app_id(),
        platform::current(),
    );
    let outcome = channel.handle(&MethodCall::new(method));

    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[powerbridge] Failed to encode outcome: {}", e);
            std::process::exit(2);
        }
    }

    if matches!(outcome, MethodOutcome::Error { .. }) {
        std::process::exit(1);
    }
}
