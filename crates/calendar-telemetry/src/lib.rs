use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Configuration for the logging subsystem.
#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    /// Default log level. Overridden by RUST_LOG env var.
    pub log_level: Level,
    /// Per-module level overrides (e.g. "calendar_store" => DEBUG).
    pub module_levels: Vec<(String, Level)>,
    /// Emit one JSON object per line instead of human-readable text.
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            module_levels: Vec::new(),
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Directive string handed to [`EnvFilter`] when RUST_LOG is unset.
    pub fn filter_directives(&self) -> String {
        let mut filter_str = self.log_level.to_string().to_lowercase();
        for (module, level) in &self.module_levels {
            filter_str.push_str(&format!(",{}={}", module, level.to_string().to_lowercase()));
        }
        filter_str
    }
}

/// Initialize the global tracing subscriber. Call once at startup.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directives()));

    let (json_layer, text_layer) = if config.json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_span_list(true);
        (Some(layer), None)
    } else {
        let layer = tracing_subscriber::fmt::layer().with_target(true);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
}
