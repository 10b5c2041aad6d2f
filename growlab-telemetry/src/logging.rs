//! ## growlab-telemetry::logging
//! **Structured logging with `tracing`**
//!
//! `RUST_LOG` takes precedence; otherwise the configured default level is
//! applied to every target.

use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global subscriber. Fails if one is already set.
    pub fn init(default_level: &str) -> Result<(), InitError> {
        fmt()
            .with_env_filter(Self::filter(default_level))
            .with_target(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .try_init()
    }

    fn filter(default_level: &str) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    }

    /// Logs a named lab event with its key/value fields.
    pub fn log_event(event_type: &str, fields: &[(&str, String)]) {
        info!(event_type = event_type, fields = ?fields, "Lab event occurred");
    }
}
