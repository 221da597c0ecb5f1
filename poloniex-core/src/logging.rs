//! Subscriber setup for applications embedding the client.
//!
//! The crates only emit `tracing` events: the HTTP transport opens an
//! `http_send` span per request and reports status and body size at `debug`,
//! the dispatcher reports signed calls at `trace`. Nothing is printed unless a
//! subscriber is installed, which [`init_logging`] does for the `poloniex_*`
//! targets. `RUST_LOG` replaces the configured filter when set.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const TARGETS: [&str; 3] = ["poloniex_core", "poloniex_client", "poloniex_rust"];

/// Output encoding of the installed fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, for a terminal.
    Pretty,
    /// One line per event.
    Compact,
    /// Newline-delimited JSON, for log shippers.
    Json,
}

/// Settings consumed by [`init_logging`] and [`try_init_logging`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Most verbose level recorded for the client crates.
    pub level: LevelFilter,
    /// Output encoding.
    pub format: LogFormat,
    /// Prefix events with a timestamp.
    pub show_time: bool,
    /// Print the emitting module path.
    pub show_target: bool,
    /// Emit a close event per `http_send` span, which carries request latency.
    pub show_span_events: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            format: LogFormat::Pretty,
            show_time: true,
            show_target: true,
            show_span_events: false,
        }
    }
}

impl LogConfig {
    /// JSON lines at `info` with per-request latency.
    pub fn production() -> Self {
        Self {
            format: LogFormat::Json,
            show_span_events: true,
            ..Self::default()
        }
    }

    /// Compact `warn` output without timestamps, so test logs stay quiet.
    pub fn test() -> Self {
        Self {
            level: LevelFilter::WARN,
            format: LogFormat::Compact,
            show_time: false,
            show_target: false,
            show_span_events: false,
        }
    }

    /// Same settings at another level.
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    fn directives(&self) -> String {
        let level = self.level.to_string().to_ascii_lowercase();
        TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn span_events(&self) -> FmtSpan {
        if self.show_span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directives()))
}

fn build_layer<S>(config: &LogConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let filter = env_filter(config);
    let base = fmt::layer()
        .with_target(config.show_target)
        .with_span_events(config.span_events());

    match (config.format, config.show_time) {
        (LogFormat::Pretty, true) => base.pretty().with_filter(filter).boxed(),
        (LogFormat::Pretty, false) => base.pretty().without_time().with_filter(filter).boxed(),
        (LogFormat::Compact, true) => base.compact().with_filter(filter).boxed(),
        (LogFormat::Compact, false) => base.compact().without_time().with_filter(filter).boxed(),
        (LogFormat::Json, true) => base.json().with_filter(filter).boxed(),
        (LogFormat::Json, false) => base.json().without_time().with_filter(filter).boxed(),
    }
}

/// Installs the global subscriber.
///
/// # Panics
///
/// Panics if a global subscriber is already installed; use
/// [`try_init_logging`] where that can happen.
///
/// ```no_run
/// use poloniex_core::logging::{init_logging, LogConfig};
///
/// init_logging(&LogConfig::production());
/// ```
pub fn init_logging(config: &LogConfig) {
    tracing_subscriber::registry()
        .with(build_layer(config))
        .init();
}

/// Like [`init_logging`], but a no-op when a subscriber is already set.
pub fn try_init_logging(config: &LogConfig) {
    let _ = tracing_subscriber::registry()
        .with(build_layer(config))
        .try_init();
}
