//! Tracing subscriber initialization with structured logging and optional
//! OpenTelemetry trace export.
//!
//! # Usage
//!
//! ```no_run
//! use hireboard_observe::TracingOptions;
//!
//! // Console logging at `warn` unless RUST_LOG says otherwise
//! hireboard_observe::init_tracing(&TracingOptions::default()).unwrap();
//! ```

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use std::sync::OnceLock;

/// Stores the OTel tracer provider so it can be shut down cleanly on exit.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Output layers stacked on top of the env filter.
type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Environment variable that turns on OpenTelemetry stdout export.
pub const OTEL_ENV_VAR: &str = "HIREBOARD_OTEL";

/// How the global subscriber is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingOptions {
    /// Directive used when `RUST_LOG` is unset (e.g. `"warn"`, `"hireboard_core=debug"`).
    pub default_directive: String,
    /// Emit one JSON object per event instead of the human format.
    pub json: bool,
    /// Bridge spans to OpenTelemetry with a stdout exporter.
    pub enable_otel: bool,
}

impl TracingOptions {
    /// Default directive for a count of `-v` flags.
    pub fn for_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        Self {
            default_directive: level.to_string(),
            ..Self::default()
        }
    }

    /// Read `HIREBOARD_OTEL` (`1` or `true` enables export).
    pub fn with_otel_from_env(mut self) -> Self {
        self.enable_otel = std::env::var(OTEL_ENV_VAR)
            .map(|v| otel_flag_enabled(&v))
            .unwrap_or(false);
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_directive))
    }
}

impl Default for TracingOptions {
    fn default() -> Self {
        Self {
            default_directive: "warn".to_string(),
            json: false,
            enable_otel: false,
        }
    }
}

fn otel_flag_enabled(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

/// Initialize the global tracing subscriber.
///
/// - Always installs a `fmt` layer (human or JSON) writing to stderr, so
///   command output on stdout stays machine-readable.
/// - When `enable_otel` is set, additionally bridges spans to OpenTelemetry
///   using a stdout exporter.
/// - `RUST_LOG` takes precedence over `default_directive`.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(options: &TracingOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);
    if options.json {
        layers.push(fmt_layer.json().boxed());
    } else {
        layers.push(fmt_layer.boxed());
    }

    if options.enable_otel {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("hireboard");

        // Store the provider for shutdown and register it globally.
        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);
        layers.push(tracing_opentelemetry::layer().with_tracer(tracer).boxed());
    }

    tracing_subscriber::registry()
        .with(options.env_filter())
        .with(layers)
        .try_init()?;

    Ok(())
}

/// Flush pending traces and shut down the OpenTelemetry tracer provider.
///
/// No-op when OTel was not enabled.
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel tracer provider shutdown error: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_directive() {
        assert_eq!(TracingOptions::for_verbosity(0).default_directive, "warn");
        assert_eq!(TracingOptions::for_verbosity(1).default_directive, "info");
        assert_eq!(TracingOptions::for_verbosity(2).default_directive, "debug");
        assert_eq!(TracingOptions::for_verbosity(9).default_directive, "trace");
    }

    #[test]
    fn otel_flag_values() {
        assert!(otel_flag_enabled("1"));
        assert!(otel_flag_enabled(" TRUE "));
        assert!(!otel_flag_enabled("0"));
        assert!(!otel_flag_enabled(""));
    }

    #[test]
    fn defaults_are_quiet_without_otel() {
        let options = TracingOptions::default();
        assert_eq!(options.default_directive, "warn");
        assert!(!options.json);
        assert!(!options.enable_otel);
    }
}
