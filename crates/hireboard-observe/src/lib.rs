//! Observability for Hireboard: subscriber setup and trace export.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, shutdown_tracing, TracingOptions};
