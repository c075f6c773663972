//! OpenTelemetry tracing exported to a local file.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter
//!     → /host/.local/share/zellij/foodgrid/foodgrid-otlp.json (rotated at 5 MiB, 3 backups)
//! ```
//!
//! Each line of the file is one OTLP/JSON `resourceSpans` document.
//!
//! # Usage
//!
//! ```rust,no_run
//! use foodgrid::observability::init_tracing;
//! use foodgrid::Config;
//!
//! init_tracing(&Config { trace_level: "debug".to_string(), ..Config::default() });
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
