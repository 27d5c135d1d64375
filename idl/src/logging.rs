//! Diagnostic logging.
//!
//! Controlled by environment variables:
//!
//! - `IDL_LOG` sets the filter, using `RUST_LOG` syntax (e.g. `debug`,
//!   `idlpack_codegen_typescript=trace`). Falls back to `RUST_LOG`.
//! - `IDL_LOG_FORMAT=json` switches to one JSON object per event.
//!
//! Nothing is installed when neither filter variable is set. Output always
//! goes to stderr so previews on stdout stay clean.

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var("IDL_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// `IDL_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    match std::env::var("IDL_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

pub fn init() {
    if std::env::var_os("IDL_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
