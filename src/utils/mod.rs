pub mod build_info;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "expense_core=info";

/// Installs the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` wins when set; otherwise `directive` (or `expense_core=info`) applies.
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing(directive: Option<&str>) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive.unwrap_or(DEFAULT_DIRECTIVE)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    fmt().with_env_filter(filter).try_init().is_ok()
}
