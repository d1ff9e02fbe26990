//! Tracing setup. `RUST_LOG` takes precedence over the default directive.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "students_api=info,tower_http=debug";

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
        )
        .init();
}
