use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the JSON tracing subscriber for the server process.
///
/// `RUST_LOG` overrides the default filter; driver noise from sqlx and
/// sea-orm is capped at warn.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,sea_orm=warn"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
