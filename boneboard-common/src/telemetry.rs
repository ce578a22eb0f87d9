use color_eyre::eyre::Result;
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to `log_level`
/// (`INFO` when not provided).
pub fn init_tracing(log_level: Option<Level>) -> Result<()> {
    let default_level = log_level.unwrap_or(Level::INFO);
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_only_once() {
        assert!(init_tracing(Some(Level::DEBUG)).is_ok());
        // The global subscriber is already installed.
        assert!(init_tracing(None).is_err());
    }
}
