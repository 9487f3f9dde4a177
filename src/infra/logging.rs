//! Tracing subscriber setup.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Maps the `-v` count to a filter directive for this crate.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "notekeeper=warn",
        1 => "notekeeper=info",
        _ => "notekeeper=debug",
    }
}

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` or `NOTEKEEPER_LOG` override the level derived from `verbosity`.
pub fn init_tracing(verbosity: u8) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("NOTEKEEPER_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "notekeeper=warn");
        assert_eq!(level_for(1), "notekeeper=info");
        assert_eq!(level_for(2), "notekeeper=debug");
        assert_eq!(level_for(9), "notekeeper=debug");
    }
}
