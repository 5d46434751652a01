//! Tracing setup.

use tracing_subscriber::EnvFilter;

/// Installs a formatted tracing subscriber filtered by `RUST_LOG`
/// (default `info`).
///
/// Returns false if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        init_tracing();
        assert!(!init_tracing());
    }
}
