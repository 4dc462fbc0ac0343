//! Logging setup on top of `tracing-subscriber`.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber with the default filter.
///
/// `RUST_LOG` takes precedence when set. Calling this more than once is a
/// no-op, so tests and examples can call it freely.
pub fn init() {
    init_with(&Config::default());
}

/// Install the fmt subscriber using the filter from `config`.
pub fn init_with(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::trace!("global subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init();
        init_with(&Config::default().with_log_filter("trace"));
    }
}
