//! Logger setup for native hosts.

/// Install `env_logger` with `default_filter` unless `RUST_LOG` is set.
///
/// Safe to call more than once; later calls leave the first logger in place
/// and return `false`.
pub fn init_logging(default_filter: &str) -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init_logging("debug");
        assert!(!init_logging("info"));
    }
}
