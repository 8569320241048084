//! Logger setup.

use env_logger::Env;

/// Default filter when `RUST_LOG` is unset.
#[cfg(debug_assertions)]
const DEFAULT_FILTER: &str = "debug";
#[cfg(not(debug_assertions))]
const DEFAULT_FILTER: &str = "info";

/// Initialise logging. `RUST_LOG` overrides the default level.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }
}
