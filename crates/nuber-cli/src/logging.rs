//! Stderr logging for the CLI.
//!
//! The filter comes from `NUBER_LOG`, then `RUST_LOG`. Without either, only
//! warnings are shown unless `--verbose` is given.
//!
//! ```bash
//! NUBER_LOG=nuber_api=debug nuber phone 1012345678
//! ```

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "nuber=warn";
const VERBOSE_FILTER: &str = "nuber=debug";

/// Picks the filter directive: environment first, then the verbosity default.
fn filter_directive(env_filter: Option<String>, verbose: bool) -> String {
    env_filter
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| {
            if verbose {
                VERBOSE_FILTER.to_string()
            } else {
                DEFAULT_FILTER.to_string()
            }
        })
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let from_env = std::env::var("NUBER_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();
    let directive = filter_directive(from_env, verbose);
    let env_filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(verbose),
    );
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_wins_over_verbose() {
        assert_eq!(filter_directive(Some("nuber_api=trace".into()), true), "nuber_api=trace");
    }

    #[test]
    fn test_blank_env_falls_back_to_default() {
        assert_eq!(filter_directive(Some("  ".into()), false), DEFAULT_FILTER);
        assert_eq!(filter_directive(None, true), VERBOSE_FILTER);
    }
}
