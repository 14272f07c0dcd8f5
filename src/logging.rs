//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; the stage output printed by
//! [`crate::output`] stays on stdout.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Level selected by the `--verbose` / `--quiet` flags. Verbose wins.
pub fn level(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init(
    verbose: bool,
    quiet: bool,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level(verbose, quiet))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_warn() {
        assert_eq!(level(false, false), Level::WARN);
    }

    #[test]
    fn quiet_is_error() {
        assert_eq!(level(false, true), Level::ERROR);
    }

    #[test]
    fn verbose_overrides_quiet() {
        assert_eq!(level(true, false), Level::DEBUG);
        assert_eq!(level(true, true), Level::DEBUG);
    }
}
