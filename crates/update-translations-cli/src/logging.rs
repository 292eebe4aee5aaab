//! Diagnostic logging to stderr.
//!
//! Standard output carries only the build tool's output, so every event goes
//! to stderr. `RUST_LOG` takes precedence over `--verbose`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,update_translations_core=debug,update_translations=debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose)
        .without_time()
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn verbose_enables_debug_for_own_crates() {
        let directive = default_directive(true);
        assert!(directive.contains("update_translations_core=debug"));
        assert!(EnvFilter::try_new(directive).is_ok());
    }
}
