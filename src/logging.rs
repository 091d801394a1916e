// ============================================================================
// Logging
// Optional tracing subscriber for binaries that embed the library
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered at `level` for this crate.
///
/// `RUST_LOG` overrides the default filter. Output goes to stderr so it
/// never interleaves with prompts on stdout. Calling this twice is a no-op.
pub fn init_logging(level: &str) {
    let default = format!("warn,quiz_kit={level}");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init();
}
