use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// The default level is `warn` so skipped entries surface without noise.
/// `quiet` lowers it to `error`, `verbose` raises it to `debug`.
/// `RUST_LOG` directives are applied on top.
pub fn init_logging(quiet: bool, verbose: bool) {
    let directive = if quiet {
        "qublog_timer=error"
    } else if verbose {
        "qublog_timer=debug"
    } else {
        "qublog_timer=warn"
    };

    let filter = match directive.parse() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };

    // try_init: tests may install a subscriber more than once per process
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(filter)
        .try_init();
}
