/// Initializes structured logging for the binary.
///
/// Log verbosity is controlled through the `RUST_LOG` environment variable
/// (for example `RUST_LOG=checkout_flow=debug`). Output goes to stderr so that
/// stdout carries only the rendered checkout and the submitted order.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
