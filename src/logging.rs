/// Initializes structured logging.
///
/// Filtering follows `RUST_LOG` (e.g. `RUST_LOG=production_planner=trace` shows
/// every new maximum and tie found by the search). Output goes to stderr so it
/// never mixes with prompts and reports on stdout.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
