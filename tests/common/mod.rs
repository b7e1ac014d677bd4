use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by domain-origin and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see which rule qualifying or trimming a name took:
///   RUST_LOG=domain_origin=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
