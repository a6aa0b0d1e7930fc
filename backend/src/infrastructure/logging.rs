use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr; stdout is for content.
///
/// `RUST_LOG` wins; otherwise `fallback` (the `[logging] level` value).
pub fn init(fallback: &str) {
  let filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(fallback))
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  // A second init (e.g. from tests) is not an error worth reporting.
  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
