pub const DEFAULT_LOG_FILE: &str = "rchat.log";

/// Sends `RUST_LOG`-filtered traces to `filename` (default `rchat.log`).
pub fn init_logger(filename: Option<&str>) -> std::io::Result<()> {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::prelude::*;

    let file = std::fs::File::create(filename.unwrap_or(DEFAULT_LOG_FILE))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .try_init()
        .map_err(std::io::Error::other)
}
