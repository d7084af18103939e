use crate::types::LogLevel;

/// Install the global fmt subscriber on stderr.
///
/// Stdout carries the progress lines and summaries, so diagnostics never
/// interleave with them. Calling this twice keeps the first subscriber.
pub fn init(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
