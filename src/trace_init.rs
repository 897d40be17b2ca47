//! Optional trace output for segmentation and table loading.
//!
//! With the `trace` feature, `init_tracing` routes the crate's `debug!`
//! events and `segment` spans to `pinyin-trace.jsonl`, one JSON object per
//! line. `RUST_LOG` overrides the default `pinyin_engine=debug` filter.
//! Without the feature it does nothing.

#[cfg(feature = "trace")]
mod enabled {
    use std::path::Path;
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    const LOG_FILE: &str = "pinyin-trace.jsonl";
    const DEFAULT_FILTER: &str = "pinyin_engine=debug";

    static INIT: Once = Once::new();

    pub fn init_tracing(log_dir: &Path) {
        INIT.call_once(|| {
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, LOG_FILE));
            // Flushes on drop; the subscriber lives until exit.
            std::mem::forget(guard);

            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
            tracing_subscriber::fmt()
                .json()
                .with_writer(writer)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_env_filter(filter)
                .init();
        });
    }
}

#[cfg(feature = "trace")]
pub use enabled::init_tracing;

/// No-op: build with the `trace` feature to write traces.
#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        init_tracing(dir.path());
        init_tracing(dir.path());
    }
}
