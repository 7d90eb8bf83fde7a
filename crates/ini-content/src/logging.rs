//! Subscriber setup for applications that embed the store

use std::io::IsTerminal;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crates whose events [`default_filter`] lets through at the chosen level.
pub const TARGETS: [&str; 2] = ["ini_content", "ini_fs"];

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// `level` for the store's own crates, warnings and above for everything else.
pub fn default_filter(level: &str) -> Result<EnvFilter, InitError> {
    let mut directives = vec!["warn".to_string()];
    directives.extend(TARGETS.iter().map(|target| format!("{target}={level}")));
    Ok(EnvFilter::try_new(directives.join(","))?)
}

/// A compact subscriber writing to `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W, ansi: bool) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(ansi)
        .with_writer(writer)
        .compact();

    tracing_subscriber::registry().with(filter).with(fmt_layer)
}

/// Install the global subscriber, logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise [`default_filter`] at `info`. The
/// library itself only emits events and never calls this.
pub fn init() -> Result<(), InitError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => default_filter("info")?,
    };
    let ansi = std::io::stderr().is_terminal();

    subscriber(filter, std::io::stderr, ansi).try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{Dialect, LineStore};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(level: &str, f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = subscriber(default_filter(level).unwrap(), move || writer.clone(), false);
        tracing::subscriber::with_default(subscriber, f);
        captured.text()
    }

    #[test]
    fn test_store_events_reach_the_subscriber() {
        let output = capture("debug", || {
            let mut store = LineStore::parse("[logged]\nk=v", Dialect::default()).unwrap();
            store.add_property("logged", "n", "1").unwrap();
        });

        assert!(output.contains("Parsed document"), "{output}");
        assert!(output.contains("Added property"), "{output}");
        assert!(output.contains("ini_content::store"), "{output}");
    }

    #[test]
    fn test_default_filter_quiets_other_crates() {
        let output = capture("debug", || {
            tracing::info!(target: "some_dependency", "dependency chatter");
            tracing::warn!(target: "some_dependency", "dependency warning");
        });

        assert!(!output.contains("dependency chatter"), "{output}");
        assert!(output.contains("dependency warning"), "{output}");
    }

    #[test]
    fn test_info_level_hides_store_debug_events() {
        let output = capture("info", || {
            LineStore::parse("[logged]\nk=v", Dialect::default()).unwrap();
        });

        assert!(!output.contains("Parsed document"), "{output}");
    }

    #[test]
    fn test_default_filter_rejects_bad_level() {
        assert!(default_filter("verbose").is_err());
    }
}
