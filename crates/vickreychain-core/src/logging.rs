//! Logging setup shared by the desktop app and the CLI.
//!
//! ## Usage
//!
//! ```ignore
//! use vickreychain_core::LoggingBuilder;
//!
//! // -vv on the command line
//! LoggingBuilder::new().verbosity(2).init()?;
//!
//! // RUST_LOG still wins when set
//! // RUST_LOG=vickreychain_core=trace vickreychain faq
//! ```

use tracing_subscriber::EnvFilter;

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone, Default)]
pub struct LoggingBuilder {
    verbosity: u8,
    env_filter: Option<String>,
    json: bool,
    stderr: bool,
}

impl LoggingBuilder {
    /// Warn-level console logging.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity from a `-v` count (0 = warn, 1 = info, 2 = debug, 3+ = trace).
    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set an explicit filter (e.g., "vickreychain=info,vickreychain_core=debug").
    ///
    /// Takes precedence over the verbosity level but not over `RUST_LOG`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Emit one JSON object per event instead of human-readable lines.
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Write to stderr so stdout stays clean for command output.
    pub fn stderr(mut self) -> Self {
        self.stderr = true;
        self
    }

    /// The filter directive used when `RUST_LOG` is not set.
    pub fn directive(&self) -> String {
        if let Some(ref filter) = self.env_filter {
            return filter.clone();
        }
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directive()))
    }

    /// Install the global subscriber.
    ///
    /// Fails if a global subscriber was already installed.
    pub fn init(self) -> Result<(), tracing_subscriber::util::TryInitError> {
        use tracing_subscriber::fmt;
        use tracing_subscriber::prelude::*;

        let filter = self.env_filter();
        let registry = tracing_subscriber::registry().with(filter);

        match (self.json, self.stderr) {
            (true, true) => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
            (true, false) => registry.with(fmt::layer().json()).try_init(),
            (false, true) => registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init(),
            (false, false) => registry.with(fmt::layer()).try_init(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EarlyAccessForm;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn verbosity_levels() {
        let levels: Vec<String> = (0..=4)
            .map(|v| LoggingBuilder::new().verbosity(v).directive())
            .collect();
        assert_eq!(levels, vec!["warn", "info", "debug", "trace", "trace"]);
    }

    #[test]
    fn explicit_filter_wins_over_verbosity() {
        let builder = LoggingBuilder::new()
            .verbosity(3)
            .with_filter("vickreychain_core=debug");
        assert_eq!(builder.directive(), "vickreychain_core=debug");
    }

    /// Collects formatted events so tests can assert on them.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture<F: FnOnce()>(f: F) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("info"))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buf.contents()
    }

    #[test]
    fn submit_logs_through_subscriber() {
        let output = capture(|| {
            let mut form = EarlyAccessForm::new();
            form.set_email("bidder@example.com");
            assert!(form.submit().is_ok());
        });

        assert!(output.contains("INFO"), "{output}");
        assert!(output.contains("Submitted email"), "{output}");
        assert!(output.contains("bidder@example.com"), "{output}");
    }

    #[test]
    fn rejected_submit_logs_no_confirmation() {
        let output = capture(|| {
            let mut form = EarlyAccessForm::new();
            form.set_email("not-an-email");
            assert!(form.submit().is_err());
        });

        assert!(!output.contains("Submitted email"), "{output}");
        assert!(output.contains("Early access submit rejected"), "{output}");
    }
}
