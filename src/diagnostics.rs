// Diagnostic sink: where the catalog store reports load/save outcomes.
// The store receives its sink explicitly instead of reaching for global
// logger state, so tests can capture the entries and the binary can
// forward them to the log file.

/// Receiver for store diagnostics. Messages are single-line
/// `event=... status=...` strings.
pub trait DiagnosticSink {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards diagnostics to the `log` facade. The binary installs
/// `flexi_logger` behind it (see `logging::init_logging`).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn info(&self, message: &str) {
        log::info!(target: "catalog", "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: "catalog", "{message}");
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
