//! The error reporting capability and its plain variants.

use std::io::Write;

use crate::ScanError;

/// Format one report line.
///
/// `location` is empty for scanner errors; later stages fill it with
/// something like `at 'foo'`.
pub fn format_report(line: usize, location: &str, message: &str) -> String {
    format!("[line {line}] Error {location}: {message}")
}

/// Where errors found during scanning end up.
/// 扫描期间发现的错误的去处。
///
/// Reporting never fails and never stops the caller. The first report sets a
/// sticky failure flag that only [`ErrorReporter::reset`] clears.
pub trait ErrorReporter {
    /// Deliver one report and set the failure flag.
    fn report(&mut self, line: usize, location: &str, message: &str);

    /// Whether anything has been reported since creation or the last reset.
    fn had_error(&self) -> bool;

    /// Clear the failure flag, e.g. between prompt lines.
    fn reset(&mut self);

    /// Report an error with no location qualifier.
    fn error(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    fn report_scan_error(&mut self, error: &ScanError) {
        self.error(error.line(), &error.to_string());
    }
}

/// Writes every report to an output stream as soon as it arrives.
#[derive(Debug)]
pub struct StreamReporter<W: Write> {
    out: W,
    had_error: bool,
}

impl<W: Write> StreamReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            had_error: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl StreamReporter<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> ErrorReporter for StreamReporter<W> {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        // A broken stream must not turn into a scanner failure.
        let _ = writeln!(self.out, "{}", format_report(line, location, message));
        self.had_error = true;
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn reset(&mut self) {
        self.had_error = false;
    }
}

/// Keeps every report in memory, in order.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    errors: Vec<String>,
    had_error: bool,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.errors.push(format_report(line, location, message));
        self.had_error = true;
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn reset(&mut self) {
        self.had_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_report_empty_location() {
        assert_eq!(
            format_report(3, "", "Unterminated string."),
            "[line 3] Error : Unterminated string."
        );
    }

    #[test]
    fn test_format_report_with_location() {
        assert_eq!(
            format_report(1, "at 'x'", "Expect ';'."),
            "[line 1] Error at 'x': Expect ';'."
        );
    }

    #[test]
    fn test_reset_keeps_collected_errors() {
        let mut reporter = CollectingReporter::new();
        reporter.error(1, "first");
        reporter.reset();
        assert!(!reporter.had_error());
        assert_eq!(reporter.errors().len(), 1);
    }
}
