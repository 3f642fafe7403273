//! Rich terminal rendering of reports with ariadne.
//! 使用 ariadne 渲染美观的错误报告。

use std::io::{self, Write};

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use lox_common::LineIndex;

use crate::{ErrorCode, ErrorReporter, ScanError, format_report};

/// Renders each report against the source it came from, underlining the
/// reported line.
/// 在源码上渲染每条报告，并标出出错的行。
pub struct PrettyReporter<'src, W: Write = io::Stderr> {
    source: &'src str,
    filename: String,
    lines: LineIndex,
    out: W,
    color: bool,
    had_error: bool,
}

impl<'src> PrettyReporter<'src> {
    /// Render to stderr, in color.
    /// 以彩色输出到标准错误。
    pub fn new(source: &'src str, filename: impl Into<String>) -> Self {
        Self::with_writer(source, filename, io::stderr()).with_color(true)
    }
}

impl<'src, W: Write> PrettyReporter<'src, W> {
    /// Render to `out`, without color.
    /// 输出到 `out`，不带颜色。
    pub fn with_writer(source: &'src str, filename: impl Into<String>, out: W) -> Self {
        Self {
            source,
            filename: filename.into(),
            lines: LineIndex::new(source),
            out,
            color: false,
            had_error: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: usize, location: &str, message: &str, code: Option<ErrorCode>) {
        let filename = self.filename.as_str();
        let range = self.lines.line_range(line);

        // Line ranges are byte offsets; ariadne counts chars unless told otherwise.
        let config = Config::default()
            .with_index_type(IndexType::Byte)
            .with_color(self.color);

        let mut report = Report::build(ReportKind::Error, filename, range.start)
            .with_config(config)
            .with_message(format_report(line, location, message))
            .with_label(
                Label::new((filename, range))
                    .with_message(message)
                    .with_color(Color::Red),
            );

        if let Some(code) = code {
            report = report.with_code(code.as_str()).with_note(code.description());
            if let Some(help) = code.suggestion() {
                report = report.with_help(help);
            }
        }

        // Rendering is best effort; the failure flag is what callers act on.
        let _ = report
            .finish()
            .write((filename, Source::from(self.source)), &mut self.out);
        self.had_error = true;
    }
}

impl<W: Write> ErrorReporter for PrettyReporter<'_, W> {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.emit(line, location, message, None);
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn reset(&mut self) {
        self.had_error = false;
    }

    fn report_scan_error(&mut self, error: &ScanError) {
        self.emit(error.line(), "", &error.to_string(), Some(error.code()));
    }
}
