//! Error reporting for Lox.
//! Lox 的错误报告。
//!
//! The scanner only knows the [`ErrorReporter`] trait. Callers pick where
//! reports go: a stream ([`StreamReporter`]), memory ([`CollectingReporter`]),
//! or an ariadne rendering against the source ([`PrettyReporter`]).
//! All of them share the `[line N] Error <where>: <message>` format.

mod codes;
mod error;
mod pretty;
mod reporter;

pub use codes::ErrorCode;
pub use error::ScanError;
pub use pretty::PrettyReporter;
pub use reporter::{CollectingReporter, ErrorReporter, StreamReporter, format_report};
