//! CLI command implementations.
//! CLI 命令实现。

pub mod repl;
pub mod run;

use std::io;

use lox_diagnostic::ErrorReporter;
use lox_lexer::Scanner;
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::output;

/// Exit status for input that failed to scan (sysexits `EX_DATAERR`).
pub const EX_DATAERR: i32 = 65;
/// Exit status for unreadable input (sysexits `EX_IOERR`).
pub const EX_IOERR: i32 = 74;

/// Why a command stopped.
/// 命令终止的原因。
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read file '{path}': {source}")]
    Read { path: String, source: io::Error },

    /// Errors were already reported through the reporter.
    #[error("scan failed")]
    Scan,

    #[error("prompt error: {0}")]
    Prompt(#[from] ReadlineError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Scan => EX_DATAERR,
            CliError::Read { .. } | CliError::Prompt(_) => EX_IOERR,
        }
    }
}

/// Flags shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub verbose: bool,
    pub quiet: bool,
    pub pretty: bool,
}

/// Scan one source buffer and print its tokens, one per line.
/// 扫描一段源码，并逐行打印其 token。
///
/// The verbose summary reads the reporter's failure flag, so it reflects
/// everything reported since the last reset.
/// 详细摘要读取报告器的失败标志，反映自上次重置以来的所有报告。
pub fn scan_source(source: &str, reporter: &mut dyn ErrorReporter, options: Options) {
    let tokens = Scanner::new(source, reporter).scan_tokens();

    if !options.quiet {
        for token in &tokens {
            println!("{token}");
        }
    }

    if options.verbose {
        let status = if reporter.had_error() { "with errors" } else { "ok" };
        output::info(&format!("scanned {} token(s), {status}", tokens.len()));
    }
}
