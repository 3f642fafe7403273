//! Lox CLI - scans Lox scripts, or lines typed at a prompt, into tokens.
//! Lox CLI - 将 Lox 脚本或交互输入的行扫描为 token。

mod commands;
mod output;

use clap::Parser;
use commands::{CliError, Options};

/// Exit status for bad command-line usage (sysexits `EX_USAGE`).
const EX_USAGE: i32 = 64;

#[derive(Parser)]
#[command(name = "lox")]
#[command(author, version, about = "Lox - tokenize Lox source", long_about = None)]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    script: Option<String>,

    /// Print a summary after each scan.
    #[arg(short, long)]
    verbose: bool,

    /// Don't print tokens.
    #[arg(short, long)]
    quiet: bool,

    /// Render errors against the source instead of one line each.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { EX_USAGE } else { 0 });
        }
    };

    let options = Options {
        verbose: cli.verbose,
        quiet: cli.quiet,
        pretty: cli.pretty,
    };

    let result = match cli.script.as_deref() {
        Some(file) => commands::run::run(file, options),
        None => commands::repl::run(options),
    };

    if let Err(e) = result {
        if !matches!(e, CliError::Scan) {
            output::error(&e.to_string());
        }
        std::process::exit(e.exit_code());
    }
}
