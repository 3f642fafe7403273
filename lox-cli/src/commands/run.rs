//! Running a script file.
//! 运行脚本文件。

use std::fs;

use lox_diagnostic::{ErrorReporter, PrettyReporter, StreamReporter};

use super::{CliError, Options, scan_source};

pub fn run(file: &str, options: Options) -> Result<(), CliError> {
    let source = fs::read_to_string(file).map_err(|source| CliError::Read {
        path: file.to_string(),
        source,
    })?;

    let mut stream = StreamReporter::stderr();
    let mut pretty = PrettyReporter::new(&source, file);
    let reporter: &mut dyn ErrorReporter = if options.pretty {
        &mut pretty
    } else {
        &mut stream
    };

    scan_source(&source, reporter, options);

    if reporter.had_error() {
        return Err(CliError::Scan);
    }
    Ok(())
}
