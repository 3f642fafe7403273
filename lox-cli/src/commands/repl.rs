//! The interactive prompt.
//! 交互式提示符。

use lox_diagnostic::{ErrorReporter, PrettyReporter, StreamReporter};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::{CliError, Options, scan_source};

pub fn run(options: Options) -> Result<(), CliError> {
    let mut rl = DefaultEditor::new()?;
    let mut reporter = StreamReporter::stderr();

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());

                if options.pretty {
                    let mut pretty = PrettyReporter::new(&line, "<prompt>");
                    scan_source(&line, &mut pretty, options);
                } else {
                    scan_source(&line, &mut reporter, options);
                    // A bad line must not poison the ones after it.
                    reporter.reset();
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
