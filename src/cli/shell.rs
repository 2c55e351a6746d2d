use std::io::{BufRead, Write};

use shell_words::split;
use tracing::{debug, info};

use super::commands::{dispatch, Reply};
use super::{CliError, CommandError, LoopControl, ShellContext};

/// Reads commands line by line until `exit` or end of input.
///
/// Command failures are written to `output` as `Error: ...` and the loop
/// continues; only I/O failures abort.
pub fn run_script<R: BufRead, W: Write>(
    context: &mut ShellContext,
    input: R,
    mut output: W,
) -> Result<(), CliError> {
    info!("shell started");
    for line in input.lines() {
        let line = line?;
        match handle_line(context, &line) {
            Ok(Reply { text, control }) => {
                if let Some(text) = text {
                    writeln!(output, "{text}")?;
                }
                if control == LoopControl::Exit {
                    break;
                }
            }
            Err(err) => writeln!(output, "Error: {err}")?,
        }
    }
    output.flush()?;
    Ok(())
}

/// Tokenizes one line with shell quoting rules and dispatches it.
pub fn handle_line(context: &mut ShellContext, line: &str) -> Result<Reply, CommandError> {
    let tokens = split(line).map_err(|err| CommandError::Parse(err.to_string()))?;
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(Reply {
            text: None,
            control: LoopControl::Continue,
        });
    };
    let command = raw.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    debug!(command = %command, args = args.len(), "dispatching");
    dispatch(context, &command, &args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::FormatOptions;
    use chrono::NaiveDate;

    fn run(script: &str) -> String {
        let mut context = ShellContext::new(FormatOptions::default())
            .with_date(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        let mut out = Vec::new();
        run_script(&mut context, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quoted_descriptions_stay_whole() {
        let out = run("add expense \"Car insurance\" 120\n");
        assert!(out.contains("expense-0  Car insurance  - 120.00"));
    }

    #[test]
    fn errors_are_reported_and_loop_continues() {
        let out = run("add income Salary -5\nadd income Salary 5\n");
        assert!(out.contains("Error: Value must be greater than zero, got -5"));
        assert!(out.contains("Added income-0"));
    }

    #[test]
    fn blank_lines_are_ignored_and_exit_stops_reading() {
        let out = run("\n   \nexit\nadd income Late 10\n");
        assert!(out.is_empty());
    }

    #[test]
    fn unbalanced_quotes_are_reported() {
        let out = run("add income \"Salary 10\n");
        assert!(out.starts_with("Error: Could not parse line"));
    }
}
