use strsim::levenshtein;

use crate::ledger::RecordKind;
use crate::presentation::{parse_input, render_snapshot};
use crate::utils::build_info;

use super::{CommandError, LoopControl, ShellContext};

pub const COMMAND_NAMES: &[&str] = &[
    "add", "delete", "show", "json", "version", "help", "exit", "quit",
];

const ADD_USAGE: &str = "add <income|expense> <description> <value>";
const DELETE_USAGE: &str = "delete <kind>-<id> | delete <kind> <id>";
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// What the shell should print, and whether to keep going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: Option<String>,
    pub control: LoopControl,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            control: LoopControl::Continue,
        }
    }

    fn exit() -> Self {
        Self {
            text: None,
            control: LoopControl::Exit,
        }
    }
}

pub fn dispatch(
    context: &mut ShellContext,
    command: &str,
    args: &[&str],
) -> Result<Reply, CommandError> {
    match command {
        "add" => add(context, args),
        "delete" | "del" | "rm" => delete(context, args),
        "show" => Ok(Reply::text(render(context))),
        "json" => {
            let snapshot = context.controller.snapshot();
            Ok(Reply::text(serde_json::to_string_pretty(&snapshot)?))
        }
        "version" => Ok(Reply::text(build_info::current().summary())),
        "help" => Ok(Reply::text(usage())),
        "exit" | "quit" => Ok(Reply::exit()),
        other => Err(CommandError::UnknownCommand {
            command: other.to_string(),
            suggestion: suggest(other),
        }),
    }
}

fn add(context: &mut ShellContext, args: &[&str]) -> Result<Reply, CommandError> {
    let [kind, description, value] = args else {
        return Err(CommandError::Usage(ADD_USAGE));
    };
    let entry = parse_input(kind, description, value)?;
    let update = context
        .controller
        .add(entry.kind, entry.description, entry.value)?;
    Ok(Reply::text(format!(
        "Added {}\n{}",
        update.record.label(),
        render_snapshot(&update.snapshot, context.today, &context.options)
    )))
}

fn delete(context: &mut ShellContext, args: &[&str]) -> Result<Reply, CommandError> {
    let (kind, id) = match args {
        [label] => label
            .rsplit_once('-')
            .ok_or(CommandError::Usage(DELETE_USAGE))?,
        [kind, id] => (*kind, *id),
        _ => return Err(CommandError::Usage(DELETE_USAGE)),
    };
    let kind: RecordKind = kind.parse()?;
    let id: u32 = id
        .trim()
        .parse()
        .map_err(|_| CommandError::Usage(DELETE_USAGE))?;
    let update = context.controller.delete(kind, id)?;
    Ok(Reply::text(format!(
        "Deleted {}\n{}",
        update.record.label(),
        render_snapshot(&update.snapshot, context.today, &context.options)
    )))
}

fn render(context: &ShellContext) -> String {
    render_snapshot(
        &context.controller.snapshot(),
        context.today,
        &context.options,
    )
}

fn suggest(input: &str) -> Option<&'static str> {
    COMMAND_NAMES
        .iter()
        .map(|name| (*name, levenshtein(input, name)))
        .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}

pub fn usage() -> String {
    format!(
        "Commands:\n  {ADD_USAGE}\n  {DELETE_USAGE}\n  show\n  json\n  version\n  help\n  exit"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::FormatOptions;
    use chrono::NaiveDate;

    fn context() -> ShellContext {
        ShellContext::new(FormatOptions::default())
            .with_date(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap())
    }

    #[test]
    fn suggests_close_command_names() {
        assert_eq!(suggest("shwo"), Some("show"));
        assert_eq!(suggest("ad"), Some("add"));
        assert_eq!(suggest("balance"), None);
    }

    #[test]
    fn delete_accepts_label_or_two_arguments() {
        let mut ctx = context();
        dispatch(&mut ctx, "add", &["expense", "A", "1"]).unwrap();
        dispatch(&mut ctx, "add", &["expense", "B", "2"]).unwrap();

        let reply = dispatch(&mut ctx, "delete", &["expense-0"]).unwrap();
        assert!(reply.text.unwrap().starts_with("Deleted expense-0"));
        let reply = dispatch(&mut ctx, "delete", &["expense", "1"]).unwrap();
        assert!(reply.text.unwrap().starts_with("Deleted expense-1"));
        assert!(ctx.controller.ledger().is_empty());
    }

    #[test]
    fn add_requires_three_arguments() {
        let mut ctx = context();
        let err = dispatch(&mut ctx, "add", &["income", "Salary"]).unwrap_err();
        assert!(matches!(err, CommandError::Usage(_)));
    }

    #[test]
    fn unknown_command_message_includes_suggestion() {
        let mut ctx = context();
        let err = dispatch(&mut ctx, "delte", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown command `delte` (did you mean `delete`?)"
        );
    }

    #[test]
    fn version_reports_target_and_compiler() {
        let mut ctx = context();
        let text = dispatch(&mut ctx, "version", &[]).unwrap().text.unwrap();
        assert!(text.starts_with(&format!("budget_ledger {}", env!("CARGO_PKG_VERSION"))));
        assert!(text.contains("  target : "));
        assert!(text.contains("  rustc  : "));
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut ctx = context();
        let reply = dispatch(&mut ctx, "quit", &[]).unwrap();
        assert_eq!(reply.control, LoopControl::Exit);
    }
}
