use std::{io, process};

use budget_ledger::{
    cli::{run_script, CliError, ShellContext},
    config::ConfigManager,
    init,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let config = ConfigManager::new().load()?;
    let mut context = ShellContext::new(config.format_options());
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_script(&mut context, stdin.lock(), stdout.lock())
}
