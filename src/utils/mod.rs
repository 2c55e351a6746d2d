pub mod build_info;

use std::{env, sync::Once};

static TRACING_INIT: Once = Once::new();

const LOG_ENV: &str = "BUDGET_LEDGER_LOG";
const DEFAULT_DIRECTIVES: &str = "budget_ledger=info";

/// Installs the global tracing subscriber on stderr.
///
/// Directives come from `BUDGET_LEDGER_LOG`, then `RUST_LOG`, then
/// `budget_ledger=info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let directives = filter_directives(
            env::var(LOG_ENV).ok(),
            env::var(EnvFilter::DEFAULT_ENV).ok(),
        );
        let filter =
            EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        // A subscriber may already be installed by an embedding application.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Picks the first non-blank directive source.
fn filter_directives(app_log: Option<String>, rust_log: Option<String>) -> String {
    [app_log, rust_log]
        .into_iter()
        .flatten()
        .find(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_variable_wins_over_rust_log() {
        let directives = filter_directives(
            Some("budget_ledger=trace".into()),
            Some("budget_ledger=debug".into()),
        );
        assert_eq!(directives, "budget_ledger=trace");
    }

    #[test]
    fn rust_log_is_used_when_app_variable_is_unset_or_blank() {
        let rust_log = Some("budget_ledger=debug".to_string());
        assert_eq!(filter_directives(None, rust_log.clone()), "budget_ledger=debug");
        assert_eq!(
            filter_directives(Some("  ".into()), rust_log),
            "budget_ledger=debug"
        );
    }

    #[test]
    fn falls_back_to_crate_info_level() {
        assert_eq!(filter_directives(None, None), DEFAULT_DIRECTIVES);
    }

    #[test]
    fn chosen_directive_keeps_debug_level() {
        let directives = filter_directives(None, Some("budget_ledger=debug".into()));
        let filter = tracing_subscriber::EnvFilter::try_new(&directives).unwrap();
        assert_eq!(filter.to_string(), "budget_ledger=debug");
    }
}
