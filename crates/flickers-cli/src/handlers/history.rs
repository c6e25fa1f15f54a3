//! History command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::handlers::load_history;
use crate::output::Printer;
use crate::HistoryArgs;
use flickers_core::calc::HistoryLedger;

/// Execute the history command
pub fn execute_history(config: &CliConfig, args: &HistoryArgs) -> CliResult<()> {
    let mut ledger = load_history(config);
    let printer = Printer::new(config);

    if args.clear {
        let removed = ledger.len();
        ledger.clear();
        tracing::info!(removed, "history cleared");
        if printer.is_json() {
            return printer.json(&serde_json::json!({ "cleared": removed }));
        }
        return printer.success(&format!("Cleared {removed} history entries"));
    }

    let lines = history_lines(&ledger, args.limit.unwrap_or(config.history_lines));
    if printer.is_json() {
        return printer.json(&lines);
    }
    if lines.is_empty() {
        return printer.info("History is empty");
    }
    for line in &lines {
        printer.result(line)?;
    }
    Ok(())
}

/// The newest `limit` lines, newest first
#[must_use]
pub fn history_lines(ledger: &HistoryLedger, limit: usize) -> Vec<String> {
    ledger.recent_lines(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_lines_newest_first() {
        let mut ledger = HistoryLedger::new();
        ledger.record("1 + 1", 2.0);
        ledger.record("2 + 2", 4.0);
        ledger.record("3 + 3", 6.0);
        assert_eq!(history_lines(&ledger, 2), ["3 + 3 = 6", "2 + 2 = 4"]);
        assert_eq!(history_lines(&ledger, 10).len(), 3);
        assert!(history_lines(&ledger, 0).is_empty());
    }
}
