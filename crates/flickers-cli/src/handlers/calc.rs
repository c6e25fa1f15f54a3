//! Calc command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::handlers::load_history;
use crate::output::Printer;
use crate::CalcArgs;
use flickers_core::calc::{Calculator, DisplaySnapshot};
use flickers_core::driver::{CalculatorDriver, KeypadDriver};

/// Execute the calc command
pub fn execute_calc(config: &CliConfig, args: &CalcArgs) -> CliResult<()> {
    let calculator = Calculator::with_history(load_history(config));
    let display = press_keys(KeypadDriver::with_calculator(calculator), &args.sequence())?;
    print_display(&Printer::new(config), &display)
}

/// Presses every key and returns the final display
pub fn press_keys(mut driver: KeypadDriver, sequence: &str) -> CliResult<DisplaySnapshot> {
    driver.enter_keys(sequence)?;
    let snapshot = driver.display();
    tracing::info!(
        current = %snapshot.current,
        previous = %snapshot.previous,
        history = driver.calculator().history().len(),
        "keys applied"
    );
    Ok(snapshot)
}

fn print_display(printer: &Printer, display: &DisplaySnapshot) -> CliResult<()> {
    if printer.is_json() {
        return printer.json(display);
    }
    if !display.previous.is_empty() {
        printer.detail(&display.previous)?;
    }
    printer.result(&display.current)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_press_keys_result() {
        let display = press_keys(KeypadDriver::new(), "2 + 3 * 4 =").unwrap();
        assert_eq!(display.current, "20");
        assert!(display.previous.is_empty());
    }

    #[test]
    fn test_press_keys_pending_operator() {
        let display = press_keys(KeypadDriver::new(), "12 /").unwrap();
        assert_eq!(display.current, "12");
        assert_eq!(display.previous, "12 /");
    }

    #[test]
    fn test_press_keys_logs_snapshot() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_test_writer()
            .finish();
        let snapshot = tracing::subscriber::with_default(subscriber, || {
            press_keys(KeypadDriver::new(), "9 - 4").unwrap()
        });
        assert_eq!(snapshot.current, "4");
        assert_eq!(snapshot.previous, "9 -");
    }

    #[test]
    fn test_press_keys_unknown() {
        let err = press_keys(KeypadDriver::new(), "2 ^ 2").unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
    }
}
