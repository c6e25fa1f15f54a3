//! Theme command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::handlers::open_store;
use crate::output::Printer;
use crate::ThemeArgs;
use flickers_core::theme::Theme;

/// Execute the theme command: print the stored theme, or store a new one
pub fn execute_theme(config: &CliConfig, args: &ThemeArgs) -> CliResult<()> {
    let mut store = open_store(config)?;
    let printer = Printer::new(config);

    let theme = match &args.name {
        Some(name) => {
            let theme: Theme = name.parse()?;
            theme.save(&mut store)?;
            tracing::info!(%theme, "theme saved");
            theme
        }
        None => Theme::load(&store),
    };

    if printer.is_json() {
        printer.json(&serde_json::json!({ "theme": theme }))
    } else {
        printer.result(theme.name())
    }
}
