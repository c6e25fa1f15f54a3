//! Converter command handlers: convert, discount, bmi, units

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Printer;
use crate::{BmiArgs, ConvertArgs, DiscountArgs, UnitsArgs};
use flickers_core::convert::{self, Category, ConversionOutput};
use serde::Serialize;

/// Conversion as reported to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    /// Category name
    pub category: String,
    /// Source unit
    pub from: String,
    /// Target unit
    pub to: String,
    /// Input as typed
    pub input: String,
    /// Formatted result
    pub result: String,
    /// Structured result
    pub output: ConversionOutput,
}

impl ConversionReport {
    /// Text line, e.g. `1 м = 100 см`
    #[must_use]
    pub fn line(&self) -> String {
        format!("{} {} = {} {}", self.input.trim(), self.from, self.result, self.to)
    }
}

/// Runs a conversion request
pub fn run_conversion(args: &ConvertArgs) -> CliResult<ConversionReport> {
    let category: Category = args.category.parse()?;
    let output = category.convert(&args.from, &args.to, &args.value)?;
    Ok(ConversionReport {
        category: category.to_string(),
        from: args.from.clone(),
        to: args.to.clone(),
        input: args.value.clone(),
        result: output.to_string(),
        output,
    })
}

/// Execute the convert command
pub fn execute_convert(config: &CliConfig, args: &ConvertArgs) -> CliResult<()> {
    let report = run_conversion(args)?;
    let printer = Printer::new(config);
    if printer.is_json() {
        printer.json(&report)
    } else {
        printer.result(&report.line())
    }
}

/// Execute the discount command
pub fn execute_discount(config: &CliConfig, args: &DiscountArgs) -> CliResult<()> {
    let output = convert::discount_output(args.price, args.percent)?;
    print_output(&Printer::new(config), &output)
}

/// Execute the bmi command
pub fn execute_bmi(config: &CliConfig, args: &BmiArgs) -> CliResult<()> {
    let output = convert::bmi_output(args.weight, args.height)?;
    print_output(&Printer::new(config), &output)
}

fn print_output(printer: &Printer, output: &ConversionOutput) -> CliResult<()> {
    if printer.is_json() {
        printer.json(output)
    } else {
        printer.result(&output.to_string())
    }
}

/// Category and its units
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitListing {
    /// Category name
    pub category: Category,
    /// Unit labels in table order
    pub units: Vec<&'static str>,
}

/// Lists one category or all of them
pub fn list_units(category: Option<&str>) -> CliResult<Vec<UnitListing>> {
    let categories = match category {
        Some(name) => vec![name
            .parse::<Category>()
            .map_err(|e| CliError::invalid_argument(e.to_string()))?],
        None => Category::ALL.to_vec(),
    };
    Ok(categories
        .into_iter()
        .map(|category| UnitListing {
            category,
            units: category.units(),
        })
        .collect())
}

/// Execute the units command
pub fn execute_units(config: &CliConfig, args: &UnitsArgs) -> CliResult<()> {
    let listings = list_units(args.category.as_deref())?;
    let printer = Printer::new(config);
    if printer.is_json() {
        return printer.json(&listings);
    }
    for listing in &listings {
        printer.field(listing.category.name(), &listing.units.join(", "))?;
    }
    Ok(())
}
