//! Output formatting module for tokencost
//!
//! This module provides formatters for displaying pricing results:
//! - Table format for human-readable terminal output
//! - JSON format for machine-readable output and integration with other tools
//!
//! # Examples
//!
//! ```
//! use tokencost::output::get_formatter;
//! use tokencost::{Usage, dispatcher, parse_call_date};
//!
//! let at = parse_call_date("2024-06-01").unwrap();
//! let quote = dispatcher::quote("gpt-4o", at, Usage::new(1_000_000, 0)).unwrap();
//!
//! let table = get_formatter(false).format_quote(&quote).unwrap();
//! assert!(table.contains("gpt-4o-2024-05-13"));
//!
//! let json = get_formatter(true).format_quote(&quote).unwrap();
//! assert!(json.contains("\"cost\": 5.0"));
//! ```

use crate::dispatcher::{Quote, Resolution};
use prettytable::{Table, format, row};
use rust_decimal::Decimal;
use serde_json::json;
use tokencost_core::error::Result;
use tokencost_core::types::{ModelSpec, Provider};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a priced call
    fn format_quote(&self, quote: &Quote) -> Result<String>;

    /// Format a resolved price spec
    fn format_spec(&self, resolution: &Resolution) -> Result<String>;

    /// Format a list of recognized model names
    fn format_models(&self, models: &[(Provider, &'static str)]) -> Result<String>;
}

/// Table formatter for human-readable output
pub struct TableFormatter;

impl TableFormatter {
    /// Format a number with thousands separators
    fn format_number(n: u64) -> String {
        let s = n.to_string();
        let mut result = String::new();

        for (count, ch) in s.chars().rev().enumerate() {
            if count > 0 && count % 3 == 0 {
                result.push(',');
            }
            result.push(ch);
        }

        result.chars().rev().collect()
    }

    fn format_count(n: Option<u64>) -> String {
        n.map(Self::format_number).unwrap_or_else(|| "-".to_string())
    }

    /// Exact USD amount with a dollar sign
    fn format_currency(amount: Decimal) -> String {
        format!("${}", amount.normalize())
    }

    fn format_price(price: Option<Decimal>) -> String {
        price
            .map(|p| format!("{} /M", Self::format_currency(p)))
            .unwrap_or_else(|| "-".to_string())
    }

    fn spec_table(resolution: &Resolution) -> Table {
        let spec: &ModelSpec = &resolution.spec;
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![b -> "Field", b -> "Value"]);
        table.add_row(row!["Provider", resolution.provider]);
        table.add_row(row!["Model", resolution.model]);
        table.add_row(row!["Priced as", resolution.canonical_model]);
        table.add_row(row!["Input", r -> Self::format_price(Some(spec.price_per_input_mtok))]);
        table.add_row(row!["Output", r -> Self::format_price(Some(spec.price_per_output_mtok))]);
        table.add_row(row!["Cache read", r -> Self::format_price(spec.price_per_cache_read_mtok)]);
        table.add_row(row!["Cache write", r -> Self::format_price(spec.price_per_cache_write_mtok)]);
        table
    }
}

impl OutputFormatter for TableFormatter {
    fn format_quote(&self, quote: &Quote) -> Result<String> {
        let spec = &quote.resolution.spec;
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![
            b -> "Component",
            b -> "Tokens",
            b -> "Price",
            b -> "Cost"
        ]);

        let rows = [
            ("Input", quote.usage.input_tokens, Some(spec.price_per_input_mtok), quote.breakdown.input),
            ("Output", quote.usage.output_tokens, Some(spec.price_per_output_mtok), quote.breakdown.output),
            ("Cache read", quote.usage.cache_read_tokens, spec.price_per_cache_read_mtok, quote.breakdown.cache_read),
            ("Cache write", quote.usage.cache_write_tokens, spec.price_per_cache_write_mtok, quote.breakdown.cache_write),
        ];
        for (label, tokens, price, cost) in rows {
            table.add_row(row![
                label,
                r -> Self::format_count(tokens),
                r -> Self::format_price(price),
                r -> Self::format_currency(cost)
            ]);
        }
        table.add_row(row![
            b -> "TOTAL",
            b -> Self::format_number(quote.usage.total()),
            "",
            b -> Self::format_currency(quote.breakdown.total())
        ]);

        Ok(format!(
            "{} ({}) priced as {} at {}\n{}",
            quote.resolution.model,
            quote.resolution.provider,
            quote.resolution.canonical_model,
            quote.at.to_rfc3339(),
            table
        ))
    }

    fn format_spec(&self, resolution: &Resolution) -> Result<String> {
        Ok(Self::spec_table(resolution).to_string())
    }

    fn format_models(&self, models: &[(Provider, &'static str)]) -> Result<String> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![b -> "Provider", b -> "Model"]);
        for (provider, name) in models {
            table.add_row(row![provider, name]);
        }
        Ok(table.to_string())
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_quote(&self, quote: &Quote) -> Result<String> {
        Ok(serde_json::to_string_pretty(quote)?)
    }

    fn format_spec(&self, resolution: &Resolution) -> Result<String> {
        Ok(serde_json::to_string_pretty(resolution)?)
    }

    fn format_models(&self, models: &[(Provider, &'static str)]) -> Result<String> {
        let output: Vec<_> = models
            .iter()
            .map(|(provider, name)| json!({ "provider": provider, "model": name }))
            .collect();
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

/// Get the formatter for the requested output mode
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}
