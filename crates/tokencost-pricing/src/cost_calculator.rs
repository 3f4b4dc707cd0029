//! Cost calculator module for computing usage costs
//!
//! Every component is priced per million tokens:
//!
//! ```text
//! cost = Σ usage[c] * price[c] / 1_000_000   for c in input, output, cache read, cache write
//! ```
//!
//! A missing usage counter or a missing price contributes zero. All
//! arithmetic happens in [`Decimal`]; conversion to `f64` is done once,
//! on the final total.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use tokencost_core::types::{ModelSpec, Usage};
//! use tokencost_pricing::CostCalculator;
//!
//! let spec = ModelSpec::new(Decimal::new(5, 0), Decimal::new(15, 0));
//! let usage = Usage::new(1_000_000, 0);
//!
//! assert_eq!(CostCalculator::calculate_decimal(&usage, &spec), Decimal::new(5, 0));
//! assert_eq!(CostCalculator::calculate(&usage, &spec), 5.0);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tokencost_core::types::{ModelSpec, Usage};
use tracing::debug;

const TOKENS_PER_PRICE_UNIT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Per-component cost of one call, in USD
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub input: Decimal,
    pub output: Decimal,
    pub cache_read: Decimal,
    pub cache_write: Decimal,
}

impl CostBreakdown {
    /// Exact sum of all components
    pub fn total(&self) -> Decimal {
        self.input + self.output + self.cache_read + self.cache_write
    }
}

/// Calculates costs from token usage and a price spec
pub struct CostCalculator;

impl CostCalculator {
    /// Cost of each usage component
    pub fn breakdown(usage: &Usage, spec: &ModelSpec) -> CostBreakdown {
        CostBreakdown {
            input: component_cost(usage.input_tokens, Some(spec.price_per_input_mtok)),
            output: component_cost(usage.output_tokens, Some(spec.price_per_output_mtok)),
            cache_read: component_cost(usage.cache_read_tokens, spec.price_per_cache_read_mtok),
            cache_write: component_cost(usage.cache_write_tokens, spec.price_per_cache_write_mtok),
        }
    }

    /// Exact total cost
    pub fn calculate_decimal(usage: &Usage, spec: &ModelSpec) -> Decimal {
        let cost = Self::breakdown(usage, spec).total().normalize();

        debug!(
            "Calculated cost: ${} for {} total tokens",
            cost,
            usage.total()
        );

        cost
    }

    /// Total cost as a float
    ///
    /// Only the final sum is converted, so rounding happens once.
    pub fn calculate(usage: &Usage, spec: &ModelSpec) -> f64 {
        // Decimal -> f64 always succeeds; the fallback is unreachable.
        Self::calculate_decimal(usage, spec)
            .to_f64()
            .unwrap_or_default()
    }
}

/// Total cost of `usage` under `spec`, in USD
pub fn calc_price(usage: &Usage, spec: &ModelSpec) -> f64 {
    CostCalculator::calculate(usage, spec)
}

fn component_cost(tokens: Option<u64>, price_per_mtok: Option<Decimal>) -> Decimal {
    match (tokens, price_per_mtok) {
        (Some(tokens), Some(price)) if tokens > 0 => {
            price * Decimal::from(tokens) / TOKENS_PER_PRICE_UNIT
        }
        _ => Decimal::ZERO,
    }
}
