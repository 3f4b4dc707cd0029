//! Model-name dispatch across provider catalogs
//!
//! The three provider enumerations are disjoint, so a bare model name
//! identifies its provider. Catalogs are probed in [`Provider::ALL`] order
//! (OpenAI, Google, Anthropic) and the first one recognizing the name prices
//! the call.
//!
//! # Examples
//!
//! ```
//! use tokencost::dispatcher::{calc_model_price, detect_provider};
//! use tokencost::{OpenAiUsage, Provider, parse_call_date};
//!
//! let at = parse_call_date("2024-06-01").unwrap();
//! let usage = OpenAiUsage { prompt_tokens: 1_000_000, completion_tokens: 0 };
//!
//! assert_eq!(detect_provider("gpt-4o").unwrap(), Provider::OpenAi);
//! assert_eq!(calc_model_price("gpt-4o", at, usage).unwrap(), 5.0);
//! ```

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use tokencost_core::error::{Result, TokencostError};
use tokencost_core::provider::{CatalogModel, ProviderCatalog};
use tokencost_core::types::{ModelName, ModelSpec, Provider, Usage};
use tokencost_pricing::{CostBreakdown, CostCalculator};
use tokencost_provider_anthropic::{AnthropicCatalog, AnthropicModel, AnthropicUsage};
use tokencost_provider_google::{GoogleCatalog, GoogleModel, GoogleUsage};
use tokencost_provider_openai::{OpenAiCatalog, OpenAiModel, OpenAiUsage};
use tracing::debug;

/// Every recognized model name, OpenAI first, then Google, then Anthropic
pub static MODELS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    Provider::ALL
        .into_iter()
        .flat_map(models_of)
        .collect()
});

/// Model names recognized by one provider
pub fn models_of(provider: Provider) -> Vec<&'static str> {
    match provider {
        Provider::OpenAi => names::<OpenAiCatalog>(),
        Provider::Google => names::<GoogleCatalog>(),
        Provider::Anthropic => names::<AnthropicCatalog>(),
    }
}

fn names<C: ProviderCatalog>() -> Vec<&'static str> {
    C::Model::ALL.iter().map(|model| model.as_str()).collect()
}

/// Whether `provider`'s catalog recognizes `name`
pub fn recognizes(provider: Provider, name: &str) -> bool {
    match provider {
        Provider::OpenAi => OpenAiCatalog::recognizes(name),
        Provider::Google => GoogleCatalog::recognizes(name),
        Provider::Anthropic => AnthropicCatalog::recognizes(name),
    }
}

/// Provider owning `name`
///
/// # Errors
///
/// Returns `UnknownModel` if no catalog recognizes the name.
pub fn detect_provider(name: &str) -> Result<Provider> {
    Provider::ALL
        .into_iter()
        .find(|provider| recognizes(*provider, name))
        .ok_or_else(|| TokencostError::UnknownModel(ModelName::new(name)))
}

/// A model name resolved against its catalog on a call date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub provider: Provider,
    /// Name as requested
    pub model: String,
    /// Dated snapshot used for pricing
    pub canonical_model: &'static str,
    pub spec: ModelSpec,
}

fn resolve_with<C: ProviderCatalog>(
    name: &str,
    at: DateTime<Utc>,
    usage: &Usage,
) -> Result<Resolution> {
    let model = C::parse_model(name)?;
    let canonical = C::resolve_alias(model, at);
    let spec = C::lookup_spec(canonical, usage)?;

    let provider = C::PROVIDER;
    debug!(
        provider = %provider,
        "Resolved {} to {} at {}",
        name,
        canonical,
        at
    );

    Ok(Resolution {
        provider,
        model: name.to_string(),
        canonical_model: canonical.as_str(),
        spec,
    })
}

/// Resolve any recognized model name on `at`
///
/// `usage` is needed because some catalogs price by prompt size.
pub fn resolve(name: &str, at: DateTime<Utc>, usage: &Usage) -> Result<Resolution> {
    match detect_provider(name)? {
        Provider::OpenAi => resolve_with::<OpenAiCatalog>(name, at, usage),
        Provider::Google => resolve_with::<GoogleCatalog>(name, at, usage),
        Provider::Anthropic => resolve_with::<AnthropicCatalog>(name, at, usage),
    }
}

/// Price spec of any recognized model name on `at`
///
/// # Errors
///
/// Returns `UnknownModel` if the name is not in any catalog.
pub fn get_model_spec(name: &str, at: DateTime<Utc>, usage: &Usage) -> Result<ModelSpec> {
    resolve(name, at, usage).map(|resolution| resolution.spec)
}

/// Cost of a call to any recognized model
///
/// Accepts a normalized [`Usage`] or any provider's raw usage record.
pub fn calc_model_price(name: &str, at: DateTime<Utc>, usage: impl Into<Usage>) -> Result<f64> {
    let usage = usage.into();
    let spec = get_model_spec(name, at, &usage)?;
    Ok(CostCalculator::calculate(&usage, &spec))
}

/// Full pricing of one call, for reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    #[serde(flatten)]
    pub resolution: Resolution,
    pub at: DateTime<Utc>,
    pub usage: Usage,
    pub breakdown: CostBreakdown,
    pub cost: f64,
}

/// Resolve, price and break down a call to any recognized model
pub fn quote(name: &str, at: DateTime<Utc>, usage: Usage) -> Result<Quote> {
    let resolution = resolve(name, at, &usage)?;
    let breakdown = CostCalculator::breakdown(&usage, &resolution.spec);
    let cost = CostCalculator::calculate(&usage, &resolution.spec);

    Ok(Quote {
        resolution,
        at,
        usage,
        breakdown,
        cost,
    })
}

/// Cost of a call priced by a known catalog
pub fn calc_catalog_price<C: ProviderCatalog>(
    model: C::Model,
    at: DateTime<Utc>,
    raw_usage: &C::RawUsage,
) -> Result<f64> {
    let usage = C::convert_usage(raw_usage);
    let spec = C::model_spec(model, at, &usage)?;
    Ok(CostCalculator::calculate(&usage, &spec))
}

/// Cost of an OpenAI call
pub fn calc_openai_price(model: OpenAiModel, at: DateTime<Utc>, usage: &OpenAiUsage) -> Result<f64> {
    calc_catalog_price::<OpenAiCatalog>(model, at, usage)
}

/// Cost of a Google call
pub fn calc_google_price(model: GoogleModel, at: DateTime<Utc>, usage: &GoogleUsage) -> Result<f64> {
    calc_catalog_price::<GoogleCatalog>(model, at, usage)
}

/// Cost of an Anthropic call
pub fn calc_anthropic_price(
    model: AnthropicModel,
    at: DateTime<Utc>,
    usage: &AnthropicUsage,
) -> Result<f64> {
    calc_catalog_price::<AnthropicCatalog>(model, at, usage)
}

/// Cost of an OpenAI call by model name
///
/// # Errors
///
/// Returns `UnknownModel` if the name is not an OpenAI model.
pub fn calc_openai_price_by_name(name: &str, at: DateTime<Utc>, usage: &OpenAiUsage) -> Result<f64> {
    calc_openai_price(OpenAiCatalog::parse_model(name)?, at, usage)
}

/// Cost of a Google call by model name
///
/// # Errors
///
/// Returns `UnknownModel` if the name is not a Google model.
pub fn calc_google_price_by_name(name: &str, at: DateTime<Utc>, usage: &GoogleUsage) -> Result<f64> {
    calc_google_price(GoogleCatalog::parse_model(name)?, at, usage)
}

/// Cost of an Anthropic call by model name
///
/// # Errors
///
/// Returns `UnknownModel` if the name is not an Anthropic model.
pub fn calc_anthropic_price_by_name(
    name: &str,
    at: DateTime<Utc>,
    usage: &AnthropicUsage,
) -> Result<f64> {
    calc_anthropic_price(AnthropicCatalog::parse_model(name)?, at, usage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::prelude::ToPrimitive;
    use std::collections::HashSet;

    fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_models_is_union_in_dispatch_order() {
        let expected: Vec<&str> = models_of(Provider::OpenAi)
            .into_iter()
            .chain(models_of(Provider::Google))
            .chain(models_of(Provider::Anthropic))
            .collect();
        assert_eq!(*MODELS, expected);
        assert_eq!(MODELS[0], "gpt-3.5-turbo");
    }

    #[test]
    fn test_provider_enumerations_are_disjoint() {
        let mut seen = HashSet::new();
        for name in MODELS.iter() {
            assert!(seen.insert(*name), "{name} listed twice");
            let owners = Provider::ALL
                .into_iter()
                .filter(|p| recognizes(*p, name))
                .count();
            assert_eq!(owners, 1, "{name} owned by {owners} providers");
        }
    }

    #[test]
    fn test_detect_provider() {
        assert_eq!(detect_provider("gpt-4o-mini").unwrap(), Provider::OpenAi);
        assert_eq!(detect_provider("gemini-1.5-flash").unwrap(), Provider::Google);
        assert_eq!(detect_provider("claude-3-haiku@20240307").unwrap(), Provider::Anthropic);
        assert!(matches!(
            detect_provider("unknown-model-xyz"),
            Err(TokencostError::UnknownModel(_))
        ));
    }

    #[test]
    fn test_resolution_reports_canonical_model() {
        let resolution = resolve("gpt-3.5-turbo", day(2024, 3, 1), &Usage::default()).unwrap();
        assert_eq!(resolution.provider, Provider::OpenAi);
        assert_eq!(resolution.model, "gpt-3.5-turbo");
        assert_eq!(resolution.canonical_model, "gpt-3.5-turbo-0125");
    }

    #[test]
    fn test_quote_breakdown_sums_to_cost() {
        let usage = Usage::new(1_000_000, 0).with_cache(1_000_000, 0);
        let quote = quote("claude-3-5-sonnet", day(2024, 8, 1), usage).unwrap();
        assert_eq!(quote.resolution.canonical_model, "claude-3-5-sonnet-20240620");
        assert!((quote.cost - 3.3).abs() < 1e-9);
        assert!((quote.cost - quote.breakdown.total().to_f64().unwrap()).abs() < 1e-9);
    }

    #[test]
    fn test_provider_entry_points_reject_foreign_names() {
        let at = day(2024, 6, 1);
        assert!(calc_openai_price_by_name("claude-3-opus", at, &OpenAiUsage::default()).is_err());
        assert!(calc_google_price_by_name("gpt-4", at, &GoogleUsage::default()).is_err());
        assert!(calc_anthropic_price_by_name("gemini-1.0-pro", at, &AnthropicUsage::default()).is_err());
    }

    #[test]
    fn test_quote_serializes_flat() {
        let quote = quote("gpt-4o", day(2024, 6, 1), Usage::new(10, 10)).unwrap();
        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["provider"], "openai");
        assert_eq!(value["canonical_model"], "gpt-4o-2024-05-13");
        assert_eq!(value["spec"]["price_per_input_mtok"], "5");
    }
}
