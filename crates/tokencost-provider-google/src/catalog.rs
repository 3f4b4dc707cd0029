//! Google Gemini model catalog
//!
//! `gemini-1.5-pro` and `gemini-1.5-flash` moved from their `-001` to their
//! `-002` snapshots on 2024-10-01. Gemini 1.5 prompts above
//! [`LONG_CONTEXT_THRESHOLD`] input tokens are billed at a higher tier, so
//! the price depends on the usage being priced.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tokencost_core::cutover::{AliasChain, Cutover};
use tokencost_core::define_models;
use tokencost_core::error::Result;
use tokencost_core::provider::{ProviderCatalog, unknown_model};
use tokencost_core::types::{ModelSpec, Provider, Usage};
use tracing::debug;

/// Largest prompt, in input tokens, billed at the base tier
pub const LONG_CONTEXT_THRESHOLD: u64 = 128_000;

define_models! {
    /// Model names recognized by the Google catalog
    pub enum GoogleModel {
        Gemini15Pro => "gemini-1.5-pro",
        Gemini15Flash => "gemini-1.5-flash",
        Gemini10Pro => "gemini-1.0-pro",
        Gemini15Pro001 => "gemini-1.5-pro-001",
        Gemini15Flash001 => "gemini-1.5-flash-001",
        Gemini15Pro002 => "gemini-1.5-pro-002",
        Gemini15Flash002 => "gemini-1.5-flash-002",
    }
}

/// `usage_metadata` of a generate-content response
///
/// Accepts both the snake_case field names of the Vertex AI SDKs and the
/// camelCase names of the REST API.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleUsage {
    #[serde(alias = "promptTokenCount")]
    pub prompt_token_count: u64,
    #[serde(default, alias = "candidatesTokenCount")]
    pub candidates_token_count: u64,
}

impl From<&GoogleUsage> for Usage {
    fn from(usage: &GoogleUsage) -> Self {
        Usage {
            input_tokens: Some(usage.prompt_token_count),
            output_tokens: Some(usage.candidates_token_count),
            cache_read_tokens: None,
            cache_write_tokens: None,
        }
    }
}

impl From<GoogleUsage> for Usage {
    fn from(usage: GoogleUsage) -> Self {
        Usage::from(&usage)
    }
}

const GEMINI_15_CUTOVER: Cutover = Cutover::new(2024, 10, 1);

const GEMINI_15_PRO_ALIAS: AliasChain<GoogleModel> = AliasChain::new(
    &[(GEMINI_15_CUTOVER, GoogleModel::Gemini15Pro002)],
    GoogleModel::Gemini15Pro001,
);

const GEMINI_15_FLASH_ALIAS: AliasChain<GoogleModel> = AliasChain::new(
    &[(GEMINI_15_CUTOVER, GoogleModel::Gemini15Flash002)],
    GoogleModel::Gemini15Flash001,
);

/// Base and long-context prices of one model
struct Tiered {
    base: ModelSpec,
    long_context: ModelSpec,
}

impl Tiered {
    fn select(&self, usage: &Usage) -> ModelSpec {
        match usage.input_tokens {
            Some(tokens) if tokens > LONG_CONTEXT_THRESHOLD => self.long_context,
            _ => self.base,
        }
    }
}

const GEMINI_15_PRO_002: Tiered = Tiered {
    base: ModelSpec::new(dec!(1.25), dec!(2.5)),
    long_context: ModelSpec::new(dec!(5), dec!(10)),
};

const GEMINI_15_PRO_001: Tiered = Tiered {
    base: ModelSpec::new(dec!(3.5), dec!(10.5)),
    long_context: ModelSpec::new(dec!(7), dec!(21)),
};

// Flash kept its price across the 002 release.
const GEMINI_15_FLASH: Tiered = Tiered {
    base: ModelSpec::new(dec!(0.01875), dec!(0.075)),
    long_context: ModelSpec::new(dec!(0.0375), dec!(0.15)),
};

const GEMINI_10_PRO: ModelSpec = ModelSpec::new(dec!(0.125), dec!(0.375));

/// Google pricing catalog
pub struct GoogleCatalog;

impl ProviderCatalog for GoogleCatalog {
    const PROVIDER: Provider = Provider::Google;
    type Model = GoogleModel;
    type RawUsage = GoogleUsage;

    fn convert_usage(raw: &GoogleUsage) -> Usage {
        Usage::from(raw)
    }

    fn resolve_alias(model: GoogleModel, at: DateTime<Utc>) -> GoogleModel {
        match model {
            GoogleModel::Gemini15Pro => GEMINI_15_PRO_ALIAS.resolve(at),
            GoogleModel::Gemini15Flash => GEMINI_15_FLASH_ALIAS.resolve(at),
            dated => dated,
        }
    }

    fn lookup_spec(model: GoogleModel, usage: &Usage) -> Result<ModelSpec> {
        let spec = match model {
            GoogleModel::Gemini15Pro002 => GEMINI_15_PRO_002.select(usage),
            GoogleModel::Gemini15Pro001 => GEMINI_15_PRO_001.select(usage),
            GoogleModel::Gemini15Flash002 | GoogleModel::Gemini15Flash001 => {
                GEMINI_15_FLASH.select(usage)
            }
            GoogleModel::Gemini10Pro => GEMINI_10_PRO,
            GoogleModel::Gemini15Pro | GoogleModel::Gemini15Flash => {
                return Err(unknown_model(model));
            }
        };

        debug!(
            "Google spec for {} at {:?} input tokens: {:?}",
            model, usage.input_tokens, spec
        );
        Ok(spec)
    }

    fn cutovers() -> Vec<Cutover> {
        vec![GEMINI_15_CUTOVER]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tokencost_core::provider::CatalogModel;

    fn cutover_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap()
    }

    fn input(tokens: u64) -> Usage {
        Usage::new(tokens, 0)
    }

    #[test]
    fn test_aliases_switch_after_october_2024() {
        let at = cutover_instant();
        assert_eq!(
            GoogleCatalog::resolve_alias(GoogleModel::Gemini15Pro, at),
            GoogleModel::Gemini15Pro001
        );
        assert_eq!(
            GoogleCatalog::resolve_alias(GoogleModel::Gemini15Pro, at + Duration::seconds(1)),
            GoogleModel::Gemini15Pro002
        );
        assert_eq!(
            GoogleCatalog::resolve_alias(GoogleModel::Gemini15Flash, at - Duration::days(30)),
            GoogleModel::Gemini15Flash001
        );
        assert_eq!(
            GoogleCatalog::resolve_alias(GoogleModel::Gemini15Flash, at + Duration::days(30)),
            GoogleModel::Gemini15Flash002
        );
    }

    #[test]
    fn test_long_context_tier() {
        let at = Utc.with_ymd_and_hms(2024, 11, 1, 0, 0, 0).unwrap();

        let spec = GoogleCatalog::model_spec(GoogleModel::Gemini15Pro, at, &input(200_000)).unwrap();
        assert_eq!(spec.price_per_input_mtok, dec!(5));
        assert_eq!(spec.price_per_output_mtok, dec!(10));

        let spec = GoogleCatalog::model_spec(GoogleModel::Gemini15Pro, at, &input(1_000)).unwrap();
        assert_eq!(spec.price_per_input_mtok, dec!(1.25));
    }

    #[test]
    fn test_tier_boundary_is_inclusive() {
        let model = GoogleModel::Gemini15Pro002;
        let at_threshold = GoogleCatalog::lookup_spec(model, &input(LONG_CONTEXT_THRESHOLD)).unwrap();
        assert_eq!(at_threshold.price_per_input_mtok, dec!(1.25));

        let above = GoogleCatalog::lookup_spec(model, &input(LONG_CONTEXT_THRESHOLD + 1)).unwrap();
        assert_eq!(above.price_per_input_mtok, dec!(5));
    }

    #[test]
    fn test_absent_input_uses_base_tier() {
        let spec = GoogleCatalog::lookup_spec(GoogleModel::Gemini15Pro001, &Usage::default()).unwrap();
        assert_eq!(spec, ModelSpec::new(dec!(3.5), dec!(10.5)));
    }

    #[test]
    fn test_gemini_10_pro_is_flat() {
        let small = GoogleCatalog::lookup_spec(GoogleModel::Gemini10Pro, &input(10)).unwrap();
        let large = GoogleCatalog::lookup_spec(GoogleModel::Gemini10Pro, &input(1_000_000)).unwrap();
        assert_eq!(small, large);
        assert_eq!(small.price_per_input_mtok, dec!(0.125));
    }

    #[test]
    fn test_every_model_resolves_to_a_priced_snapshot() {
        let instant = cutover_instant();
        let dates = [instant - Duration::seconds(1), instant, instant + Duration::seconds(1)];
        for &model in GoogleModel::ALL {
            for at in dates {
                for usage in [Usage::default(), input(1), input(10_000_000)] {
                    let spec = GoogleCatalog::model_spec(model, at, &usage)
                        .unwrap_or_else(|e| panic!("{model} at {at}: {e}"));
                    assert!(spec.is_non_negative());
                    assert!(!spec.supports_caching());
                }
            }
        }
    }

    #[test]
    fn test_unresolved_alias_lookup_fails() {
        assert!(GoogleCatalog::lookup_spec(GoogleModel::Gemini15Flash, &input(1)).is_err());
    }

    #[test]
    fn test_unlisted_model_is_not_recognized() {
        assert!(!GoogleCatalog::recognizes("gemini-1.0-flash"));
        assert!(GoogleCatalog::recognizes("gemini-1.0-pro"));
    }

    #[test]
    fn test_usage_from_sdk_and_rest_json() {
        let sdk: GoogleUsage =
            serde_json::from_str(r#"{"prompt_token_count": 300, "candidates_token_count": 20}"#)
                .unwrap();
        let rest: GoogleUsage = serde_json::from_str(
            r#"{"promptTokenCount": 300, "candidatesTokenCount": 20, "totalTokenCount": 320}"#,
        )
        .unwrap();
        assert_eq!(sdk, rest);

        let usage = GoogleCatalog::convert_usage(&sdk);
        assert_eq!(usage, Usage::new(300, 20));
    }
}
