//! Property-based tests for tokencost using proptest

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tokencost::{
    AnthropicCatalog, CostCalculator, GoogleCatalog, MODELS, ModelSpec, OpenAiCatalog, Provider,
    ProviderCatalog, Usage, detect_provider, dispatcher, get_model_spec,
};

// Strategies for generating test data

prop_compose! {
    fn arb_usage()(
        input in prop::option::of(0u64..10_000_000),
        output in prop::option::of(0u64..5_000_000),
        cache_read in prop::option::of(0u64..1_000_000),
        cache_write in prop::option::of(0u64..500_000),
    ) -> Usage {
        Usage {
            input_tokens: input,
            output_tokens: output,
            cache_read_tokens: cache_read,
            cache_write_tokens: cache_write,
        }
    }
}

prop_compose! {
    // Prices in USD per million tokens, up to six decimal places
    fn arb_price()(mantissa in 0i64..100_000_000, scale in 0u32..=6) -> Decimal {
        Decimal::new(mantissa, scale)
    }
}

prop_compose! {
    fn arb_model_spec()(
        input in arb_price(),
        output in arb_price(),
        cache in prop::option::of((arb_price(), arb_price())),
    ) -> ModelSpec {
        let spec = ModelSpec::new(input, output);
        match cache {
            Some((read, write)) => spec.with_cache(read, write),
            None => spec,
        }
    }
}

prop_compose! {
    fn arb_timestamp()(
        secs in 1577836800i64..1893456000i64, // 2020-01-01 to 2030-01-01
    ) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }
}

fn arb_model_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(MODELS.clone())
}

fn only(usage: &Usage, pick: fn(&Usage) -> Option<u64>, set: fn(&mut Usage, u64)) -> Usage {
    let mut single = Usage::default();
    if let Some(tokens) = pick(usage) {
        set(&mut single, tokens);
    }
    single
}

fn cutover_instants(provider: Provider) -> Vec<DateTime<Utc>> {
    let cutovers = match provider {
        Provider::OpenAi => OpenAiCatalog::cutovers(),
        Provider::Google => GoogleCatalog::cutovers(),
        Provider::Anthropic => AnthropicCatalog::cutovers(),
    };
    cutovers.iter().filter_map(|c| c.instant()).collect()
}

proptest! {
    #[test]
    fn test_cost_never_negative(usage in arb_usage(), spec in arb_model_spec()) {
        prop_assert!(CostCalculator::calculate_decimal(&usage, &spec) >= Decimal::ZERO);
        prop_assert!(CostCalculator::calculate(&usage, &spec) >= 0.0);
    }

    #[test]
    fn test_cost_is_sum_of_components(usage in arb_usage(), spec in arb_model_spec()) {
        let parts = [
            only(&usage, |u| u.input_tokens, |u, n| u.input_tokens = Some(n)),
            only(&usage, |u| u.output_tokens, |u, n| u.output_tokens = Some(n)),
            only(&usage, |u| u.cache_read_tokens, |u, n| u.cache_read_tokens = Some(n)),
            only(&usage, |u| u.cache_write_tokens, |u, n| u.cache_write_tokens = Some(n)),
        ];
        let sum: Decimal = parts
            .iter()
            .map(|part| CostCalculator::calculate_decimal(part, &spec))
            .sum();
        prop_assert_eq!(sum, CostCalculator::calculate_decimal(&usage, &spec));
        prop_assert_eq!(
            CostCalculator::breakdown(&usage, &spec).total(),
            CostCalculator::calculate_decimal(&usage, &spec)
        );
    }

    #[test]
    fn test_cost_linear_in_tokens(
        usage in arb_usage(),
        spec in arb_model_spec(),
        factor in 0u64..100,
    ) {
        let scale = |n: Option<u64>| n.map(|n| n * factor);
        let scaled = Usage {
            input_tokens: scale(usage.input_tokens),
            output_tokens: scale(usage.output_tokens),
            cache_read_tokens: scale(usage.cache_read_tokens),
            cache_write_tokens: scale(usage.cache_write_tokens),
        };
        prop_assert_eq!(
            CostCalculator::calculate_decimal(&scaled, &spec),
            CostCalculator::calculate_decimal(&usage, &spec) * Decimal::from(factor)
        );
    }

    #[test]
    fn test_absent_counts_cost_nothing(spec in arb_model_spec()) {
        prop_assert_eq!(CostCalculator::calculate(&Usage::default(), &spec), 0.0);
    }

    #[test]
    fn test_missing_cache_price_ignores_cache_tokens(
        usage in arb_usage(),
        input in arb_price(),
        output in arb_price(),
    ) {
        let spec = ModelSpec::new(input, output);
        let without_cache = Usage {
            cache_read_tokens: None,
            cache_write_tokens: None,
            ..usage
        };
        prop_assert_eq!(
            CostCalculator::calculate_decimal(&usage, &spec),
            CostCalculator::calculate_decimal(&without_cache, &spec)
        );
    }

    #[test]
    fn test_every_model_priced_on_any_date(
        name in arb_model_name(),
        at in arb_timestamp(),
        usage in arb_usage(),
    ) {
        let spec = get_model_spec(name, at, &usage);
        prop_assert!(spec.is_ok(), "{} at {}: {:?}", name, at, spec);
        prop_assert!(spec.unwrap().is_non_negative());
    }

    #[test]
    fn test_resolution_constant_between_cutovers(
        name in arb_model_name(),
        t1 in arb_timestamp(),
        t2 in arb_timestamp(),
    ) {
        let (early, late) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let provider = detect_provider(name).unwrap();
        let crosses_cutover = cutover_instants(provider)
            .into_iter()
            .any(|instant| early <= instant && instant < late);

        let first = dispatcher::resolve(name, early, &Usage::default()).unwrap();
        let second = dispatcher::resolve(name, late, &Usage::default()).unwrap();
        if !crosses_cutover {
            prop_assert_eq!(first.canonical_model, second.canonical_model);
        }
        prop_assert_eq!(first.provider, second.provider);
    }

    #[test]
    fn test_unknown_names_rejected(name in "[a-z0-9.-]{1,24}") {
        prop_assume!(!MODELS.contains(&name.as_str()));
        prop_assert!(detect_provider(&name).is_err());
        prop_assert!(get_model_spec(&name, Utc::now(), &Usage::default()).is_err());
    }
}
