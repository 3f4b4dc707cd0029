//! Common test utilities and helpers for tokencost tests

use chrono::{DateTime, Duration, TimeZone, Utc};
use tokencost::{
    AnthropicCatalog, CatalogModel, GoogleCatalog, ModelSpec, OpenAiCatalog, ProviderCatalog,
    Usage,
};

/// Midnight UTC of a calendar day
pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Dates exercising every alias branch of a catalog: far past, far future,
/// and one second either side of each cutover plus the cutover itself
pub fn probe_dates<C: ProviderCatalog>() -> Vec<DateTime<Utc>> {
    let mut dates = vec![day(2020, 1, 1), day(2035, 1, 1)];
    for cutover in C::cutovers() {
        let instant = cutover.instant().unwrap();
        dates.push(instant - Duration::seconds(1));
        dates.push(instant);
        dates.push(instant + Duration::seconds(1));
    }
    dates
}

/// Usages on both sides of the Gemini long-context boundary
pub fn probe_usages() -> Vec<Usage> {
    vec![
        Usage::default(),
        Usage::new(1, 1),
        Usage::new(128_000, 0),
        Usage::new(128_001, 0),
        Usage::new(5_000_000, 1_000).with_cache(10, 10),
    ]
}

/// Every spec reachable from a catalog's enumeration
pub fn all_specs<C: ProviderCatalog>() -> Vec<(String, ModelSpec)> {
    let mut specs = Vec::new();
    for &model in C::Model::ALL {
        for at in probe_dates::<C>() {
            for usage in probe_usages() {
                let spec = C::model_spec(model, at, &usage)
                    .unwrap_or_else(|e| panic!("{} at {at}: {e}", model.as_str()));
                specs.push((model.as_str().to_string(), spec));
            }
        }
    }
    specs
}

/// Every spec reachable from any catalog
#[allow(dead_code)]
pub fn every_spec() -> Vec<(String, ModelSpec)> {
    let mut specs = all_specs::<OpenAiCatalog>();
    specs.extend(all_specs::<GoogleCatalog>());
    specs.extend(all_specs::<AnthropicCatalog>());
    specs
}
