//! Core domain types for tokencost
//!
//! This module contains the data model shared by every catalog: the
//! normalized [`Usage`] record, the per-model [`ModelSpec`] price record,
//! the [`Provider`] tag and the [`ModelName`] wrapper used in errors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strongly-typed model name wrapper
///
/// Carries the raw, user-supplied name so that error messages and log
/// events show exactly what the caller asked for.
///
/// # Examples
/// ```
/// use tokencost_core::types::ModelName;
///
/// let model = ModelName::new("gpt-4o");
/// assert_eq!(model.as_str(), "gpt-4o");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelName(String);

impl ModelName {
    /// Create a new ModelName from any string-like type
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Model vendor owning a catalog
///
/// The variant order is the order in which the dispatcher probes the
/// catalogs for a model name.
///
/// # Examples
/// ```
/// use tokencost_core::types::Provider;
/// use std::str::FromStr;
///
/// assert_eq!(Provider::from_str("google").unwrap(), Provider::Google);
/// assert_eq!(Provider::OpenAi.to_string(), "openai");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Google,
    Anthropic,
}

impl Provider {
    /// All providers, in dispatch order
    pub const ALL: [Provider; 3] = [Provider::OpenAi, Provider::Google, Provider::Anthropic];
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenAi => write!(f, "openai"),
            Self::Google => write!(f, "google"),
            Self::Anthropic => write!(f, "anthropic"),
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "google" | "gemini" => Ok(Self::Google),
            "anthropic" | "claude" => Ok(Self::Anthropic),
            _ => Err(format!("Invalid provider: {s}")),
        }
    }
}

/// Token usage of a single API call, normalized across providers
///
/// Every counter is optional: providers that do not report a category
/// leave it `None`, and an absent counter contributes nothing to the cost.
///
/// # Examples
/// ```
/// use tokencost_core::types::Usage;
///
/// let usage = Usage::new(1_000, 200).with_cache(50, 0);
/// assert_eq!(usage.total(), 1_250);
/// assert_eq!(usage.cache_read_tokens, Some(50));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Prompt tokens billed at the input rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    /// Generated tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    /// Tokens served from the prompt cache
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_read_tokens: Option<u64>,
    /// Tokens written to the prompt cache
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_write_tokens: Option<u64>,
}

impl Usage {
    /// Usage with input and output counts only
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens: Some(input_tokens),
            output_tokens: Some(output_tokens),
            cache_read_tokens: None,
            cache_write_tokens: None,
        }
    }

    /// Attach prompt-cache counts
    pub fn with_cache(mut self, cache_read_tokens: u64, cache_write_tokens: u64) -> Self {
        self.cache_read_tokens = Some(cache_read_tokens);
        self.cache_write_tokens = Some(cache_write_tokens);
        self
    }

    /// Sum of all present counters
    pub fn total(&self) -> u64 {
        [
            self.input_tokens,
            self.output_tokens,
            self.cache_read_tokens,
            self.cache_write_tokens,
        ]
        .into_iter()
        .flatten()
        .sum()
    }
}

/// Price record of one canonical model, in USD per million tokens
///
/// Prices are exact decimals. Cache prices are only present for models
/// that support prompt caching.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use tokencost_core::types::ModelSpec;
///
/// let spec = ModelSpec::new(Decimal::new(3, 0), Decimal::new(15, 0))
///     .with_cache(Decimal::new(3, 1), Decimal::new(375, 2));
/// assert_eq!(spec.price_per_cache_read_mtok, Some(Decimal::new(3, 1)));
/// assert!(spec.is_non_negative());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// USD per million input tokens
    pub price_per_input_mtok: Decimal,
    /// USD per million output tokens
    pub price_per_output_mtok: Decimal,
    /// USD per million cache-read tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_cache_read_mtok: Option<Decimal>,
    /// USD per million cache-write tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_cache_write_mtok: Option<Decimal>,
}

impl ModelSpec {
    /// Spec without prompt-cache pricing
    pub const fn new(price_per_input_mtok: Decimal, price_per_output_mtok: Decimal) -> Self {
        Self {
            price_per_input_mtok,
            price_per_output_mtok,
            price_per_cache_read_mtok: None,
            price_per_cache_write_mtok: None,
        }
    }

    /// Add prompt-cache pricing
    pub const fn with_cache(self, cache_read: Decimal, cache_write: Decimal) -> Self {
        Self {
            price_per_cache_read_mtok: Some(cache_read),
            price_per_cache_write_mtok: Some(cache_write),
            ..self
        }
    }

    /// Whether the model has any prompt-cache pricing
    pub fn supports_caching(&self) -> bool {
        self.price_per_cache_read_mtok.is_some() || self.price_per_cache_write_mtok.is_some()
    }

    /// Whether every defined price is >= 0
    pub fn is_non_negative(&self) -> bool {
        [
            Some(self.price_per_input_mtok),
            Some(self.price_per_output_mtok),
            self.price_per_cache_read_mtok,
            self.price_per_cache_write_mtok,
        ]
        .into_iter()
        .flatten()
        .all(|price| !price.is_sign_negative())
    }
}
