//! Anthropic model catalog
//!
//! Undated aliases always map to the same snapshot; Bedrock
//! (`anthropic.<model>-v1:0`) and Vertex AI (`<model>@<date>`) ids are
//! priced like the snapshot they name. Claude 2 and Claude Instant have no
//! prompt-cache prices, so cache tokens on those models cost nothing.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tokencost_core::define_models;
use tokencost_core::error::Result;
use tokencost_core::provider::{ProviderCatalog, unknown_model};
use tokencost_core::types::{ModelSpec, Provider, Usage};
use tracing::debug;

define_models! {
    /// Model names recognized by the Anthropic catalog
    pub enum AnthropicModel {
        Claude35Sonnet => "claude-3-5-sonnet",
        Claude3Sonnet => "claude-3-sonnet",
        Claude3Opus => "claude-3-opus",
        Claude3Haiku => "claude-3-haiku",
        Claude21 => "claude-2.1",
        Claude20 => "claude-2.0",
        ClaudeInstant12 => "claude-instant-1.2",
        Claude3Opus20240229 => "claude-3-opus-20240229",
        Claude35Sonnet20240620 => "claude-3-5-sonnet-20240620",
        Claude3Sonnet20240229 => "claude-3-sonnet-20240229",
        Claude3Haiku20240307 => "claude-3-haiku-20240307",
        BedrockClaude3Opus => "anthropic.claude-3-opus-20240229-v1:0",
        BedrockClaude35Sonnet => "anthropic.claude-3-5-sonnet-20240620-v1:0",
        BedrockClaude3Sonnet => "anthropic.claude-3-sonnet-20240229-v1:0",
        BedrockClaude3Haiku => "anthropic.claude-3-haiku-20240307-v1:0",
        VertexClaude3Opus => "claude-3-opus@20240229",
        VertexClaude35Sonnet => "claude-3-5-sonnet@20240620",
        VertexClaude3Sonnet => "claude-3-sonnet@20240229",
        VertexClaude3Haiku => "claude-3-haiku@20240307",
    }
}

/// `usage` object of a Messages API response
///
/// Responses predating prompt caching omit the cache fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnthropicUsage {
    pub input_tokens: u64,
    #[serde(default)]
    pub cache_creation_input_tokens: u64,
    #[serde(default)]
    pub cache_read_input_tokens: u64,
    pub output_tokens: u64,
}

impl From<&AnthropicUsage> for Usage {
    fn from(usage: &AnthropicUsage) -> Self {
        Usage {
            input_tokens: Some(usage.input_tokens),
            output_tokens: Some(usage.output_tokens),
            cache_read_tokens: Some(usage.cache_read_input_tokens),
            cache_write_tokens: Some(usage.cache_creation_input_tokens),
        }
    }
}

impl From<AnthropicUsage> for Usage {
    fn from(usage: AnthropicUsage) -> Self {
        Usage::from(&usage)
    }
}

const CLAUDE_3_OPUS: ModelSpec =
    ModelSpec::new(dec!(15), dec!(75)).with_cache(dec!(1.5), dec!(18.75));
const CLAUDE_3_SONNET: ModelSpec =
    ModelSpec::new(dec!(3), dec!(15)).with_cache(dec!(0.3), dec!(3.75));
const CLAUDE_3_HAIKU: ModelSpec =
    ModelSpec::new(dec!(0.25), dec!(1.25)).with_cache(dec!(0.03), dec!(0.3));
const CLAUDE_2: ModelSpec = ModelSpec::new(dec!(8), dec!(24));
const CLAUDE_INSTANT: ModelSpec = ModelSpec::new(dec!(0.8), dec!(2.4));

/// Anthropic pricing catalog
pub struct AnthropicCatalog;

impl ProviderCatalog for AnthropicCatalog {
    const PROVIDER: Provider = Provider::Anthropic;
    type Model = AnthropicModel;
    type RawUsage = AnthropicUsage;

    fn convert_usage(raw: &AnthropicUsage) -> Usage {
        Usage::from(raw)
    }

    fn resolve_alias(model: AnthropicModel, _at: DateTime<Utc>) -> AnthropicModel {
        use AnthropicModel::*;

        match model {
            Claude35Sonnet => Claude35Sonnet20240620,
            Claude3Sonnet => Claude3Sonnet20240229,
            Claude3Opus => Claude3Opus20240229,
            Claude3Haiku => Claude3Haiku20240307,
            dated => dated,
        }
    }

    fn lookup_spec(model: AnthropicModel, _usage: &Usage) -> Result<ModelSpec> {
        use AnthropicModel::*;

        let spec = match model {
            Claude3Opus20240229 | BedrockClaude3Opus | VertexClaude3Opus => CLAUDE_3_OPUS,
            Claude35Sonnet20240620 | BedrockClaude35Sonnet | VertexClaude35Sonnet => {
                CLAUDE_3_SONNET
            }
            Claude3Sonnet20240229 | BedrockClaude3Sonnet | VertexClaude3Sonnet => CLAUDE_3_SONNET,
            Claude3Haiku20240307 | BedrockClaude3Haiku | VertexClaude3Haiku => CLAUDE_3_HAIKU,
            Claude21 | Claude20 => CLAUDE_2,
            ClaudeInstant12 => CLAUDE_INSTANT,
            Claude35Sonnet | Claude3Sonnet | Claude3Opus | Claude3Haiku => {
                return Err(unknown_model(model));
            }
        };

        debug!("Anthropic spec for {}: {:?}", model, spec);
        Ok(spec)
    }
}
