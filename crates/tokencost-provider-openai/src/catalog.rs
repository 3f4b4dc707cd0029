//! OpenAI model catalog
//!
//! Prices are USD per million tokens as published on the OpenAI pricing
//! page. Generic aliases such as `gpt-3.5-turbo` follow the snapshot they
//! pointed at on the call date.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tokencost_core::cutover::{AliasChain, Cutover};
use tokencost_core::define_models;
use tokencost_core::error::Result;
use tokencost_core::provider::{ProviderCatalog, unknown_model};
use tokencost_core::types::{ModelSpec, Provider, Usage};
use tracing::debug;

define_models! {
    /// Model names recognized by the OpenAI catalog
    #[allow(non_camel_case_types)]
    pub enum OpenAiModel {
        Gpt35Turbo => "gpt-3.5-turbo",
        Gpt4 => "gpt-4",
        Gpt4_32k => "gpt-4-32k",
        Gpt35Turbo16k => "gpt-3.5-turbo-16k",
        Gpt4TurboPreview => "gpt-4-turbo-preview",
        Gpt4Turbo => "gpt-4-turbo",
        Gpt4o => "gpt-4o",
        Gpt4oMini => "gpt-4o-mini",
        O1Preview => "o1-preview",
        O1Mini => "o1-mini",
        Chatgpt4oLatest => "chatgpt-4o-latest",
        Gpt4o20240806 => "gpt-4o-2024-08-06",
        Gpt4o20240513 => "gpt-4o-2024-05-13",
        Gpt4oMini20240718 => "gpt-4o-mini-2024-07-18",
        O1Preview20240912 => "o1-preview-2024-09-12",
        O1Mini20240912 => "o1-mini-2024-09-12",
        Gpt4_1106Preview => "gpt-4-1106-preview",
        Gpt4_0125Preview => "gpt-4-0125-preview",
        Gpt4VisionPreview => "gpt-4-vision-preview",
        Gpt4Turbo20240409 => "gpt-4-turbo-2024-04-09",
        Gpt4_0613 => "gpt-4-0613",
        Gpt4_0314 => "gpt-4-0314",
        Gpt4_32k0314 => "gpt-4-32k-0314",
        Gpt4_32k0613 => "gpt-4-32k-0613",
        Gpt35Turbo0301 => "gpt-3.5-turbo-0301",
        Gpt35Turbo0613 => "gpt-3.5-turbo-0613",
        Gpt35Turbo1106 => "gpt-3.5-turbo-1106",
        Gpt35Turbo0125 => "gpt-3.5-turbo-0125",
        Gpt35TurboInstruct => "gpt-3.5-turbo-instruct",
        Gpt35Turbo16k0613 => "gpt-3.5-turbo-16k-0613",
        Davinci002 => "davinci-002",
        Babbage002 => "babbage-002",
    }
}

/// `usage` object of a chat completion response
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAiUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl From<&OpenAiUsage> for Usage {
    fn from(usage: &OpenAiUsage) -> Self {
        Usage {
            input_tokens: Some(usage.prompt_tokens),
            output_tokens: Some(usage.completion_tokens),
            cache_read_tokens: None,
            cache_write_tokens: None,
        }
    }
}

impl From<OpenAiUsage> for Usage {
    fn from(usage: OpenAiUsage) -> Self {
        Usage::from(&usage)
    }
}

const GPT_35_TURBO_ALIAS: AliasChain<OpenAiModel> = AliasChain::new(
    &[
        (Cutover::new(2024, 2, 8), OpenAiModel::Gpt35Turbo0125),
        // TODO: confirm the day gpt-3.5-turbo switched to 1106; this boundary is unverified.
        (Cutover::new(2023, 11, 6), OpenAiModel::Gpt35Turbo1106),
        (Cutover::new(2023, 6, 27), OpenAiModel::Gpt35Turbo0613),
    ],
    OpenAiModel::Gpt35Turbo0301,
);

const GPT_4_ALIAS: AliasChain<OpenAiModel> = AliasChain::new(
    &[(Cutover::new(2023, 6, 27), OpenAiModel::Gpt4_0613)],
    OpenAiModel::Gpt4_0314,
);

const GPT_4_32K_ALIAS: AliasChain<OpenAiModel> = AliasChain::new(
    &[(Cutover::new(2023, 6, 27), OpenAiModel::Gpt4_32k0613)],
    OpenAiModel::Gpt4_32k0314,
);

const CHAINS: [AliasChain<OpenAiModel>; 3] = [GPT_35_TURBO_ALIAS, GPT_4_ALIAS, GPT_4_32K_ALIAS];

const GPT_4O_2024_05_13: ModelSpec = ModelSpec::new(dec!(5), dec!(15));
const GPT_4O_2024_08_06: ModelSpec = ModelSpec::new(dec!(2.5), dec!(10));
const GPT_4O_MINI: ModelSpec = ModelSpec::new(dec!(0.15), dec!(0.6));
const O1_PREVIEW: ModelSpec = ModelSpec::new(dec!(15), dec!(60));
const O1_MINI: ModelSpec = ModelSpec::new(dec!(3), dec!(12));
const GPT_4_TURBO: ModelSpec = ModelSpec::new(dec!(10), dec!(30));
const GPT_4: ModelSpec = ModelSpec::new(dec!(30), dec!(60));
const GPT_4_32K: ModelSpec = ModelSpec::new(dec!(60), dec!(120));
const GPT_35_TURBO_0125: ModelSpec = ModelSpec::new(dec!(0.5), dec!(1.5));
const GPT_35_TURBO_1106: ModelSpec = ModelSpec::new(dec!(1), dec!(2));
const GPT_35_TURBO_LEGACY: ModelSpec = ModelSpec::new(dec!(1.5), dec!(2));
const GPT_35_TURBO_16K: ModelSpec = ModelSpec::new(dec!(3), dec!(4));
const DAVINCI_002: ModelSpec = ModelSpec::new(dec!(2), dec!(2));
const BABBAGE_002: ModelSpec = ModelSpec::new(dec!(0.4), dec!(0.4));

/// OpenAI pricing catalog
pub struct OpenAiCatalog;

impl ProviderCatalog for OpenAiCatalog {
    const PROVIDER: Provider = Provider::OpenAi;
    type Model = OpenAiModel;
    type RawUsage = OpenAiUsage;

    fn convert_usage(raw: &OpenAiUsage) -> Usage {
        Usage::from(raw)
    }

    fn resolve_alias(model: OpenAiModel, at: DateTime<Utc>) -> OpenAiModel {
        use OpenAiModel::*;

        match model {
            Gpt35Turbo => GPT_35_TURBO_ALIAS.resolve(at),
            Gpt4 => GPT_4_ALIAS.resolve(at),
            Gpt4_32k => GPT_4_32K_ALIAS.resolve(at),
            Gpt35Turbo16k => Gpt35Turbo16k0613,
            Gpt4TurboPreview => Gpt4_0125Preview,
            Gpt4Turbo => Gpt4Turbo20240409,
            Gpt4o => Gpt4o20240513,
            Gpt4oMini => Gpt4oMini20240718,
            O1Preview => O1Preview20240912,
            O1Mini => O1Mini20240912,
            dated => dated,
        }
    }

    fn lookup_spec(model: OpenAiModel, _usage: &Usage) -> Result<ModelSpec> {
        use OpenAiModel::*;

        let spec = match model {
            Chatgpt4oLatest | Gpt4o20240513 => GPT_4O_2024_05_13,
            Gpt4o20240806 => GPT_4O_2024_08_06,
            Gpt4oMini20240718 => GPT_4O_MINI,
            O1Preview20240912 => O1_PREVIEW,
            O1Mini20240912 => O1_MINI,
            Gpt4_1106Preview | Gpt4_0125Preview | Gpt4VisionPreview | Gpt4Turbo20240409 => {
                GPT_4_TURBO
            }
            Gpt4_0613 | Gpt4_0314 => GPT_4,
            Gpt4_32k0314 | Gpt4_32k0613 => GPT_4_32K,
            Gpt35Turbo0125 => GPT_35_TURBO_0125,
            Gpt35Turbo1106 => GPT_35_TURBO_1106,
            Gpt35TurboInstruct | Gpt35Turbo0613 | Gpt35Turbo0301 => GPT_35_TURBO_LEGACY,
            Gpt35Turbo16k0613 => GPT_35_TURBO_16K,
            Davinci002 => DAVINCI_002,
            Babbage002 => BABBAGE_002,
            Gpt35Turbo | Gpt4 | Gpt4_32k | Gpt35Turbo16k | Gpt4TurboPreview | Gpt4Turbo
            | Gpt4o | Gpt4oMini | O1Preview | O1Mini => return Err(unknown_model(model)),
        };

        debug!("OpenAI spec for {}: {:?}", model, spec);
        Ok(spec)
    }

    fn cutovers() -> Vec<Cutover> {
        CHAINS.iter().flat_map(|chain| chain.cutovers()).collect()
    }
}
