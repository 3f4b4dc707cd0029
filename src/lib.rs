//! tokencost - Historical pricing of LLM API calls
//!
//! This library computes what an OpenAI, Anthropic or Google model call
//! cost on a given date:
//! - Resolve generic aliases (`gpt-3.5-turbo`, `gemini-1.5-pro`) to the
//!   dated snapshot they pointed at on the call date
//! - Look up that snapshot's per-million-token prices, including the
//!   Gemini long-context tier
//! - Price the call's token usage with exact decimal arithmetic
//!
//! # Examples
//!
//! ```
//! use tokencost::{AnthropicUsage, calc_anthropic_price_by_name, calc_model_price, parse_call_date};
//! use tokencost::{GoogleUsage, get_model_spec, Usage};
//!
//! let at = parse_call_date("2024-11-01").unwrap();
//!
//! let usage = AnthropicUsage {
//!     input_tokens: 1_000_000,
//!     cache_creation_input_tokens: 0,
//!     cache_read_input_tokens: 1_000_000,
//!     output_tokens: 0,
//! };
//! let cost = calc_anthropic_price_by_name("claude-3-5-sonnet", at, &usage)?;
//! assert!((cost - 3.3).abs() < 1e-9);
//!
//! let spec = get_model_spec("gemini-1.5-pro", at, &Usage::new(200_000, 0))?;
//! assert_eq!(spec.price_per_input_mtok.to_string(), "5");
//!
//! let google = GoogleUsage { prompt_token_count: 1_000, candidates_token_count: 1_000 };
//! assert!(calc_model_price("gemini-1.5-flash", at, google)? > 0.0);
//! # Ok::<(), tokencost::TokencostError>(())
//! ```

pub mod cli;
pub mod dispatcher;
pub mod output;

// Re-export commonly used types
pub use dispatcher::{
    MODELS, calc_anthropic_price, calc_anthropic_price_by_name, calc_google_price,
    calc_google_price_by_name, calc_model_price, calc_openai_price, calc_openai_price_by_name,
    detect_provider, get_model_spec,
};
pub use tokencost_core::date::parse_call_date;
pub use tokencost_core::{
    CatalogModel, ModelName, ModelSpec, Provider, ProviderCatalog, Result, TokencostError, Usage,
};
pub use tokencost_pricing::{CostBreakdown, CostCalculator, calc_price};
pub use tokencost_provider_anthropic::{AnthropicCatalog, AnthropicModel, AnthropicUsage};
pub use tokencost_provider_google::{GoogleCatalog, GoogleModel, GoogleUsage};
pub use tokencost_provider_openai::{OpenAiCatalog, OpenAiModel, OpenAiUsage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
