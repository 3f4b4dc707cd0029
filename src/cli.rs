//! CLI interface for tokencost
//!
//! This module defines the command-line interface using clap.
//!
//! # Example
//!
//! ```bash
//! # Cost of a gpt-4o call made on 2024-06-01
//! tokencost price --model gpt-4o --date 2024-06-01 --input 1000000
//!
//! # Price spec gemini-1.5-pro resolved to in November 2024, long-context tier
//! tokencost spec --model gemini-1.5-pro --date 2024-11-01 --input 200000 --json
//!
//! # Recognized Anthropic model names
//! tokencost models --provider anthropic
//! ```

use clap::{Args, Parser, Subcommand};
use tokencost_core::types::{Provider, Usage};

/// Price LLM API calls from token usage
#[derive(Parser, Debug, Clone)]
#[command(name = "tokencost")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show debug output (alias resolution and cost details)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute the cost of one call
    Price(CallArgs),

    /// Show the price spec a model resolves to
    Spec(CallArgs),

    /// List recognized model names
    Models {
        /// Only list this provider's models
        #[arg(long, short = 'p')]
        provider: Option<Provider>,
    },
}

/// Model, call date and token counts of one call
#[derive(Args, Debug, Clone)]
pub struct CallArgs {
    /// Model name, e.g. gpt-4o or claude-3-5-sonnet-20240620
    #[arg(long, short = 'm')]
    pub model: String,

    /// Call date (YYYY-MM-DD or RFC 3339); defaults to now
    #[arg(long, short = 'd', env = "TOKENCOST_DATE")]
    pub date: Option<String>,

    /// Input (prompt) tokens
    #[arg(long)]
    pub input: Option<u64>,

    /// Output (completion) tokens
    #[arg(long)]
    pub output: Option<u64>,

    /// Prompt-cache read tokens
    #[arg(long)]
    pub cache_read: Option<u64>,

    /// Prompt-cache write tokens
    #[arg(long)]
    pub cache_write: Option<u64>,
}

impl CallArgs {
    /// Token counts given on the command line
    pub fn usage(&self) -> Usage {
        Usage {
            input_tokens: self.input,
            output_tokens: self.output,
            cache_read_tokens: self.cache_read,
            cache_write_tokens: self.cache_write,
        }
    }
}
