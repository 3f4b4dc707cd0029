//! Anthropic provider for tokencost
//!
//! This crate implements the catalog trait for Claude models served by the
//! Anthropic API, Amazon Bedrock and Google Vertex AI, including prompt-cache
//! pricing.

pub mod catalog;

pub use catalog::{AnthropicCatalog, AnthropicModel, AnthropicUsage};
