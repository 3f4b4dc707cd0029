//! OpenAI provider for tokencost
//!
//! This crate implements the catalog trait for OpenAI chat and completion
//! models, including the dated snapshot history of the `gpt-3.5-turbo` and
//! `gpt-4` aliases.

pub mod catalog;

pub use catalog::{OpenAiCatalog, OpenAiModel, OpenAiUsage};
