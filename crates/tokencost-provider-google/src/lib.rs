//! Google provider for tokencost
//!
//! This crate implements the catalog trait for Gemini models on Vertex AI,
//! including the long-context price tier of the Gemini 1.5 family.

pub mod catalog;

pub use catalog::{GoogleCatalog, GoogleModel, GoogleUsage, LONG_CONTEXT_THRESHOLD};
