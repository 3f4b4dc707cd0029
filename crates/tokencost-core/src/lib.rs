//! Core types, traits, and utilities for tokencost
//!
//! This crate provides the data model shared by the pricing engine and the
//! provider catalogs: usage and price records, the catalog trait, date-based
//! alias chains, and error handling.

pub mod cutover;
pub mod date;
pub mod error;
pub mod provider;
pub mod types;

// Re-export commonly used types
pub use cutover::{AliasChain, Cutover};
pub use error::{Result, TokencostError};
pub use provider::{CatalogModel, ProviderCatalog};
pub use types::{ModelName, ModelSpec, Provider, Usage};
