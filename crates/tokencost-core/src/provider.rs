//! Provider catalog trait
//!
//! This module defines the `ProviderCatalog` trait that all provider crates
//! implement. It provides a uniform interface for converting a provider's
//! raw usage record, resolving a model alias on a given date, and looking
//! up the price of the resolved model.

use crate::cutover::Cutover;
use crate::error::{Result, TokencostError};
use crate::types::{ModelName, ModelSpec, Provider, Usage};
use chrono::{DateTime, Utc};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use tracing::debug;

/// A closed set of model names recognized by one provider.
///
/// Implemented by the enums generated with [`define_models!`](crate::define_models).
pub trait CatalogModel:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr<Err = TokencostError> + Send + Sync + 'static
{
    /// Every recognized name, in declaration order
    const ALL: &'static [Self];

    /// Wire name of the model
    fn as_str(&self) -> &'static str;
}

/// Trait for provider-specific model catalogs.
///
/// Each provider crate (OpenAI, Anthropic, Google) implements this trait
/// so that the dispatcher can price any provider's call with generic code.
pub trait ProviderCatalog {
    /// Tag of the provider owning this catalog
    const PROVIDER: Provider;

    /// Recognized model names
    type Model: CatalogModel;

    /// Usage record as reported by the provider's API
    type RawUsage;

    /// Rename the provider's usage fields into a [`Usage`].
    fn convert_usage(raw: &Self::RawUsage) -> Usage;

    /// Map an alias to the dated model it pointed at on `at`.
    ///
    /// Dated names are returned unchanged.
    fn resolve_alias(model: Self::Model, at: DateTime<Utc>) -> Self::Model;

    /// Price of a dated model.
    ///
    /// `usage` only matters for catalogs with volume-tiered pricing.
    /// Fails with `UnknownModel` when `model` has no price entry.
    fn lookup_spec(model: Self::Model, usage: &Usage) -> Result<ModelSpec>;

    /// Resolve `model` on `at` and look up its price.
    fn model_spec(model: Self::Model, at: DateTime<Utc>, usage: &Usage) -> Result<ModelSpec> {
        let canonical = Self::resolve_alias(model, at);
        if canonical != model {
            let provider = Self::PROVIDER;
            debug!(
                provider = %provider,
                "Resolved alias {} to {} at {}",
                model,
                canonical,
                at
            );
        }
        Self::lookup_spec(canonical, usage)
    }

    /// Every cutover day used by this catalog's alias chains
    fn cutovers() -> Vec<Cutover> {
        Vec::new()
    }

    /// Parse a model name, failing with `UnknownModel` for names outside this catalog.
    fn parse_model(name: &str) -> Result<Self::Model> {
        name.parse()
    }

    /// Whether `name` belongs to this catalog
    fn recognizes(name: &str) -> bool {
        Self::parse_model(name).is_ok()
    }
}

/// Error for a canonical name missing from a price table
pub fn unknown_model<M: CatalogModel>(model: M) -> TokencostError {
    TokencostError::UnknownModel(ModelName::new(model.as_str()))
}

/// Define a provider's closed set of model names.
///
/// Generates the enum together with its [`CatalogModel`], `FromStr` and
/// `Display` implementations. Parsing is exact and case-sensitive.
///
/// ```
/// use tokencost_core::define_models;
/// use tokencost_core::provider::CatalogModel;
///
/// define_models! {
///     pub enum DemoModel {
///         Small => "demo-small",
///         Large => "demo-large",
///     }
/// }
///
/// assert_eq!("demo-large".parse::<DemoModel>().unwrap(), DemoModel::Large);
/// assert!("demo-medium".parse::<DemoModel>().is_err());
/// assert_eq!(DemoModel::ALL.len(), 2);
/// assert_eq!(DemoModel::Small.to_string(), "demo-small");
/// ```
#[macro_export]
macro_rules! define_models {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $id:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Wire name of the model
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $id ),+
                }
            }
        }

        impl $crate::provider::CatalogModel for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::TokencostError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $id => Ok(Self::$variant), )+
                    _ => Err($crate::error::TokencostError::UnknownModel(
                        $crate::types::ModelName::new(s),
                    )),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($name::as_str(self))
            }
        }
    };
}
