//! Cost calculator for tokencost
//!
//! This crate turns a normalized [`Usage`](tokencost_core::Usage) and a
//! [`ModelSpec`](tokencost_core::ModelSpec) into a USD cost using exact
//! decimal arithmetic.

pub mod cost_calculator;

pub use cost_calculator::{CostBreakdown, CostCalculator, calc_price};
