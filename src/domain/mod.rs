//! Domain layer containing the analysis logic and its vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (directions, input guards, errors)
//! - `analysis` - Pure domain services (dominance, normalization, sensitivity, tradeoffs)

pub mod analysis;
pub mod foundation;
