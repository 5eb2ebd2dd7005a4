//! Shared types and calculations for the fridge inventory
//!
//! This crate contains the pure inventory logic shared between the backend
//! and the browser client (via WASM): record normalization, valuation,
//! freshness grouping and display formatting.

pub mod format;
pub mod grouping;
pub mod models;
pub mod normalize;
pub mod payload;
pub mod summary;
pub mod types;
pub mod validation;
pub mod valuation;

pub use format::*;
pub use grouping::*;
pub use models::*;
pub use normalize::*;
pub use payload::*;
pub use summary::*;
pub use types::*;
pub use validation::*;
pub use valuation::*;
