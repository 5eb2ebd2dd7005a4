//! Domain models for the fridge inventory

mod category;
mod freshness;
mod inventory;
mod unit;

pub use category::*;
pub use freshness::*;
pub use inventory::*;
pub use unit::*;
