//! HTTP handlers for the fridge API

pub mod fridge;
pub mod health;

pub use fridge::*;
pub use health::*;
