//! Business logic services for the fridge API

pub mod fridge;

pub use fridge::FridgeService;
