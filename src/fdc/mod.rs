//! USDA FoodData Central client and helpers for reading its food records.

mod client;
pub mod food;

pub use client::{FdcClient, FdcError, FoodProvider, SearchOptions};
