//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod category;
pub mod discount;

pub use category::*;
pub use discount::*;
