//! Discount Rules - "Has category" discount requirement service
//!
//! A discount requirement that is met when the customer's shopping cart
//! holds products from configured categories, optionally in an exact
//! quantity or a quantity range. Configuration is a comma-separated list
//! such as `77, 123:2, 156:3-8`.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs
//!
//! Parsing and evaluation live in the `category-rules` crate and never
//! touch storage.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod providers;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
