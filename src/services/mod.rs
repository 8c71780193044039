//! Business logic services

pub mod configure_service;
pub mod requirement_service;

pub use configure_service::ConfigureService;
pub use requirement_service::{PgRequirementService, RequirementService};
