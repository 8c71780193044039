//! Application-wide constants
//!
//! Constants are grouped by their purpose.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// REQUIREMENT RULE
// =============================================================================

/// System name of the "has category" discount requirement rule
pub const SYSTEM_NAME: &str = "DiscountRequirement.HasCategory";

/// Prefix of the setting that stores a requirement's restricted categories.
/// The requirement id is appended.
pub const SETTINGS_KEY_PREFIX: &str = "DiscountRequirement.RestrictedCategoryIds-";

/// Store used when a request does not name one
pub const DEFAULT_STORE_ID: i32 = 0;

/// Settings key for a requirement
pub fn settings_key(requirement_id: i32) -> String {
    format!("{}{}", SETTINGS_KEY_PREFIX, requirement_id)
}

/// Shopping cart item types
pub mod cart_types {
    pub const SHOPPING_CART: i32 = 1;
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum length of a restricted-categories configuration
pub const MAX_CATEGORY_IDS_LENGTH: u64 = 4000;
