//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod cart_repo;
pub mod category_repo;
pub mod discount_repo;
pub mod setting_repo;

pub use cart_repo::CartRepository;
pub use category_repo::CategoryRepository;
pub use discount_repo::DiscountRepository;
pub use setting_repo::SettingRepository;
