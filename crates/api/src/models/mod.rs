//! Domain models for the API.
//!
//! These are data-shape declarations only: no handler constructs or stores
//! them yet. They document the intended schema for the persistence layer.

pub mod product;
pub mod user;

pub use product::Product;
pub use user::User;
