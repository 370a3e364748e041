//! Lume Search Filters - search filter validation and URL sync for Lume dating app
//!
//! This library keeps the profile search filter form and the URL query string
//! in step: it validates filter selections against their allow-lists, builds
//! the navigation target on submit/reset, and reads filter state back out of
//! a query string.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{FieldErrors, FilterFormSync, QueryState, ValidSelection};
pub use models::{FilterField, FilterOptions, FilterSelection, MissingSearch};
pub use services::{MemoryHistory, Navigator, RequestNavigator};
