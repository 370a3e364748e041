// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FilterField, FilterOptions, FilterSelection, MissingSearch, GENDERS, RELATIONSHIP_STATUSES};
pub use requests::ChangePasswordRequest;
pub use responses::{ErrorResponse, FilterOptionsResponse, HealthResponse, NavigationResponse, ValidationErrorResponse};
