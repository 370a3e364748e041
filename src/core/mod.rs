// Core form logic exports
pub mod password;
pub mod query;
pub mod sync;
pub mod validation;

pub use password::validate_change_password;
pub use query::{parse_pairs, search_term, selection_from_query, QueryState, DEFAULT_SEARCH_PATH, SEARCH_PARAM};
pub use sync::FilterFormSync;
pub use validation::{validate, FieldErrors, ValidSelection};
