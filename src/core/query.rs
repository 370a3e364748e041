use crate::models::{FilterField, FilterSelection};
use url::form_urlencoded;

/// Name of the free-text search parameter carried across navigations
pub const SEARCH_PARAM: &str = "search";

/// Default path the filter form navigates to
pub const DEFAULT_SEARCH_PATH: &str = "/search/";

/// Encode a single query component the way `URLSearchParams` does
///
/// Space becomes `+`; only alphanumerics and `*-._` are left as is.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Split a query string into decoded key/value pairs, in order
///
/// Accepts an optional leading `?`. Empty segments are skipped, a segment
/// without `=` yields an empty value, and percent sequences that are not
/// valid UTF-8 decode to U+FFFD.
pub fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// First value for `name` in `query`
pub fn get_param(query: &str, name: &str) -> Option<String> {
    parse_pairs(query)
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// Current free-text search term, if the query carries one
#[inline]
pub fn search_term(query: &str) -> Option<String> {
    get_param(query, SEARCH_PARAM)
}

/// Filter values present in `query`; unknown parameters are ignored
pub fn selection_from_query(query: &str) -> FilterSelection {
    let mut selection = FilterSelection::default();
    for (key, value) in parse_pairs(query) {
        if let Some(field) = FilterField::from_param(&key) {
            if selection.get(field).is_none() {
                selection.set(field, Some(value));
            }
        }
    }
    selection
}

/// Serialized form of a filter selection plus the carried-over search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub filters: FilterSelection,
}

impl QueryState {
    pub fn new(search: impl Into<String>, filters: FilterSelection) -> Self {
        Self {
            search: search.into(),
            filters,
        }
    }

    /// State carrying only the search term
    pub fn search_only(search: impl Into<String>) -> Self {
        Self::new(search, FilterSelection::default())
    }

    /// Read state back from a query string
    ///
    /// A missing `search` parameter becomes an empty term.
    pub fn parse(query: &str) -> Self {
        Self {
            search: search_term(query).unwrap_or_default(),
            filters: selection_from_query(query),
        }
    }

    /// `search` first, then each non-empty filter in field order
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair(SEARCH_PARAM, &self.search);
        for (field, value) in self.filters.active_fields() {
            serializer.append_pair(field.as_str(), value);
        }
        serializer.finish()
    }

    /// Full navigation target under `base_path`, e.g. `/search/?search=x`
    pub fn to_path(&self, base_path: &str) -> String {
        format!("{}?{}", base_path, self.to_query_string())
    }
}
