use crate::core::query::{search_term, selection_from_query, QueryState, DEFAULT_SEARCH_PATH};
use crate::core::validation::{self, FieldErrors, ValidSelection};
use crate::models::{FilterOptions, FilterSelection, MissingSearch};
use crate::services::Navigator;

/// Keeps the search filter form and the URL query string in step
///
/// Holds the allow-lists and URL settings; all per-request state lives in the
/// selection passed in and the `Navigator` it reads from and writes to.
#[derive(Debug, Clone)]
pub struct FilterFormSync {
    options: FilterOptions,
    search_path: String,
    missing_search: MissingSearch,
}

impl FilterFormSync {
    pub fn new(options: FilterOptions) -> Self {
        Self {
            options,
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            missing_search: MissingSearch::default(),
        }
    }

    pub fn with_search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = path.into();
        self
    }

    pub fn with_missing_search(mut self, missing_search: MissingSearch) -> Self {
        self.missing_search = missing_search;
        self
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn search_path(&self) -> &str {
        &self.search_path
    }

    /// Fresh form state with every field empty
    pub fn initialize(&self) -> FilterSelection {
        FilterSelection::default()
    }

    pub fn validate(&self, selection: &FilterSelection) -> Result<ValidSelection, FieldErrors> {
        validation::validate(selection, &self.options)
    }

    fn resolve_search(&self, current_search: Option<&str>) -> String {
        current_search
            .unwrap_or_else(|| self.missing_search.fallback())
            .to_string()
    }

    /// Navigation target for a validated selection
    pub fn submit_url(&self, selection: &ValidSelection, current_search: Option<&str>) -> String {
        QueryState::new(self.resolve_search(current_search), selection.selection().clone())
            .to_path(&self.search_path)
    }

    /// Navigation target that keeps only the search term
    pub fn reset_url(&self, current_search: Option<&str>) -> String {
        QueryState::search_only(self.resolve_search(current_search)).to_path(&self.search_path)
    }

    /// Navigate to the filtered search for `selection`
    ///
    /// The search term is read from the navigator's current location at call
    /// time. Returns the path navigated to.
    pub fn submit<N: Navigator + ?Sized>(&self, selection: &ValidSelection, navigator: &mut N) -> String {
        let current = search_term(&navigator.current_location_search());
        let path = self.submit_url(selection, current.as_deref());
        tracing::debug!("Submitting filters: {}", path);
        navigator.navigate(&path);
        path
    }

    /// Drop every filter, keeping the current search term
    pub fn reset<N: Navigator + ?Sized>(&self, navigator: &mut N) -> String {
        let current = search_term(&navigator.current_location_search());
        let path = self.reset_url(current.as_deref());
        tracing::debug!("Resetting filters: {}", path);
        navigator.navigate(&path);
        path
    }

    /// Validate, then submit only if every field passed
    ///
    /// On failure the navigator is left untouched.
    pub fn apply<N: Navigator + ?Sized>(
        &self,
        selection: &FilterSelection,
        navigator: &mut N,
    ) -> Result<String, FieldErrors> {
        match self.validate(selection) {
            Ok(valid) => Ok(self.submit(&valid, navigator)),
            Err(errors) => {
                tracing::warn!("Filter submission rejected: {}", errors);
                Err(errors)
            }
        }
    }

    /// Form state encoded in the navigator's current location
    ///
    /// Values are returned as found; they are checked on the next submit.
    pub fn hydrate<N: Navigator + ?Sized>(&self, navigator: &N) -> FilterSelection {
        selection_from_query(&navigator.current_location_search())
    }
}
