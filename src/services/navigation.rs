/// Client-side navigation collaborator
///
/// The filter form reads the current query string once per operation and
/// writes exactly one navigation target. Implementations decide what
/// "navigate" means: a history push, an HTTP redirect, a recorded call in a
/// test.
pub trait Navigator {
    /// Query portion of the current location, with or without leading `?`
    fn current_location_search(&self) -> String;

    /// Move to `path`
    fn navigate(&mut self, path: &str);
}

/// Query portion (`?...`) of a path, or empty
fn search_of(path: &str) -> &str {
    match path.find('?') {
        Some(idx) => {
            let search = &path[idx..];
            search.split('#').next().unwrap_or(search)
        }
        None => "",
    }
}

/// Browser-style history stack kept in memory
///
/// `navigate` pushes a new entry and drops any forward entries, the way a
/// history push does after going back.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// Current full path
    pub fn location(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: history keeps at least the initial entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step back one entry; returns false at the start of history
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryHistory {
    fn current_location_search(&self) -> String {
        search_of(self.location()).to_string()
    }

    fn navigate(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index = self.entries.len() - 1;
    }
}

/// Navigator scoped to a single HTTP request
///
/// The request's own query string is the current location and the navigation
/// target becomes the redirect the handler sends back.
#[derive(Debug, Clone, Default)]
pub struct RequestNavigator {
    query: String,
    target: Option<String>,
}

impl RequestNavigator {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            target: None,
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn into_target(self) -> Option<String> {
        self.target
    }
}

impl Navigator for RequestNavigator {
    fn current_location_search(&self) -> String {
        if self.query.is_empty() || self.query.starts_with('?') {
            self.query.clone()
        } else {
            format!("?{}", self.query)
        }
    }

    fn navigate(&mut self, path: &str) {
        self.target = Some(path.to_string());
    }
}
