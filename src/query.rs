//! Search query and pagination state.

/// Fixed page size for key listings.
pub const PAGE_SIZE: u64 = 50;

/// How the search text matches keys on the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Leading-substring match, indexed server-side.
    #[default]
    Prefix,
    /// Match anywhere in the key. Requires a full scan server-side.
    Substring,
}

impl SearchMode {
    pub const fn param(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Substring => "substring",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Substring => "contains",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Prefix => Self::Substring,
            Self::Substring => Self::Prefix,
        }
    }
}

/// Immutable snapshot of a query, as sent with one key-list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyQuery {
    pub text: String,
    pub mode: SearchMode,
    pub offset: u64,
    pub limit: u64,
}

/// Current search text, mode and page position.
///
/// `offset` is kept private so every mutation path preserves the invariant
/// that it is a multiple of `limit` and never points past the last page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    text: String,
    mode: SearchMode,
    offset: u64,
    limit: u64,
    total: u64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryState {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            mode: SearchMode::Prefix,
            offset: 0,
            limit: PAGE_SIZE,
            total: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn mode(&self) -> SearchMode {
        self.mode
    }

    pub const fn offset(&self) -> u64 {
        self.offset
    }

    pub const fn limit(&self) -> u64 {
        self.limit
    }

    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Replace the search text. Any filter change invalidates the offset.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.reset_page();
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
        self.reset_page();
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
        self.reset_page();
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
        self.reset_page();
    }

    pub fn reset_page(&mut self) {
        self.offset = 0;
    }

    /// Record the authoritative total from the latest key listing.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        // The current page can vanish when the result set shrinks.
        let max_offset = self.limit * (self.page_count() - 1);
        if self.offset > max_offset {
            self.offset = max_offset;
        }
    }

    /// Advance one page. No-op when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.can_next() {
            self.offset += self.limit;
            true
        } else {
            false
        }
    }

    /// Go back one page. No-op at offset 0.
    pub fn prev_page(&mut self) -> bool {
        if self.can_prev() {
            self.offset -= self.limit;
            true
        } else {
            false
        }
    }

    pub const fn can_next(&self) -> bool {
        (self.offset / self.limit + 1) * self.limit < self.total
    }

    pub const fn can_prev(&self) -> bool {
        self.offset > 0
    }

    /// Total pages, floored at 1 so an empty result still reads "Page 1 of 1".
    pub const fn page_count(&self) -> u64 {
        let pages = self.total.div_ceil(self.limit);
        if pages == 0 {
            1
        } else {
            pages
        }
    }

    /// 1-based page number.
    pub const fn current_page(&self) -> u64 {
        self.offset / self.limit + 1
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page(), self.page_count())
    }

    /// Snapshot for one outgoing request.
    pub fn snapshot(&self) -> KeyQuery {
        KeyQuery {
            text: self.text.clone(),
            mode: self.mode,
            offset: self.offset,
            limit: self.limit,
        }
    }
}
