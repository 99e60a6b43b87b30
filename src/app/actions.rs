//! Application actions (side effects requested by App).

/// Actions that require the runtime to perform side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Re-fetch stats and the current key page.
    Refresh,
    /// Fetch the key page for the current query.
    FetchKeys,
    /// Fetch the value for one key.
    FetchValue(String),
}
