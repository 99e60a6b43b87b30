//! Application state types.

use crate::api::ValueRecord;

/// Current view/interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Normal,
    /// Search input captures keystrokes.
    Search,
    Help,
    /// One-shot notice shown the first time substring mode is selected.
    SubstringWarning,
}

/// Selection state machine for the value pane.
///
/// Any fetch failure drops back to `None` so a highlighted key is never
/// paired with a stale or missing record.
#[derive(Debug, Clone, Default)]
pub enum Selection {
    #[default]
    None,
    Loading {
        key: String,
    },
    Loaded {
        record: ValueRecord,
    },
}

impl Selection {
    /// The key this selection refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Loading { key } => Some(key),
            Self::Loaded { record } => Some(&record.key),
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub const fn record(&self) -> Option<&ValueRecord> {
        match self {
            Self::Loaded { record } => Some(record),
            _ => None,
        }
    }
}

/// UI feedback shown in the header and footer.
#[derive(Debug, Default)]
pub struct UiFeedback {
    pub status_message: Option<String>,
    pub last_error: Option<String>,
}

impl UiFeedback {
    pub fn new() -> Self {
        Self::default()
    }
}
