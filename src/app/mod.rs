//! Application state and key handling.

mod actions;
mod state;

pub use actions::AppAction;
pub use state::{Selection, UiFeedback, ViewMode};

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use crate::api::{ApiError, KeyPage, StoreStats, ValueRecord};
use crate::config::AppConfig;
use crate::query::QueryState;
use crate::viewer::{self, DisplayMode};

/// Max characters to show in clipboard preview messages
const CLIPBOARD_PREVIEW_LEN: usize = 40;

pub struct App {
    // Core runtime
    pub running: bool,
    pub config: AppConfig,
    pub base_url: String,

    // Query + results
    pub query: QueryState,
    pub keys: Vec<String>,
    pub list_state: ListState,
    pub stats: Option<StoreStats>,

    // Selection + rendering
    pub selection: Selection,
    pub display_mode: DisplayMode,
    pub value_scroll: u16,

    pub view_mode: ViewMode,
    pub feedback: UiFeedback,
    pub pending_action: Option<AppAction>,

    // Debounce bookkeeping: deadline for the next search-triggered fetch.
    // Replaced wholesale on every qualifying keystroke.
    debounce: Duration,
    pub search_deadline: Option<Instant>,

    // Session-scoped: substring mode warns once, then never again.
    substring_warned: bool,

    // Monotonic token attached to each key-list request. Responses carrying
    // an older token are dropped, so the last-issued request always wins.
    keys_token: u64,
}

impl App {
    pub fn new(base_url: String, config: AppConfig, debounce_ms: u64) -> Self {
        Self {
            running: true,
            config,
            base_url,
            query: QueryState::new(),
            keys: Vec::new(),
            list_state: ListState::default(),
            stats: None,
            selection: Selection::None,
            display_mode: DisplayMode::Raw,
            value_scroll: 0,
            view_mode: ViewMode::Normal,
            feedback: UiFeedback::new(),
            pending_action: None,
            debounce: Duration::from_millis(debounce_ms),
            search_deadline: None,
            substring_warned: false,
            keys_token: 0,
        }
    }

    // --- Key-list fetch bookkeeping ---

    /// Issue a new request token. Called by the runtime right before a
    /// key-list fetch goes out.
    pub fn begin_keys_fetch(&mut self) -> u64 {
        self.keys_token += 1;
        self.keys_token
    }

    pub const fn latest_keys_token(&self) -> u64 {
        self.keys_token
    }

    /// Apply a key-list result. Stale responses (older token) are discarded;
    /// failures keep the previously rendered list.
    pub fn apply_keys(&mut self, token: u64, result: Result<KeyPage, ApiError>) {
        if token != self.keys_token {
            return;
        }
        match result {
            Ok(page) => {
                self.keys = page.keys;
                self.query.set_total(page.total);
                let cursor = self.list_state.selected().unwrap_or(0);
                if self.keys.is_empty() {
                    self.list_state.select(None);
                } else {
                    self.list_state
                        .select(Some(cursor.min(self.keys.len() - 1)));
                }
                self.feedback.last_error = None;
            }
            Err(e) => {
                self.feedback.last_error = Some(e.to_string());
            }
        }
    }

    /// Apply a stats result. Failures keep the previously displayed stats.
    pub fn apply_stats(&mut self, result: Result<StoreStats, ApiError>) {
        match result {
            Ok(stats) => self.stats = Some(stats),
            Err(e) => self.feedback.last_error = Some(e.to_string()),
        }
    }

    /// Apply a value result. A response for a key that is no longer the one
    /// being loaded is dropped; any failure hides the value pane.
    pub fn apply_value(&mut self, key: &str, result: Result<ValueRecord, ApiError>) {
        let expected = match &self.selection {
            Selection::Loading { key } => key.clone(),
            _ => return,
        };
        if expected != key {
            return;
        }
        match result {
            Ok(record) => {
                self.selection = Selection::Loaded { record };
                self.value_scroll = 0;
            }
            Err(e) if e.is_not_found() => {
                self.selection = Selection::None;
                self.feedback.status_message = Some(format!("Key no longer exists: {key}"));
            }
            Err(e) => {
                self.selection = Selection::None;
                self.feedback.last_error = Some(e.to_string());
            }
        }
    }

    // --- Debounce ---

    /// Restart the quiet-period timer after a search keystroke.
    fn schedule_search_fetch(&mut self) {
        self.search_deadline = Some(Instant::now() + self.debounce);
    }

    /// The quiet period elapsed: fetch for whatever the text is now.
    pub fn debounce_fired(&mut self) {
        self.search_deadline = None;
        self.pending_action = Some(AppAction::FetchKeys);
    }

    // --- User transitions ---

    fn toggle_mode(&mut self) {
        self.query.set_mode(self.query.mode().toggled());
        if self.query.mode() == crate::query::SearchMode::Substring && !self.substring_warned {
            self.substring_warned = true;
            self.view_mode = ViewMode::SubstringWarning;
        }
        // Mode changes fetch immediately and supersede any pending debounce.
        self.search_deadline = None;
        self.pending_action = Some(AppAction::FetchKeys);
    }

    fn next_page(&mut self) {
        if self.query.next_page() {
            self.pending_action = Some(AppAction::FetchKeys);
        }
    }

    fn prev_page(&mut self) {
        if self.query.prev_page() {
            self.pending_action = Some(AppAction::FetchKeys);
        }
    }

    fn refresh(&mut self) {
        self.pending_action = Some(AppAction::Refresh);
        self.feedback.status_message = None;
    }

    /// Select the key under the cursor. Re-selecting the current key is a
    /// no-op; selection identity is the key string, not the click.
    fn select_under_cursor(&mut self) {
        let Some(idx) = self.list_state.selected() else {
            return;
        };
        let Some(key) = self.keys.get(idx) else {
            return;
        };
        if self.selection.key() == Some(key.as_str()) {
            return;
        }
        self.selection = Selection::Loading { key: key.clone() };
        self.pending_action = Some(AppAction::FetchValue(key.clone()));
    }

    fn select_next_key(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        let i = self.list_state.selected().unwrap_or(0);
        if i < self.keys.len() - 1 {
            self.list_state.select(Some(i + 1));
        }
    }

    fn select_prev_key(&mut self) {
        let i = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(i.saturating_sub(1)));
    }

    fn copy_rendering(&mut self) {
        let Some(record) = self.selection.record() else {
            return;
        };
        let text = viewer::render(record, self.display_mode);
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(&text)) {
            Ok(()) => {
                let preview: String = text.chars().take(CLIPBOARD_PREVIEW_LEN).collect();
                let suffix = if text.len() > CLIPBOARD_PREVIEW_LEN {
                    "..."
                } else {
                    ""
                };
                self.feedback.status_message = Some(format!("Copied: {preview}{suffix}"));
            }
            Err(e) => {
                self.feedback.status_message = Some(format!("Clipboard error: {e}"));
            }
        }
    }

    // --- Key handling ---

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.view_mode = ViewMode::Normal;
            }
            KeyCode::Backspace => {
                self.query.pop_char();
                self.schedule_search_fetch();
            }
            KeyCode::Char(c) => {
                self.query.push_char(c);
                self.schedule_search_fetch();
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Char('/') => {
                self.view_mode = ViewMode::Search;
            }
            KeyCode::Char('m') => {
                self.toggle_mode();
            }
            KeyCode::Char('r') => {
                self.refresh();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev_key();
                self.feedback.status_message = None;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next_key();
                self.feedback.status_message = None;
            }
            KeyCode::Char('g') => {
                if !self.keys.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Char('G') => {
                if !self.keys.is_empty() {
                    self.list_state.select(Some(self.keys.len() - 1));
                }
            }
            KeyCode::Enter => {
                self.select_under_cursor();
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.prev_page();
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.next_page();
            }
            KeyCode::Tab | KeyCode::Char('v') => {
                self.display_mode = self.display_mode.next();
            }
            KeyCode::Char('1') => {
                self.display_mode = DisplayMode::Raw;
            }
            KeyCode::Char('2') => {
                self.display_mode = DisplayMode::Hex;
            }
            KeyCode::Char('3') => {
                self.display_mode = DisplayMode::Json;
            }
            KeyCode::Char('y') => {
                self.copy_rendering();
            }
            KeyCode::Char('?') => {
                self.view_mode = ViewMode::Help;
            }
            KeyCode::PageDown => {
                self.value_scroll = self.value_scroll.saturating_add(10);
            }
            KeyCode::PageUp => {
                self.value_scroll = self.value_scroll.saturating_sub(10);
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value_scroll = self.value_scroll.saturating_add(10);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value_scroll = self.value_scroll.saturating_sub(10);
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.view_mode {
            // Modal overlays consume all input
            ViewMode::Help | ViewMode::SubstringWarning => {
                self.view_mode = ViewMode::Normal;
            }
            ViewMode::Search => self.handle_search_key(key),
            ViewMode::Normal => self.handle_normal_key(key),
        }
    }
}
