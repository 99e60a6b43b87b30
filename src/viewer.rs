//! Pure projection of a fetched value into one of the display modes.

use crate::api::ValueRecord;

/// Fallback rendering when structured mode cannot parse the value body.
pub const INVALID_JSON: &str = "Invalid JSON";

/// Which rendition of the selected value is shown.
///
/// Sticky across selections: switching keys keeps the chosen tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Raw,
    Hex,
    Json,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [DisplayMode::Raw, DisplayMode::Hex, DisplayMode::Json];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Raw => "Raw",
            Self::Hex => "Hex",
            Self::Json => "JSON",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Raw => Self::Hex,
            Self::Hex => Self::Json,
            Self::Json => Self::Raw,
        }
    }
}

/// Render the record in the given mode. Never fails and never fetches:
/// structured-mode parse failures degrade to [`INVALID_JSON`].
pub fn render(record: &ValueRecord, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Raw => record.value.clone(),
        DisplayMode::Hex => group_hex(&record.value_hex),
        DisplayMode::Json => pretty_json(&record.value),
    }
}

/// Group a hex digit string into space-separated byte pairs.
fn group_hex(hex: &str) -> String {
    let bytes: Vec<&str> = hex
        .as_bytes()
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).unwrap_or(""))
        .collect();
    bytes.join(" ")
}

fn pretty_json(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| INVALID_JSON.to_string())
        }
        Err(_) => INVALID_JSON.to_string(),
    }
}
