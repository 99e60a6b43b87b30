use unicode_width::UnicodeWidthChar;

pub fn format_bytes(bytes: i64) -> String {
    const KB: i64 = 1024;
    const MB: i64 = 1024 * 1024;
    const GB: i64 = 1024 * 1024 * 1024;
    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Truncate to at most `max` display columns, on a char boundary.
pub fn truncate(s: &str, max: usize) -> &str {
    let mut width = 0;
    for (idx, c) in s.char_indices() {
        width += UnicodeWidthChar::width(c).unwrap_or(0);
        if width > max {
            return &s[..idx];
        }
    }
    s
}
