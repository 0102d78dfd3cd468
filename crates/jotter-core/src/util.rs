//! Shared utility functions used across multiple modules.

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Check if a string starts with `http://` or `https://`.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Truncate text to at most 180 characters for error messages.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

/// Current Unix timestamp in seconds.
pub fn unix_timestamp_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Truncate `text` to `limit` characters, appending `...` when cut.
///
/// Empty text renders as `N/A`.
pub fn display_text(text: &str, limit: usize) -> String {
    if text.is_empty() {
        return "N/A".to_string();
    }
    if text.chars().count() > limit {
        let truncated: String = text.chars().take(limit).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

/// Fold text for loose matching: drops dots and whitespace, lowercases.
pub fn normalize_search_text(text: &str) -> String {
    text.chars()
        .filter(|ch| *ch != '.' && !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_option_rejects_empty() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
    }

    #[test]
    fn normalize_text_option_trims_value() {
        assert_eq!(
            normalize_text_option(Some(" https://example.com ".to_string())),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn is_http_url_accepts_valid_schemes() {
        assert!(is_http_url("http://localhost"));
        assert!(is_http_url("https://example.com"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("example.com"));
    }

    #[test]
    fn display_text_truncates_long_values() {
        assert_eq!(display_text("hello world", 5), "hello...");
        assert_eq!(display_text("short", 50), "short");
        assert_eq!(display_text("", 50), "N/A");
    }

    #[test]
    fn normalize_search_text_drops_dots_and_spaces() {
        assert_eq!(normalize_search_text("Dr. John  Smith"), "drjohnsmith");
        assert_eq!(normalize_search_text("a.b.c"), "abc");
    }
}
