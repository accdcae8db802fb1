//! Small text formatting helpers for display records.

/// Maximum description length sent to clients.
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Truncate a description to `max_length` characters, appending an
/// ellipsis when anything was cut. Operates on characters, not bytes, so
/// multi-byte text never splits mid-glyph.
pub fn truncate_description(description: &str, max_length: usize) -> String {
    if description.chars().count() <= max_length {
        return description.to_string();
    }
    let truncated: String = description.chars().take(max_length).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(truncate_description("a film", 200), "a film");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        let long = "x".repeat(250);
        let cut = truncate_description(&long, 200);
        assert_eq!(cut.chars().count(), 203);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn exact_length_is_not_cut() {
        let text = "y".repeat(200);
        assert_eq!(truncate_description(&text, 200), text);
    }

    #[test]
    fn multibyte_text_counts_characters() {
        let text = "é".repeat(150);
        assert_eq!(truncate_description(&text, 200), text);
    }
}
