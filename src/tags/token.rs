//! Filter tokens
//!
//! A token is the string `"<category>:<value>"`. Tokens are the unit exchanged
//! between the filter dropdown and the row predicate, and the identity key of
//! every selectable option.

/// Separator between category and value inside a token
pub const TOKEN_SEPARATOR: char = ':';

/// Separator between tokens in a row tag field or a definition string
pub const ENTRY_SEPARATOR: char = ';';

/// Build a token from a category and a value
///
/// # Examples
///
/// ```
/// use adlens::tags::token;
///
/// assert_eq!(token("Concept", "UGC"), "Concept:UGC");
/// ```
#[must_use]
pub fn token(category: &str, value: &str) -> String {
    format!("{category}{TOKEN_SEPARATOR}{value}")
}

/// Split a token into trimmed `(category, value)` halves at the first `:`
///
/// Returns `None` when the token has no separator.
#[must_use]
pub fn split_token(token: &str) -> Option<(&str, &str)> {
    token
        .split_once(TOKEN_SEPARATOR)
        .map(|(category, value)| (category.trim(), value.trim()))
}

/// Normalize a token so that `" Concept : UGC "` and `"Concept:UGC"` compare equal
///
/// Tokens without a separator are only trimmed.
#[must_use]
pub fn normalize_token(raw: &str) -> String {
    split_token(raw).map_or_else(
        || raw.trim().to_string(),
        |(category, value)| token(category, value),
    )
}

/// Category part of a token (the whole trimmed token if there is no separator)
#[must_use]
pub fn category_of(token: &str) -> &str {
    split_token(token).map_or_else(|| token.trim(), |(category, _)| category)
}

/// Iterate the non-empty segments of a `;`-separated row tag field
pub fn segments(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(ENTRY_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip_parts() {
        let t = token("Audio - Type", "voiceover");
        assert_eq!(t, "Audio - Type:voiceover");
        assert_eq!(split_token(&t), Some(("Audio - Type", "voiceover")));
    }

    #[test]
    fn test_split_token_keeps_later_colons_in_value() {
        assert_eq!(split_token("Time: 10:30"), Some(("Time", "10:30")));
    }

    #[test]
    fn test_split_token_without_separator() {
        assert_eq!(split_token("nocolon"), None);
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token(" Concept : UGC "), "Concept:UGC");
        assert_eq!(normalize_token("  bare "), "bare");
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("End card elements - CTA:download"), "End card elements - CTA");
        assert_eq!(category_of("orphan"), "orphan");
    }

    #[test]
    fn test_segments_skip_blanks() {
        let parts: Vec<&str> = segments("A:1; ;B:2;").collect();
        assert_eq!(parts, vec!["A:1", "B:2"]);
    }
}
