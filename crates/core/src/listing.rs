//! Listing parameters shared by the character, line and movie listings:
//! pagination bounds, sort keys and the substring filter.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Page size used when the request does not name one.
pub const DEFAULT_LIMIT: i64 = 50;

/// Smallest accepted page size.
pub const MIN_LIMIT: i64 = 1;

/// Largest accepted page size.
pub const MAX_LIMIT: i64 = 250;

/// Number of characters listed in a movie lookup.
pub const MAX_TOP_CHARACTERS: i64 = 5;

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// Sort orders for `GET /characters/`. Ties are broken by character id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterSort {
    /// Character name, A to Z.
    #[default]
    Character,
    /// Title of the character's movie, A to Z.
    Movie,
    /// Number of lines spoken, highest first.
    NumberOfLines,
}

/// Sort orders for `GET /movies/`. Ties are broken by movie id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieSort {
    #[default]
    MovieTitle,
    /// Release year, earliest first.
    Year,
    /// IMDB rating, highest first. Unrated movies come last.
    Rating,
}

/// Sort orders for `GET /lines/`. Ties are broken by line id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSort {
    /// Line id.
    #[default]
    Line,
    /// Title of the movie the line appears in, A to Z.
    MovieTitle,
    /// Conversation id, then position inside the conversation.
    Conversation,
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Escape character used in the `ILIKE ... ESCAPE` clause of listing queries.
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` pattern matching `filter` anywhere in the column.
///
/// `%`, `_` and the escape character itself are escaped so user input is
/// matched literally, whitespace included. An absent or empty filter yields
/// `None`, meaning the listing is unfiltered.
///
/// ```
/// use screenplay_core::listing::contains_pattern;
/// assert_eq!(contains_pattern(Some("bob")), Some("%bob%".to_string()));
/// assert_eq!(contains_pattern(Some("50%")), Some("%50\\%%".to_string()));
/// assert_eq!(contains_pattern(Some("  ")), Some("%  %".to_string()));
/// assert_eq!(contains_pattern(Some("")), None);
/// ```
pub fn contains_pattern(filter: Option<&str>) -> Option<String> {
    let filter = filter.filter(|f| !f.is_empty())?;

    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for c in filter.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_wraps_plain_text() {
        assert_eq!(contains_pattern(Some("father")), Some("%father%".into()));
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern(Some("a_b")), Some("%a\\_b%".into()));
        assert_eq!(contains_pattern(Some("a\\b")), Some("%a\\\\b%".into()));
    }

    #[test]
    fn contains_pattern_keeps_inner_spaces() {
        assert_eq!(
            contains_pattern(Some("my father")),
            Some("%my father%".into())
        );
    }

    #[test]
    fn contains_pattern_none_for_missing_or_empty() {
        assert_eq!(contains_pattern(None), None);
        assert_eq!(contains_pattern(Some("")), None);
    }

    #[test]
    fn contains_pattern_keeps_whitespace_only_filter() {
        assert_eq!(contains_pattern(Some("  ")), Some("%  %".into()));
    }

    #[test]
    fn default_sorts() {
        assert_eq!(CharacterSort::default(), CharacterSort::Character);
        assert_eq!(MovieSort::default(), MovieSort::MovieTitle);
        assert_eq!(LineSort::default(), LineSort::Line);
    }

    #[test]
    fn default_limit_within_bounds() {
        assert!((MIN_LIMIT..=MAX_LIMIT).contains(&DEFAULT_LIMIT));
    }
}
