//! Cleanup of spreadsheet cell text.
//!
//! Spreadsheet exports wrap cells in quotes inconsistently: sometimes a full
//! pair (`"Puzzle"`, `“Puzzle”`), sometimes only a leading `'` that Excel
//! adds to keep a value from being read as a formula or number. These
//! helpers undo both so the stored text is what the author typed.

/// Quote pairs stripped from around a cell value. Only one layer is removed.
const QUOTE_PAIRS: [(char, char); 4] = [
    ('"', '"'),
    ('\'', '\''),
    ('\u{201C}', '\u{201D}'),
    ('\u{2018}', '\u{2019}'),
];

/// Clean a raw cell value.
///
/// Trims surrounding whitespace, removes one layer of matching wrapping
/// quotes (straight or curly), then drops a lone leading `'` or `"` that has
/// no matching trailing quote. `None` and blank input yield an empty string.
///
/// # Examples
///
/// ```
/// use game_catalog_core::clean_cell;
///
/// assert_eq!(clean_cell(Some("  \"Puzzle\" ")), "Puzzle");
/// assert_eq!(clean_cell(Some("'Puzzle")), "Puzzle");
/// assert_eq!(clean_cell(Some("“Match 3”")), "Match 3");
/// assert_eq!(clean_cell(None), "");
/// ```
pub fn clean_cell(raw: Option<&str>) -> String {
    let mut s = match raw {
        Some(v) => v.trim(),
        None => return String::new(),
    };
    if s.is_empty() {
        return String::new();
    }

    for (open, close) in QUOTE_PAIRS {
        if let Some(inner) = strip_pair(s, open, close) {
            s = inner.trim();
            break;
        }
    }

    // Leading-only quote left behind by spreadsheet exports
    for quote in ['\'', '"'] {
        if s.starts_with(quote) && !s.ends_with(quote) {
            s = s[quote.len_utf8()..].trim_start();
        }
    }

    s.to_string()
}

/// Strip `open`/`close` from both ends when both are present on a value of
/// at least two characters.
fn strip_pair(s: &str, open: char, close: char) -> Option<&str> {
    if s.chars().count() < 2 {
        return None;
    }
    s.strip_prefix(open)?.strip_suffix(close)
}

/// Build the dedup key for a game name.
///
/// Applies [`clean_cell`], collapses whitespace runs to a single space and
/// lower-cases the result. Only used for comparison; records keep the
/// cleaned, case-preserving name.
///
/// # Examples
///
/// ```
/// use game_catalog_core::normalize_name;
///
/// assert_eq!(normalize_name(Some(" foo   bar ")), "foo bar");
/// assert_eq!(normalize_name(Some("FOO BAR")), "foo bar");
/// ```
pub fn normalize_name(raw: Option<&str>) -> String {
    let cleaned = clean_cell(raw);
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_quote_is_kept() {
        // Starts and ends with the same quote, so it is neither a pair nor
        // a leading-only quote.
        assert_eq!(clean_cell(Some("\"")), "\"");
        assert_eq!(clean_cell(Some(" ' ")), "'");
    }

    #[test]
    fn test_only_one_layer_removed() {
        assert_eq!(clean_cell(Some("\"'Puzzle'\"")), "'Puzzle'");
    }

    #[test]
    fn test_strip_pair_mismatched() {
        assert_eq!(strip_pair("\"abc'", '"', '"'), None);
        assert_eq!(strip_pair("\u{201C}abc\u{201D}", '\u{201C}', '\u{201D}'), Some("abc"));
    }
}
