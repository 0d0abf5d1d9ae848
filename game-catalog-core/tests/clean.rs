use game_catalog_core::{clean_cell, normalize_name};

#[test]
fn plain_value_is_trimmed() {
    assert_eq!(clean_cell(Some("  Snake  ")), "Snake");
}

#[test]
fn empty_and_missing_cells() {
    assert_eq!(clean_cell(None), "");
    assert_eq!(clean_cell(Some("")), "");
    assert_eq!(clean_cell(Some("   \t ")), "");
}

#[test]
fn wrapping_double_quotes_removed() {
    assert_eq!(clean_cell(Some("\"Puzzle\"")), "Puzzle");
    assert_eq!(clean_cell(Some("\"  Puzzle  \"")), "Puzzle");
}

#[test]
fn wrapping_single_quotes_removed() {
    assert_eq!(clean_cell(Some("'Action'")), "Action");
}

#[test]
fn curly_quotes_removed() {
    assert_eq!(clean_cell(Some("\u{201C}Racing\u{201D}")), "Racing");
    assert_eq!(clean_cell(Some("\u{2018}Racing\u{2019}")), "Racing");
}

#[test]
fn lone_leading_quote_removed() {
    assert_eq!(clean_cell(Some("'Puzzle")), "Puzzle");
    assert_eq!(clean_cell(Some("\"Puzzle")), "Puzzle");
    assert_eq!(clean_cell(Some("'  0123")), "0123");
}

#[test]
fn trailing_quote_only_is_kept() {
    assert_eq!(clean_cell(Some("Puzzle'")), "Puzzle'");
}

#[test]
fn mismatched_curly_quotes_kept() {
    assert_eq!(clean_cell(Some("\u{201D}Odd\u{201C}")), "\u{201D}Odd\u{201C}");
}

#[test]
fn inner_quotes_untouched() {
    assert_eq!(
        clean_cell(Some("Say \"hi\" to Bob")),
        "Say \"hi\" to Bob"
    );
}

#[test]
fn non_ascii_text_survives() {
    assert_eq!(clean_cell(Some(" “俄罗斯方块” ")), "俄罗斯方块");
}

#[test]
fn name_variants_share_a_key() {
    let a = normalize_name(Some("Foo Bar"));
    let b = normalize_name(Some(" foo   bar "));
    let c = normalize_name(Some("FOO BAR"));
    assert_eq!(a, "foo bar");
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn name_key_cleans_quotes_first() {
    assert_eq!(normalize_name(Some("\"Foo\tBar\"")), "foo bar");
    assert_eq!(normalize_name(Some("'Foo")), "foo");
}

#[test]
fn blank_names_normalize_to_empty() {
    assert_eq!(normalize_name(None), "");
    assert_eq!(normalize_name(Some("  ")), "");
    assert_eq!(normalize_name(Some("\"  \"")), "");
}
