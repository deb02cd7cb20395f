//! Glyph spacing and small-token canonicalization.

use std::sync::LazyLock;

use regex::Regex;

use super::replace_to_fixpoint;

static AND_NO_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S)\s?([&@])\s?(\S)").expect("valid regex"));

static AT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\s)(?:at|@)(\s|$)").expect("valid regex"));

static AND_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\s)(?:and|&)(\s|$)").expect("valid regex"));

static SLASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*/\s*").expect("valid regex"));

static SQUARE_TYPO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\W)sqaure(\W|$)").expect("valid regex"));

/// Insert single spaces around `&` and `@` glyphs that are missing
/// them, so `"Portage&Burnham"` reads `"Portage & Burnham"`.
pub fn space_ampersand_at(input: &str) -> String {
    replace_to_fixpoint(&AND_NO_SPACE, input, "${1} ${2} ${3}")
}

/// Canonicalize a standalone "at"/"@" token to `@`.
pub fn canonical_at(input: &str) -> String {
    replace_to_fixpoint(&AT_TOKEN, input, "${1}@${2}")
}

/// Canonicalize a standalone "and"/"&" token to `&`.
pub fn canonical_and(input: &str) -> String {
    replace_to_fixpoint(&AND_TOKEN, input, "${1}&${2}")
}

/// Normalize slash-separated alternatives to a single ` / ` separator.
pub fn clean_slashes(input: &str) -> String {
    SLASH.replace_all(input, " / ").into_owned()
}

/// Correct the feed's recurring misspelling of "Square".
pub fn fix_square_typo(input: &str) -> String {
    replace_to_fixpoint(&SQUARE_TYPO, input, "${1}Square${2}")
}
