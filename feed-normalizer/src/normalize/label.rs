//! Final label cleanup.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static SPACE_BEFORE_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+,").expect("valid regex"));

/// Punctuation that has no business at the edges of a label once the
/// structural strips have run.
const EDGE_PUNCTUATION: &[char] = &[' ', '-', ',', ';', ':'];

/// Final cleanup applied to every label: collapse whitespace, trim,
/// drop stray edge punctuation, and capitalize word-initial letters.
///
/// Capitalization only touches letters that start a whitespace (or
/// parenthesis/slash) delimited word, so tokens like `"1st"` and
/// already-cased words like `"McDonald"` pass through unchanged.
pub fn clean_label(input: &str) -> String {
    let collapsed = WHITESPACE.replace_all(input, " ");
    let collapsed = SPACE_BEFORE_COMMA.replace_all(&collapsed, ",");
    let trimmed = collapsed.trim_matches(EDGE_PUNCTUATION);
    capitalize_words(trimmed)
}

fn capitalize_words(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev: Option<char> = None;
    for c in input.chars() {
        let at_word_start = matches!(prev, None | Some(' ') | Some('(') | Some('/'));
        if at_word_start && c.is_ascii_lowercase() {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}
