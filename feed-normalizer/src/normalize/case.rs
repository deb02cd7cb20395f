//! Word-by-word case normalization.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Acronyms that must stay fully capitalized wherever they appear in a
/// label. `NF` is the agency's own abbreviation, `CB` and `LL` are
/// area abbreviations, `NW`/`SW`/`NE`/`SE` are compass directions, and
/// `EB`/`WB`/`NB`/`SB` are the canonical bound tokens, which survive
/// re-normalization of an already-cleaned name.
const IGNORE_WORDS: &[&str] = &[
    "NF", "CB", "LL", "NW", "SW", "NE", "SE", "EB", "WB", "NB", "SB",
];

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z']*").expect("valid regex"));

static MC_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[Mm][Cc] ?([A-Za-z][A-Za-z']*)").expect("valid regex"));

/// Title-case fully uppercase words.
///
/// Words on the acronym ignore-list and anything already mixed-case
/// or lowercase are left alone; the final label cleanup capitalizes
/// word-initial letters later in the pipeline.
pub fn normalize_case(input: &str) -> String {
    WORD.replace_all(input, |caps: &Captures<'_>| {
        let word = &caps[0];
        if !is_shouting(word) || IGNORE_WORDS.contains(&word) {
            return word.to_string();
        }
        title_case(word)
    })
    .into_owned()
}

/// Normalize "MC DONALD" / "Mcdonald" family surname forms to
/// "McDonald" forms, joining a split "Mc" onto the following word.
///
/// Words on the acronym ignore-list are never joined: `"Mc EB"` is a
/// surname followed by a bound token, not a split "McEB".
pub fn fix_mc_case(input: &str) -> String {
    MC_NAME
        .replace_all(input, |caps: &Captures<'_>| {
            let word = &caps[1];
            if IGNORE_WORDS.contains(&word) {
                return caps[0].to_string();
            }
            // the capture is at least one ASCII letter
            let (first, rest) = word.split_at(1);
            format!("Mc{}{rest}", first.to_ascii_uppercase())
        })
        .into_owned()
}

/// A word is shouting when it has at least two uppercase letters and
/// no lowercase ones.
fn is_shouting(word: &str) -> bool {
    word.chars().filter(|c| c.is_ascii_uppercase()).count() >= 2
        && !word.chars().any(|c| c.is_ascii_lowercase())
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}
