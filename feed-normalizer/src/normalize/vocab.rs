//! Feed vocabulary normalization: bound tokens, street types, numbers.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::replace_to_fixpoint;

/// Directional-bound word forms and their canonical tokens.
static BOUNDS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        ("eastbound|east bound|eb", "EB"),
        ("westbound|west bound|wb", "WB"),
        ("northbound|north bound|nb", "NB"),
        ("southbound|south bound|sb", "SB"),
    ]
    .into_iter()
    .map(|(forms, token)| (bounded(forms), token))
    .collect()
});

/// This feed's most common street-type abbreviations.
static STREET_TYPES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        ("st", "Street"),
        ("ave|av", "Avenue"),
        ("rd", "Road"),
        ("dr", "Drive"),
        ("blvd", "Boulevard"),
        ("cres|cr", "Crescent"),
        ("crt|ct", "Court"),
        ("pl", "Place"),
        ("pkwy|pky", "Parkway"),
        ("hwy", "Highway"),
        ("ln", "Lane"),
        ("sq", "Square"),
        ("terr", "Terrace"),
        ("trl", "Trail"),
        ("cir", "Circle"),
        ("gt", "Gate"),
    ]
    .into_iter()
    .map(|(forms, expanded)| (abbreviated(forms), expanded))
    .collect()
});

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)((?i:st|nd|rd|th))\b").expect("valid regex"));

static NUMBER_SIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\s)no\.?\s?(\d+)").expect("valid regex"));

/// A whole-word pattern for bound forms, tolerating parentheses.
fn bounded(forms: &str) -> Regex {
    Regex::new(&format!(r"(?i)(^|\s)\(?(?:{forms})\)?($|[\s,])")).expect("valid regex")
}

/// A whole-word pattern for a street-type abbreviation with an
/// optional trailing period.
fn abbreviated(forms: &str) -> Regex {
    Regex::new(&format!(r"(?i)(^|\s)(?:{forms})\.?($|[\s,])")).expect("valid regex")
}

/// Normalize directional-bound words to canonical `EB`/`WB`/`NB`/`SB`
/// tokens.
pub fn clean_bounds(input: &str) -> String {
    let mut value = input.to_string();
    for (pattern, token) in BOUNDS.iter() {
        value = replace_to_fixpoint(pattern, &value, &format!("${{1}}{token}${{2}}"));
    }
    value
}

/// Expand street-type abbreviations to their full words.
pub fn expand_street_types(input: &str) -> String {
    let mut value = input.to_string();
    for (pattern, expanded) in STREET_TYPES.iter() {
        value = replace_to_fixpoint(pattern, &value, &format!("${{1}}{expanded}${{2}}"));
    }
    value
}

/// Normalize embedded numeric tokens: lowercase ordinal suffixes
/// (`"1St"` → `"1st"`) and `"No. 12"` forms (→ `"#12"`).
pub fn clean_numbers(input: &str) -> String {
    let value = ORDINAL.replace_all(input, |caps: &Captures<'_>| {
        format!("{}{}", &caps[1], caps[2].to_ascii_lowercase())
    });
    NUMBER_SIGN.replace_all(&value, "${1}#${2}").into_owned()
}
