//! Structural prefix/suffix strips.
//!
//! These rules remove feed artifacts that carry no label information:
//! leading route numbers, `"route -"` prefixes, `>>` arrows, and the
//! agency's internal stop-code prefixes. They run early in their
//! pipelines so that later label cleanup sees only real words.

use std::sync::LazyLock;

use regex::Regex;

static ROUTE_NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+ ?").expect("valid regex"));

static DASH_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^-]+-").expect("valid regex"));

static ARROW_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.* )?>> ").expect("valid regex"));

static TERMINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*->\s*terminal\s*$").expect("valid regex"));

static VIA_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+via(\s+.*)?$").expect("valid regex"));

static TO_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\s)to\s+").expect("valid regex"));

static ROUTE_NAME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(rte|route) \d+\s*").expect("valid regex"));

static STOP_CODE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^((nf|nft)_[a-z]{1,3}\d{2,4}_?)+([a-z]{3}stop)?(stop|sto)?")
        .expect("valid regex")
});

/// Strip one leading route-number token (digits plus optional space).
pub fn route_number_prefix(input: &str) -> String {
    ROUTE_NUMBER_PREFIX.replace(input, "").into_owned()
}

/// Strip one leading `<anything-without-dash>-` prefix.
pub fn dash_prefix(input: &str) -> String {
    DASH_PREFIX.replace(input, "").into_owned()
}

/// Strip everything through a trailing `>> ` arrow artifact.
pub fn arrow_prefix(input: &str) -> String {
    ARROW_PREFIX.replace(input, "").into_owned()
}

/// Replace a trailing `-> terminal` with the canonical terminal label.
pub fn terminal_suffix(input: &str) -> String {
    TERMINAL_SUFFIX.replace(input, " Bus Terminal").into_owned()
}

/// Collapse "A to B via C" down to "B": keep what follows the last
/// standalone "to", and drop everything from a standalone "via" on.
/// Runs to a fixed point so stacked "to" tokens cannot survive a pass.
pub fn keep_to_remove_via(input: &str) -> String {
    let mut value = input.to_string();
    loop {
        let without_via = VIA_SUFFIX.replace(&value, "");
        let next = match TO_PREFIX.find_iter(&without_via).last() {
            Some(m) => without_via[m.end()..].to_string(),
            None => without_via.into_owned(),
        };
        if next == value {
            return next;
        }
        value = next;
    }
}

/// Strip a leading "Rte NN" / "Route NN" prefix from a route long name.
pub fn route_name_prefix(input: &str) -> String {
    ROUTE_NAME_PREFIX.replace(input, "").into_owned()
}

/// Strip the agency-internal prefix family from a raw stop code
/// (`NF_SU2016_`, `NFT_WI19_`, trailing `Stop`/`Sto` markers, etc).
pub fn stop_code_prefix(input: &str) -> String {
    STOP_CODE_PREFIX.replace(input, "").into_owned()
}
