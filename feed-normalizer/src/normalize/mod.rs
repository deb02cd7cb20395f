//! Ordered text-normalization pipelines.
//!
//! Each [`FieldKind`] gets its own ordered sequence of rewrite steps.
//! The order is part of the contract: later steps assume earlier ones
//! have already removed structural noise (arrows, leading route
//! numbers, dashes), so reordering silently corrupts output. Every
//! step is a pure `&str -> String` function, and each full pipeline is
//! idempotent on feed-shaped input, since callers may re-normalize
//! already-cleaned values.
//!
//! Normalization never fails: a step whose pattern doesn't match is a
//! no-op, and partial cleanup is acceptable output.

mod case;
mod glyphs;
mod label;
pub(crate) mod strip;
mod vocab;

use regex::Regex;
use tracing::trace;

use crate::domain::FieldKind;

/// A single named rewrite step in a pipeline.
pub struct Step {
    name: &'static str,
    apply: fn(&str) -> String,
}

impl Step {
    const fn new(name: &'static str, apply: fn(&str) -> String) -> Self {
        Step { name, apply }
    }

    /// The step's name, for logging and order assertions.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// An ordered sequence of rewrite steps for one field kind.
///
/// The step order is fixed at construction and never reordered at
/// call time.
pub struct Pipeline {
    name: &'static str,
    steps: &'static [Step],
}

impl Pipeline {
    /// Run every step in order over the input.
    pub fn run(&self, input: &str) -> String {
        let mut value = input.to_string();
        for step in self.steps {
            let next = (step.apply)(&value);
            if next != value {
                trace!(
                    pipeline = self.name,
                    step = step.name,
                    from = %value,
                    to = %next,
                    "step rewrote field"
                );
            }
            value = next;
        }
        value
    }

    /// The ordered step names.
    pub fn step_names(&self) -> impl Iterator<Item = &'static str> {
        self.steps.iter().map(Step::name)
    }
}

static STOP_NAME: Pipeline = Pipeline {
    name: "stop-name",
    steps: &[
        Step::new("case-words", case::normalize_case),
        Step::new("mc-names", case::fix_mc_case),
        Step::new("glyph-spacing", glyphs::space_ampersand_at),
        Step::new("at-token", glyphs::canonical_at),
        Step::new("bounds", vocab::clean_bounds),
        Step::new("street-types", vocab::expand_street_types),
        Step::new("numbers", vocab::clean_numbers),
        Step::new("label", label::clean_label),
    ],
};

static TRIP_HEADSIGN: Pipeline = Pipeline {
    name: "trip-headsign",
    steps: &[
        Step::new("glyph-spacing", glyphs::space_ampersand_at),
        Step::new("terminal", strip::terminal_suffix),
        Step::new("case-words", case::normalize_case),
        Step::new("route-number", strip::route_number_prefix),
        Step::new("dash-prefix", strip::dash_prefix),
        Step::new("square-typo", glyphs::fix_square_typo),
        Step::new("to-via", strip::keep_to_remove_via),
        Step::new("arrows", strip::arrow_prefix),
        Step::new("and-token", glyphs::canonical_and),
        Step::new("bounds", vocab::clean_bounds),
        Step::new("street-types", vocab::expand_street_types),
        Step::new("slashes", glyphs::clean_slashes),
        Step::new("numbers", vocab::clean_numbers),
        Step::new("label", label::clean_label),
    ],
};

static ROUTE_LONG_NAME: Pipeline = Pipeline {
    name: "route-long-name",
    steps: &[Step::new("route-prefix", strip::route_name_prefix)],
};

static STOP_CODE: Pipeline = Pipeline {
    name: "stop-code",
    steps: &[Step::new("stop-code-prefix", strip::stop_code_prefix)],
};

/// The pipeline for a field kind.
pub fn pipeline(kind: FieldKind) -> &'static Pipeline {
    match kind {
        FieldKind::RouteLongName => &ROUTE_LONG_NAME,
        FieldKind::TripHeadsign => &TRIP_HEADSIGN,
        FieldKind::StopName => &STOP_NAME,
        FieldKind::StopCode => &STOP_CODE,
    }
}

/// Normalize a raw feed field. Total: always returns a string,
/// possibly empty, never an error.
///
/// Re-normalizing an already-normalized value is a no-op for values
/// shaped like the agency's feed. The leading route-number and dash
/// strips run once, so an input outside that shape (a name whose own
/// first word is a bare number, or a multi-dash place name with no
/// branding prefix) can lose a further leading token on re-entry.
pub fn normalize(kind: FieldKind, input: &str) -> String {
    pipeline(kind).run(input)
}

/// Replace until the value stops changing, making rules that consume
/// token-separating whitespace safe to re-enter.
pub(crate) fn replace_to_fixpoint(re: &Regex, input: &str, replacement: &str) -> String {
    let mut value = input.to_string();
    loop {
        let next = re.replace_all(&value, replacement).into_owned();
        if next == value {
            return next;
        }
        value = next;
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Feed-shaped stop-name fragments: the vocabulary that actually
    /// occurs in the agency's stop names, in raw and cleaned forms.
    fn stop_name_strategy() -> impl Strategy<Value = String> {
        let word = prop_oneof![
            Just("main"),
            Just("MAIN"),
            Just("Queen"),
            Just("VICTORIA"),
            Just("Lundy's"),
            Just("st"),
            Just("St"),
            Just("Ave"),
            Just("RD"),
            Just("dr"),
            Just("&"),
            Just("at"),
            Just("@"),
            Just("NF"),
            Just("NW"),
            Just("McLeod"),
            Just("MC"),
            Just("DONALD"),
            Just("Eastbound"),
            Just("(EB)"),
            Just("No. 4"),
            Just("12"),
            Just("1st"),
            Just("Dorchester"),
            Just("portage"),
        ];
        proptest::collection::vec(word, 1..8).prop_map(|words| words.join(" "))
    }

    /// Feed-shaped headsigns: optional route-number or branding
    /// prefix, label words, optional structural suffix.
    fn headsign_strategy() -> impl Strategy<Value = String> {
        let prefix = prop_oneof![
            Just(""),
            Just("101 "),
            Just("203 "),
            Just("Red-"),
            Just("Niagara Falls >> "),
        ];
        let word = prop_oneof![
            Just("Main"),
            Just("main"),
            Just("BROCK"),
            Just("University"),
            Just("St"),
            Just("Ave"),
            Just("and"),
            Just("&"),
            Just("to"),
            Just("via"),
            Just("Oakes/Fallsview"),
            Just("Sqaure"),
            Just("Drummond"),
        ];
        let words = proptest::collection::vec(word, 1..6).prop_map(|words| words.join(" "));
        let suffix = prop_oneof![Just(""), Just(" -> Terminal"), Just(" EB")];
        (prefix, words, suffix).prop_map(|(p, w, s)| format!("{p}{w}{s}"))
    }

    fn route_long_name_strategy() -> impl Strategy<Value = String> {
        let prefix = prop_oneof![Just(""), Just("Rte 101 "), Just("Route 22 ")];
        let word = prop_oneof![Just("Clifton"), Just("Hill"), Just("Lundy's"), Just("Lane")];
        let words = proptest::collection::vec(word, 1..4).prop_map(|words| words.join(" "));
        (prefix, words).prop_map(|(p, w)| format!("{p}{w}"))
    }

    fn stop_code_strategy() -> impl Strategy<Value = String> {
        proptest::string::string_regex("(NF_SU2016_|NFT_WI19_)?[0-9]{1,5}(A|b|in|out|temp10)?")
            .unwrap()
    }

    proptest! {
        /// Normalizing an already-normalized stop name is a no-op.
        #[test]
        fn stop_name_idempotent(s in stop_name_strategy()) {
            let once = normalize(FieldKind::StopName, &s);
            prop_assert_eq!(normalize(FieldKind::StopName, &once), once);
        }

        /// Normalizing an already-normalized headsign is a no-op.
        #[test]
        fn headsign_idempotent(s in headsign_strategy()) {
            let once = normalize(FieldKind::TripHeadsign, &s);
            prop_assert_eq!(normalize(FieldKind::TripHeadsign, &once), once);
        }

        /// Route long names and stop codes are idempotent too.
        #[test]
        fn route_long_name_idempotent(s in route_long_name_strategy()) {
            let once = normalize(FieldKind::RouteLongName, &s);
            prop_assert_eq!(normalize(FieldKind::RouteLongName, &once), once);
        }

        #[test]
        fn stop_code_idempotent(s in stop_code_strategy()) {
            let once = normalize(FieldKind::StopCode, &s);
            prop_assert_eq!(normalize(FieldKind::StopCode, &once), once);
        }

        /// Normalization is deterministic.
        #[test]
        fn deterministic(s in stop_name_strategy()) {
            prop_assert_eq!(
                normalize(FieldKind::StopName, &s),
                normalize(FieldKind::StopName, &s)
            );
        }
    }
}
