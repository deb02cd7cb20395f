//! Stop-ID derivation.
//!
//! The feed's stop codes are heterogeneous: most are plain digit
//! strings, some carry a single-letter or `in`/`out`/`temp10` suffix,
//! and a handful are irregular literals. [`derive_stop_id`] maps all
//! of them into disjoint integer ranges as a pure function of the
//! code, so stop IDs stay stable across feed updates without a stored
//! mapping table. An unrecognized code is a data-quality bug to fix at
//! the source: it is an error, never a silent fallback.

mod exceptions;

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::domain::{
    BUCKET_A, BUCKET_B, BUCKET_C, BUCKET_IN, BUCKET_OUT, BUCKET_TEMP10, StopId,
};
use crate::normalize::strip;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Error returned when no derivation rule applies to a stop code.
///
/// These are fatal for the run being processed: a silently defaulted
/// ID would collide with a real one downstream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StopIdError {
    /// The code contains no digits to derive an ID from.
    #[error("stop code {code:?} has no digits to derive an ID from")]
    NoDigits { code: String },

    /// The code's non-digit suffix matches no known bucket.
    #[error("stop code {code:?} has an unrecognized suffix")]
    UnknownSuffix { code: String },

    /// The digit run is too large for the ID space.
    #[error("stop code {code:?} produces an ID outside the representable range")]
    OutOfRange { code: String },
}

/// Derive the stop ID for a raw stop code, falling back to the raw
/// stop identifier when the code is empty or the literal `"0"`.
///
/// All-digit codes map to their literal value. Otherwise the exception
/// table is consulted, then the first digit run is re-encoded into the
/// bucket reserved for the code's suffix family.
///
/// # Examples
///
/// ```
/// use feed_normalizer::stops::derive_stop_id;
///
/// assert_eq!(derive_stop_id("1234", "ignored").unwrap().get(), 1234);
/// assert_eq!(derive_stop_id("12A", "ignored").unwrap().get(), 100_012);
/// assert_eq!(derive_stop_id("", "8001").unwrap().get(), 8001);
/// assert!(derive_stop_id("99xyz", "ignored").is_err());
/// ```
pub fn derive_stop_id(stop_code: &str, stop_id: &str) -> Result<StopId, StopIdError> {
    let raw = if stop_code.is_empty() || stop_code == "0" {
        stop_id
    } else {
        stop_code
    };
    let code = strip::stop_code_prefix(raw);

    if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
        let id = code
            .parse::<u32>()
            .map_err(|_| StopIdError::OutOfRange { code: code.clone() })?;
        return Ok(StopId::new(id));
    }

    if let Some(id) = exceptions::lookup(&code) {
        return Ok(id);
    }

    let digits = match DIGITS.find(&code) {
        Some(run) => run
            .as_str()
            .parse::<u32>()
            .map_err(|_| StopIdError::OutOfRange { code: code.clone() })?,
        None => return Err(StopIdError::NoDigits { code }),
    };

    let base = bucket_for_suffix(&code).ok_or_else(|| StopIdError::UnknownSuffix {
        code: code.clone(),
    })?;
    trace!(code = %code, base, digits, "bucketed stop code");

    base.checked_add(digits)
        .map(StopId::new)
        .ok_or(StopIdError::OutOfRange { code })
}

/// Classify a code's suffix family into its bucket base offset.
///
/// The single-letter families sit 100 000 apart; the `in`/`out` and
/// `temp10` families belong to a different code generation and sit in
/// far ranges. The spacing is what guarantees two different families
/// can never produce the same ID for digit values seen in practice.
fn bucket_for_suffix(code: &str) -> Option<u32> {
    let lower = code.to_lowercase();
    if lower.ends_with("temp10") {
        Some(BUCKET_TEMP10)
    } else if lower.ends_with("out") {
        Some(BUCKET_OUT)
    } else if lower.ends_with("in") {
        Some(BUCKET_IN)
    } else if lower.ends_with('a') {
        Some(BUCKET_A)
    } else if lower.ends_with('b') {
        Some(BUCKET_B)
    } else if lower.ends_with('c') {
        Some(BUCKET_C)
    } else {
        None
    }
}
