//! Wish-list scoring.
//!
//! ## Overview
//!
//! A wish list is an ordered preference sequence; the earlier an entry
//! appears, the more it is wanted. [`score_by_rank`] turns a position into a
//! desirability in `[0, 1]`, and [`combined_score`] averages the two sides of
//! a pairing.
//!
//! ## Exact Arithmetic
//!
//! Scores are `rust_decimal::Decimal` values so that the 3 and 6 decimal
//! place roundings are exact and ties compare equal on every platform.
//! Midpoints round away from zero.
//!
//! ## Examples
//!
//! ```
//! use mentor_match::types::score::{score_by_rank, combined_score};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(score_by_rank(5, Some(0)), Decimal::ONE);
//! assert_eq!(score_by_rank(5, Some(4)), Decimal::new(2, 1)); // 0.2
//! assert_eq!(score_by_rank(5, None), Decimal::ZERO);
//!
//! // (1 + 0.2) / 2
//! assert_eq!(combined_score(Decimal::ONE, Decimal::new(2, 1)), Decimal::new(6, 1));
//! ```

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on a single-side score
pub const RANK_SCORE_DP: u32 = 3;

/// Decimal places kept on a combined (two-sided) score
pub const COMBINED_SCORE_DP: u32 = 6;

/// Fixed-point scale used when a score is encoded as an integer: 10^6
pub const SCORE_SCALE: u64 = 1_000_000;

// ============================================================================
// Scoring
// ============================================================================

/// Round `value` to `dp` decimal places, midpoints away from zero.
#[inline]
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Score a position in a wish list.
///
/// # Arguments
///
/// * `list_len` - Length of the wish list (duplicates included)
/// * `rank` - Zero-based position of the entry, `None` when absent
///
/// # Returns
///
/// `0` when the entry is absent, otherwise `(list_len - rank) / list_len`
/// rounded to 3 decimal places. The first position scores `1` and the last
/// scores `1 / list_len` after rounding, e.g. `0.333` for a list of 3.
///
/// # Limits
///
/// Positions whose ratio is below `0.0005` round to `0`, which happens for
/// the tail of lists longer than 2000 entries. Such an entry is
/// indistinguishable from an absent one, so it never passes the
/// mutual-interest gate.
pub fn score_by_rank(list_len: usize, rank: Option<usize>) -> Decimal {
    let rank = match rank {
        Some(rank) if rank < list_len => rank,
        _ => return Decimal::ZERO,
    };
    let remaining = Decimal::from(list_len - rank);
    let total = Decimal::from(list_len);
    round_to(remaining / total, RANK_SCORE_DP)
}

/// Average two single-side scores, rounded to 6 decimal places.
pub fn combined_score(mentor_score: Decimal, student_score: Decimal) -> Decimal {
    round_to((mentor_score + student_score) / Decimal::TWO, COMBINED_SCORE_DP)
}

// ============================================================================
// Fixed-point conversion
// ============================================================================

/// Convert a score to an integer scaled by [`SCORE_SCALE`].
///
/// Returns `None` for negative or out-of-range values.
///
/// ```
/// use mentor_match::types::score::to_micros;
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_micros(Decimal::new(75, 2)), Some(750_000));
/// assert_eq!(to_micros(Decimal::new(-1, 0)), None);
/// ```
pub fn to_micros(score: Decimal) -> Option<u64> {
    if score.is_sign_negative() {
        return None;
    }
    let scaled = score.checked_mul(Decimal::from(SCORE_SCALE))?;
    scaled.round_dp(0).to_u64()
}

/// Inverse of [`to_micros`].
pub fn from_micros(micros: u64) -> Decimal {
    Decimal::from(micros) / Decimal::from(SCORE_SCALE)
}

// ============================================================================
// Unit Tests
// ============================================================================
