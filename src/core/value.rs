//! Exact rational values carried by markers.
//!
//! Marker values and move totals are [`Fraction`]s: reduced ratios of `i64`
//! with exact arithmetic, so comparing a total against the goal never
//! suffers from rounding.
//!
//! ## Result Sequence
//!
//! Moving onto a cell of value `c` perturbs a marker's value `n/d` into up
//! to `c + 1` candidates, for `k` in `0..=c`:
//!
//! ```text
//! ((n + k) mod 10) / ((d + c - k) mod 10)
//! ```
//!
//! Pairs whose denominator is zero are skipped.
//!
//! ```
//! use sagids::core::{Fraction, ResultSequence};
//!
//! let value = Fraction::new(1, 9);
//! let results: Vec<_> = ResultSequence::new(value, 1).collect();
//! // k = 0: 1/0 is skipped, k = 1: 2/9
//! assert_eq!(results, vec![Fraction::new(2, 9)]);
//! ```

use num_rational::Ratio;

/// Exact rational number used for marker values, results and totals.
pub type Fraction = Ratio<i64>;

/// Modulus applied to numerators and denominators of candidate results.
pub const RESULT_MODULUS: i64 = 10;

/// Build a fraction, or `None` when the denominator is zero.
#[must_use]
pub fn checked_fraction(numer: i64, denom: i64) -> Option<Fraction> {
    if denom == 0 {
        None
    } else {
        Some(Fraction::new(numer, denom))
    }
}

/// Parse a fraction from `"n/d"` or `"n"`.
///
/// ```
/// use sagids::core::{parse_fraction, Fraction};
///
/// assert_eq!(parse_fraction("3/16"), Some(Fraction::new(3, 16)));
/// assert_eq!(parse_fraction(" 2 "), Some(Fraction::from_integer(2)));
/// assert_eq!(parse_fraction("1/0"), None);
/// ```
#[must_use]
pub fn parse_fraction(text: &str) -> Option<Fraction> {
    let text = text.trim();
    match text.split_once('/') {
        Some((numer, denom)) => {
            let numer = numer.trim().parse().ok()?;
            let denom = denom.trim().parse().ok()?;
            checked_fraction(numer, denom)
        }
        None => text.parse().ok().map(Fraction::from_integer),
    }
}

/// Candidate results for moving a marker of a given value onto a cell.
///
/// Finite and non-restartable; yields at most `cell_value + 1` fractions in
/// generation order, duplicates included.
#[derive(Clone, Debug)]
pub struct ResultSequence {
    numer: i64,
    denom: i64,
    cell_value: i64,
    k: i64,
}

impl ResultSequence {
    /// Start the sequence for `value` moving onto a cell worth `cell_value`.
    #[must_use]
    pub fn new(value: Fraction, cell_value: i64) -> Self {
        let value = value.reduced();
        // Only the residues matter, and folding them first keeps `n + k` in range
        Self {
            numer: value.numer().rem_euclid(RESULT_MODULUS),
            denom: value.denom().rem_euclid(RESULT_MODULUS),
            cell_value,
            k: 0,
        }
    }
}

impl Iterator for ResultSequence {
    type Item = Fraction;

    fn next(&mut self) -> Option<Fraction> {
        while self.k <= self.cell_value {
            let k = self.k;
            self.k += 1;

            let numer = (self.numer + k).rem_euclid(RESULT_MODULUS);
            let denom = (self.denom + (self.cell_value - k)).rem_euclid(RESULT_MODULUS);
            if let Some(result) = checked_fraction(numer, denom) {
                return Some(result);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.cell_value - self.k + 1).max(0) as usize;
        (0, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_fraction() {
        assert_eq!(checked_fraction(3, 6), Some(Fraction::new(1, 2)));
        assert_eq!(checked_fraction(0, 9), Some(Fraction::from_integer(0)));
        assert_eq!(checked_fraction(5, 0), None);
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_fraction("3/16"), Some(Fraction::new(3, 16)));
        assert_eq!(parse_fraction("4 / 8"), Some(Fraction::new(1, 2)));
        assert_eq!(parse_fraction("-1/9"), Some(Fraction::new(-1, 9)));
        assert_eq!(parse_fraction("7"), Some(Fraction::from_integer(7)));
        assert_eq!(parse_fraction("x/2"), None);
        assert_eq!(parse_fraction("2/"), None);
        assert_eq!(parse_fraction(""), None);
    }

    #[test]
    fn test_zero_value_cell() {
        // 0/9 reduces to 0/1; a cell worth 0 yields a single candidate
        let results: Vec<_> = ResultSequence::new(Fraction::new(0, 9), 0).collect();
        assert_eq!(results, vec![Fraction::new(0, 9)]);
    }

    #[test]
    fn test_sequence_for_cell_worth_seven() {
        // 2/9 onto a 7 cell: numerators 2..=9, denominators (9 + 7 - k) mod 10
        let results: Vec<_> = ResultSequence::new(Fraction::new(2, 9), 7).collect();
        let expected: Vec<_> = [(2, 6), (3, 5), (4, 4), (5, 3), (6, 2), (7, 1), (9, 9)]
            .iter()
            .map(|&(n, d)| Fraction::new(n, d))
            .collect();
        // k = 7 gives 9/9, k = 6 gives 8/0 which is skipped
        assert_eq!(results.len(), 7);
        assert_eq!(results, expected);
    }

    #[test]
    fn test_uses_reduced_value() {
        // 3/9 is 1/3: denominators start from 3, not 9
        let results: Vec<_> = ResultSequence::new(Fraction::new(3, 9), 1).collect();
        assert_eq!(results, vec![Fraction::new(1, 4), Fraction::new(2, 3)]);
    }

    #[test]
    fn test_negative_values_wrap() {
        let results: Vec<_> = ResultSequence::new(Fraction::new(-1, 3), 0).collect();
        assert_eq!(results, vec![Fraction::new(9, 3)]);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        // i64::MAX ends in 7: 7/1 onto a 1 cell gives 7/2 then 8/1
        let results: Vec<_> = ResultSequence::new(Fraction::from_integer(i64::MAX), 1).collect();
        assert_eq!(results, vec![Fraction::new(7, 2), Fraction::from_integer(8)]);
    }

    #[test]
    fn test_size_hint_bounds_length() {
        let seq = ResultSequence::new(Fraction::new(5, 9), 5);
        let (_, upper) = seq.size_hint();
        assert_eq!(upper, Some(6));
        assert!(seq.count() <= 6);
    }
}
