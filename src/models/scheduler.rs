//! Doubling/halving spaced repetition policy.
//!
//! Each reviewed chord carries an interval in minutes:
//! - A chord reviewed for the first time starts from a baseline interval of 1
//! - Correct answer: the interval doubles
//! - Incorrect answer: the interval halves with floor division, never dropping below 1
//! - The chord becomes due again `interval` minutes after the review
//!
//! There is no ease factor and no maximum interval.

use super::{ChordSymbol, ScheduleRecord};
use chrono::{DateTime, Duration, Utc};

/// Interval assumed for a chord that has never been reviewed
pub const BASELINE_INTERVAL: u32 = 1;

/// Computes the interval following a review.
/// `prior_interval` is `None` when the chord has no record yet.
pub fn next_interval(prior_interval: Option<u32>, correct: bool) -> u32 {
    let interval = prior_interval.unwrap_or(BASELINE_INTERVAL);

    if correct {
        interval.saturating_mul(2)
    } else {
        (interval / 2).max(1)
    }
}

/// Computes the record that replaces the chord's current one after a review at `now`.
pub fn next_state(
    chord_symbol: ChordSymbol,
    prior_interval: Option<u32>,
    correct: bool,
    now: DateTime<Utc>,
) -> ScheduleRecord {
    let interval = next_interval(prior_interval, correct);

    let next_review = now
        .checked_add_signed(Duration::minutes(i64::from(interval)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    ScheduleRecord {
        chord_symbol,
        next_review,
        interval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn cmaj7() -> ChordSymbol {
        "Cmaj7".parse().unwrap()
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_first_review_correct() {
        let next = next_state(cmaj7(), None, true, t0());
        assert_eq!(next.interval, 2);
        assert_eq!(next.next_review, t0() + Duration::minutes(2));
        assert_eq!(next.chord_symbol, cmaj7());
    }

    #[test]
    fn test_first_review_incorrect() {
        let next = next_state(cmaj7(), None, false, t0());
        assert_eq!(next.interval, 1);
        assert_eq!(next.next_review, t0() + Duration::minutes(1));
    }

    #[test]
    fn test_correct_doubles() {
        for i in 1..=500u32 {
            assert_eq!(next_interval(Some(i), true), 2 * i);
        }
    }

    #[test]
    fn test_incorrect_halves_with_floor() {
        for i in 1..=500u32 {
            assert_eq!(next_interval(Some(i), false), std::cmp::max(1, i / 2));
        }
        // Floor, not rounding
        assert_eq!(next_interval(Some(5), false), 2);
        assert_eq!(next_interval(Some(3), false), 1);
    }

    #[test]
    fn test_incorrect_from_four() {
        let next = next_state(cmaj7(), Some(4), false, t0());
        assert_eq!(next.interval, 2);
        assert_eq!(next.next_review, t0() + Duration::minutes(2));
    }

    #[test]
    fn test_interval_floor_at_one() {
        let mut interval = Some(1);
        for _ in 0..10 {
            let next = next_state(cmaj7(), interval, false, t0());
            assert_eq!(next.interval, 1);
            assert_eq!(next.next_review, t0() + Duration::minutes(1));
            interval = Some(next.interval);
        }
    }

    #[test]
    fn test_long_run_sequence() {
        // Correct, correct, wrong, correct, wrong, wrong, wrong
        let answers = [true, true, false, true, false, false, false];
        let expected = [2, 4, 2, 4, 2, 1, 1];

        let mut interval = None;
        for (answer, want) in answers.iter().zip(expected) {
            let next = next_interval(interval, *answer);
            assert_eq!(next, want);
            interval = Some(next);
        }
    }

    #[test]
    fn test_doubling_saturates() {
        assert_eq!(next_interval(Some(u32::MAX), true), u32::MAX);
        let next = next_state(cmaj7(), Some(u32::MAX), true, t0());
        assert!(next.next_review > t0());
    }
}
