use chrono::{Datelike, NaiveDate, Weekday};

/// Number of picks in a draft round, one per team
pub const PICKS_PER_ROUND: i32 = 32;

/// Round a pick belongs to, picks are numbered from 1 across the whole draft
pub fn calculate_draft_round(pick_number: i32) -> i32 {
    // Ceiling division, pick 32 is the last pick of round 1
    pick_number
        .max(1)
        .unsigned_abs()
        .div_ceil(PICKS_PER_ROUND.unsigned_abs()) as i32
}

/// First Monday of September in `year`, when drafted players join their team
pub fn september_first_monday(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1)
}

/// First Monday of September of the year `today` falls in
pub fn next_september_monday(today: NaiveDate) -> Option<NaiveDate> {
    september_first_monday(today.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect picks 1..=32 in round 1 and 33 to start round 2
    #[test]
    fn calculates_round_from_pick_number() {
        assert_eq!(calculate_draft_round(1), 1);
        assert_eq!(calculate_draft_round(32), 1);
        assert_eq!(calculate_draft_round(33), 2);
        assert_eq!(calculate_draft_round(257), 9);
    }

    /// Expect non-positive pick numbers to fall in round 1
    #[test]
    fn clamps_invalid_pick_numbers() {
        assert_eq!(calculate_draft_round(0), 1);
        assert_eq!(calculate_draft_round(-4), 1);
        assert_eq!(calculate_draft_round(i32::MIN), 1);
    }

    /// Expect the largest pick numbers not to overflow
    #[test]
    fn handles_largest_pick_numbers() {
        assert_eq!(calculate_draft_round(i32::MAX), 67_108_864);
        assert_eq!(calculate_draft_round(i32::MAX - 30), 67_108_864);
        assert_eq!(calculate_draft_round(i32::MAX - 31), 67_108_863);
    }

    /// Expect the first Monday when September 1st is a Sunday, a Monday, and a Tuesday
    #[test]
    fn finds_first_monday_of_september() {
        // 2024-09-01 is a Sunday
        assert_eq!(
            september_first_monday(2024),
            NaiveDate::from_ymd_opt(2024, 9, 2)
        );
        // 2025-09-01 is a Monday
        assert_eq!(
            september_first_monday(2025),
            NaiveDate::from_ymd_opt(2025, 9, 1)
        );
        // 2026-09-01 is a Tuesday
        assert_eq!(
            september_first_monday(2026),
            NaiveDate::from_ymd_opt(2026, 9, 7)
        );
    }

    /// Expect the current year's September Monday regardless of today's month
    #[test]
    fn uses_current_year() {
        let today = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();

        assert_eq!(
            next_september_monday(today),
            NaiveDate::from_ymd_opt(2025, 9, 1)
        );
    }
}
