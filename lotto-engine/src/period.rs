//! Twice-monthly draw calendar: draws settle on the 16th and on the 1st.

use crate::{DrawError, Result};
use chrono::{Datelike, NaiveDate};

/// Days before this one belong to the mid-month draw.
pub const CUTOVER_DAY: u32 = 16;

/// Settlement date of the next draw as seen from `today`.
///
/// Before the 16th that is the 16th of the same month; from the 16th onward
/// it is the 1st of the following month.
pub fn next_draw_date(today: NaiveDate) -> Result<NaiveDate> {
    if today.day() < CUTOVER_DAY {
        return today
            .with_day(CUTOVER_DAY)
            .ok_or(DrawError::CalendarOverflow(today));
    }

    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1).ok_or(DrawError::CalendarOverflow(today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_half_of_month() {
        assert_eq!(next_draw_date(date(2024, 3, 1)).unwrap(), date(2024, 3, 16));
        assert_eq!(next_draw_date(date(2024, 3, 15)).unwrap(), date(2024, 3, 16));
    }

    #[test]
    fn test_cutover_day_rolls_to_next_month() {
        assert_eq!(next_draw_date(date(2024, 3, 16)).unwrap(), date(2024, 4, 1));
        assert_eq!(next_draw_date(date(2024, 3, 31)).unwrap(), date(2024, 4, 1));
        assert_eq!(next_draw_date(date(2024, 2, 29)).unwrap(), date(2024, 3, 1));
    }

    #[test]
    fn test_december_rolls_year() {
        assert_eq!(next_draw_date(date(2024, 12, 16)).unwrap(), date(2025, 1, 1));
        assert_eq!(next_draw_date(date(2024, 12, 31)).unwrap(), date(2025, 1, 1));
        assert_eq!(next_draw_date(date(2024, 12, 15)).unwrap(), date(2024, 12, 16));
    }

    #[test]
    fn test_end_of_calendar() {
        let last = NaiveDate::MAX;
        assert!(matches!(
            next_draw_date(last),
            Err(DrawError::CalendarOverflow(_))
        ));
    }
}
