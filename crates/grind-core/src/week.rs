use chrono::NaiveDate;

/// Week number for `today` given the roadmap `start` date.
///
/// `floor(elapsed_days / 7) + 1`, floored at 1 — dates before the start
/// date still resolve to week 1. Pure and total over valid dates.
pub fn week_for(today: NaiveDate, start: NaiveDate) -> u32 {
    let days = (today - start).num_days();
    let week = days.div_euclid(7) + 1;
    week.max(1) as u32
}

/// Derived month number: four weeks per month, integer division.
pub fn month_for_week(week: u32) -> u32 {
    (week - 1) / 4 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn start_day_is_week_one() {
        let start = d(2025, 2, 3);
        assert_eq!(week_for(start, start), 1);
    }

    #[test]
    fn seven_days_later_is_week_two() {
        assert_eq!(week_for(d(2025, 2, 10), d(2025, 2, 3)), 2);
    }

    #[test]
    fn sixth_day_is_still_week_one() {
        assert_eq!(week_for(d(2025, 2, 9), d(2025, 2, 3)), 1);
    }

    #[test]
    fn dates_before_start_clamp_to_week_one() {
        assert_eq!(week_for(d(2025, 1, 1), d(2025, 2, 3)), 1);
        assert_eq!(week_for(d(2024, 1, 1), d(2025, 2, 3)), 1);
    }

    #[test]
    fn months_group_four_weeks() {
        assert_eq!(month_for_week(1), 1);
        assert_eq!(month_for_week(4), 1);
        assert_eq!(month_for_week(5), 2);
        assert_eq!(month_for_week(9), 3);
    }
}
