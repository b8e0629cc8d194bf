use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

use super::types::Meeting;

/// Meetings shown inline in a day cell before collapsing into "+N more".
pub const VISIBLE_MEETINGS_PER_DAY: usize = 2;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One square of the month grid. Padding cells have no day.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarCell<'a> {
    pub day: Option<u32>,
    pub is_today: bool,
    pub meetings: Vec<&'a Meeting>,
}

impl<'a> CalendarCell<'a> {
    pub fn is_padding(&self) -> bool {
        self.day.is_none()
    }

    pub fn day_label(&self) -> String {
        self.day.map(|d| d.to_string()).unwrap_or_default()
    }

    pub fn visible_meetings(&self) -> &[&'a Meeting] {
        let end = self.meetings.len().min(VISIBLE_MEETINGS_PER_DAY);
        &self.meetings[..end]
    }

    pub fn overflow_count(&self) -> usize {
        self.meetings.len().saturating_sub(VISIBLE_MEETINGS_PER_DAY)
    }
}

/// A month laid out Sunday-first in rows of seven.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid<'a> {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub days_in_month: u32,
    pub first_weekday: u32,
    pub rows: Vec<Vec<CalendarCell<'a>>>,
}

impl<'a> MonthGrid<'a> {
    /// Lay out the month containing `reference` and bucket `meetings` by
    /// exact `YYYY-MM-DD` equality. Meetings from other months never land
    /// in the grid.
    pub fn build<I>(reference: NaiveDate, meetings: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Meeting>,
    {
        let first = first_of_month(reference);
        let days = days_in_month(first);
        let offset = first.weekday().num_days_from_sunday();
        let meetings: Vec<&'a Meeting> = meetings.into_iter().collect();

        let cells: Vec<CalendarCell<'a>> = (0..total_cells(days, offset))
            .map(|index| {
                let day = (index + 1)
                    .checked_sub(offset)
                    .filter(|d| (1..=days).contains(d));
                match day {
                    Some(day) => {
                        let date = format!("{:04}-{:02}-{:02}", first.year(), first.month(), day);
                        CalendarCell {
                            day: Some(day),
                            is_today: today.year() == first.year()
                                && today.month() == first.month()
                                && today.day() == day,
                            meetings: meetings.iter().copied().filter(|m| m.date == date).collect(),
                        }
                    }
                    None => CalendarCell { day: None, is_today: false, meetings: Vec::new() },
                }
            })
            .collect();

        let rows = cells.chunks(7).map(<[CalendarCell<'a>]>::to_vec).collect();

        MonthGrid {
            year: first.year(),
            month: first.month(),
            label: first.format("%B %Y").to_string(),
            days_in_month: days,
            first_weekday: offset,
            rows,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Meetings bucketed on `day`, empty for days outside the month.
    pub fn meetings_on(&self, day: u32) -> &[&'a Meeting] {
        self.rows
            .iter()
            .flatten()
            .find(|cell| cell.day == Some(day))
            .map(|cell| cell.meetings.as_slice())
            .unwrap_or(&[])
    }

    fn first(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// `YYYY-MM` of this month, as used by the `month` query parameter.
    pub fn month_param(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn previous_month_param(&self) -> String {
        self.first()
            .and_then(|d| d.checked_sub_months(Months::new(1)))
            .map(month_param)
            .unwrap_or_else(|| self.month_param())
    }

    pub fn next_month_param(&self) -> String {
        self.first()
            .and_then(|d| d.checked_add_months(Months::new(1)))
            .map(month_param)
            .unwrap_or_else(|| self.month_param())
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Smallest multiple of seven that holds the leading blanks plus every day.
pub fn total_cells(days_in_month: u32, first_weekday: u32) -> u32 {
    (days_in_month + first_weekday).div_ceil(7) * 7
}

pub fn month_param(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Parse a `YYYY-MM` query value into the first day of that month.
pub fn parse_month_param(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.trim().split_once('-')?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(date(2025, 2, 14)), 28);
        assert_eq!(days_in_month(date(2024, 2, 1)), 29);
        assert_eq!(days_in_month(date(2025, 8, 31)), 31);
        assert_eq!(days_in_month(date(2025, 9, 30)), 30);
        assert_eq!(days_in_month(date(2025, 12, 5)), 31);
    }

    #[test]
    fn total_cells_rounds_up_to_whole_weeks() {
        assert_eq!(total_cells(28, 0), 28);
        assert_eq!(total_cells(28, 6), 35);
        assert_eq!(total_cells(31, 6), 42);
        assert_eq!(total_cells(30, 0), 35);
    }

    #[test]
    fn month_param_parsing() {
        assert_eq!(parse_month_param("2025-08"), Some(date(2025, 8, 1)));
        assert_eq!(parse_month_param(" 2025-8 "), Some(date(2025, 8, 1)));
        assert_eq!(parse_month_param("2025-13"), None);
        assert_eq!(parse_month_param("august"), None);
    }

    #[test]
    fn navigation_crosses_year_boundaries() {
        let grid = MonthGrid::build(date(2025, 1, 20), std::iter::empty(), date(2025, 1, 20));
        assert_eq!(grid.label, "January 2025");
        assert_eq!(grid.previous_month_param(), "2024-12");
        assert_eq!(grid.next_month_param(), "2025-02");
    }

    #[test]
    fn today_is_marked_only_in_its_month() {
        let today = date(2025, 8, 12);
        let grid = MonthGrid::build(date(2025, 8, 1), std::iter::empty(), today);
        let marked: Vec<u32> = grid.rows.iter().flatten().filter(|c| c.is_today).filter_map(|c| c.day).collect();
        assert_eq!(marked, vec![12]);

        let other = MonthGrid::build(date(2025, 9, 1), std::iter::empty(), today);
        assert!(other.rows.iter().flatten().all(|c| !c.is_today));
    }
}
