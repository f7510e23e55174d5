//! Week and month windows: which days are on screen and how to move
//! between them.
//!
//! All arithmetic is on local calendar dates; there is no timezone
//! handling. Moving a week window shifts its anchor by exactly seven days.
//! Moving a month window jumps to the first day of the adjacent month.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::LeadeaError;

/// First column of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Column of `day` in a row that starts on this weekday (0..7).
    pub fn column_of(&self, day: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => day.num_days_from_sunday(),
            WeekStart::Monday => day.num_days_from_monday(),
        }
    }

    /// Short weekday headers in column order.
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }
}

impl FromStr for WeekStart {
    type Err = LeadeaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(LeadeaError::UnknownVariant {
                kind: "week start",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Week,
    Month,
}

impl ViewMode {
    pub fn as_label(&self) -> &'static str {
        match self {
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for ViewMode {
    type Err = LeadeaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            other => Err(LeadeaError::UnknownVariant {
                kind: "view",
                value: other.to_string(),
            }),
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Day granularity "today" check.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// First day of the week containing `date`.
pub fn week_start(date: NaiveDate, start: WeekStart) -> NaiveDate {
    let offset = start.column_of(date.weekday());
    date.checked_sub_signed(Duration::days(i64::from(offset)))
        .unwrap_or(date)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = month_start(date);
    first
        .checked_add_months(Months::new(1))
        .map(|next| next.signed_duration_since(first).num_days() as u32)
        .unwrap_or(31)
}

/// Leading blanks followed by every day of the month, laid out from the
/// `start` column.
pub fn month_grid(date: NaiveDate, start: WeekStart) -> Vec<Option<NaiveDate>> {
    let first = month_start(date);
    let blanks = start.column_of(first.weekday()) as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; blanks];
    cells.extend(first.iter_days().take(days_in_month(first) as usize).map(Some));
    cells
}

/// The week or month currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWindow {
    pub view: ViewMode,
    /// The reference date; for month windows always the first of the month.
    pub anchor: NaiveDate,
    pub week_start: WeekStart,
}

impl CalendarWindow {
    pub fn new(view: ViewMode, reference: NaiveDate, week_start: WeekStart) -> Self {
        let anchor = match view {
            ViewMode::Week => reference,
            ViewMode::Month => month_start(reference),
        };
        Self {
            view,
            anchor,
            week_start,
        }
    }

    pub fn next(&self) -> Self {
        self.shift(1)
    }

    pub fn previous(&self) -> Self {
        self.shift(-1)
    }

    fn shift(&self, steps: i32) -> Self {
        let anchor = match self.view {
            ViewMode::Week => self
                .anchor
                .checked_add_signed(Duration::days(7 * i64::from(steps)))
                .unwrap_or(self.anchor),
            ViewMode::Month => {
                let first = month_start(self.anchor);
                let moved = if steps >= 0 {
                    first.checked_add_months(Months::new(steps as u32))
                } else {
                    first.checked_sub_months(Months::new(steps.unsigned_abs()))
                };
                moved.unwrap_or(first)
            }
        };
        Self { anchor, ..*self }
    }

    /// First calendar day of the window.
    pub fn start(&self) -> NaiveDate {
        match self.view {
            ViewMode::Week => week_start(self.anchor, self.week_start),
            ViewMode::Month => month_start(self.anchor),
        }
    }

    /// Every calendar day in the window, weekends included.
    pub fn days(&self) -> Vec<NaiveDate> {
        let len = match self.view {
            ViewMode::Week => 7,
            ViewMode::Month => days_in_month(self.anchor) as usize,
        };
        self.start().iter_days().take(len).collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days().contains(&date)
    }

    /// `"January 2024"` or `"Jan 1 - Jan 5, 2024"`.
    pub fn title(&self) -> String {
        match self.view {
            ViewMode::Month => self.anchor.format("%B %Y").to_string(),
            ViewMode::Week => {
                let weekdays: Vec<NaiveDate> =
                    self.days().into_iter().filter(|d| !is_weekend(*d)).collect();
                match (weekdays.first(), weekdays.last()) {
                    (Some(first), Some(last)) => range_title(*first, *last),
                    _ => self.start().format("%b %-d, %Y").to_string(),
                }
            }
        }
    }

    /// Stable slug used for page file names.
    pub fn slug(&self) -> String {
        match self.view {
            ViewMode::Week => format!("week-{}", self.start().format("%Y-%m-%d")),
            ViewMode::Month => format!("month-{}", self.anchor.format("%Y-%m")),
        }
    }
}

fn range_title(first: NaiveDate, last: NaiveDate) -> String {
    if first.year() == last.year() {
        format!(
            "{} - {}, {}",
            first.format("%b %-d"),
            last.format("%b %-d"),
            last.year()
        )
    } else {
        format!("{} - {}", first.format("%b %-d, %Y"), last.format("%b %-d, %Y"))
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, LeadeaError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| LeadeaError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_sunday_and_monday() {
        // 2024-01-03 is a Wednesday
        let wed = date(2024, 1, 3);
        assert_eq!(week_start(wed, WeekStart::Sunday), date(2023, 12, 31));
        assert_eq!(week_start(wed, WeekStart::Monday), date(2024, 1, 1));
        // a Sunday is its own start in Sunday-first weeks
        assert_eq!(week_start(date(2024, 1, 7), WeekStart::Sunday), date(2024, 1, 7));
        assert_eq!(week_start(date(2024, 1, 7), WeekStart::Monday), date(2024, 1, 1));
    }

    #[test]
    fn next_week_advances_exactly_seven_days() {
        let window = CalendarWindow::new(ViewMode::Week, date(2024, 1, 1), WeekStart::Sunday);
        let next = window.next();
        assert_eq!(next.anchor, date(2024, 1, 8));
        assert_eq!(next.start(), date(2024, 1, 7));
        assert_eq!(next.previous(), window);

        let monday_first = CalendarWindow::new(ViewMode::Week, date(2024, 1, 1), WeekStart::Monday);
        assert_eq!(monday_first.next().start(), date(2024, 1, 8));
    }

    #[test]
    fn navigation_stops_at_calendar_bounds() {
        let last = CalendarWindow::new(ViewMode::Week, NaiveDate::MAX, WeekStart::Sunday);
        assert_eq!(last.next().anchor, NaiveDate::MAX);
        assert!(!last.title().is_empty());

        let first = CalendarWindow::new(ViewMode::Week, NaiveDate::MIN, WeekStart::Monday);
        assert_eq!(first.previous().anchor, NaiveDate::MIN);
        assert!(first.days().len() <= 7);

        let month = CalendarWindow::new(ViewMode::Month, NaiveDate::MAX, WeekStart::Sunday);
        assert_eq!(month.next().anchor, month.anchor);
    }

    #[test]
    fn month_navigation_wraps_years() {
        let window = CalendarWindow::new(ViewMode::Month, date(2024, 1, 31), WeekStart::Sunday);
        assert_eq!(window.anchor, date(2024, 1, 1));
        assert_eq!(window.next().anchor, date(2024, 2, 1));
        assert_eq!(window.previous().anchor, date(2023, 12, 1));
        let december = CalendarWindow::new(ViewMode::Month, date(2024, 12, 15), WeekStart::Sunday);
        assert_eq!(december.next().anchor, date(2025, 1, 1));
    }

    #[test]
    fn month_grid_has_leading_blanks() {
        // February 2024 starts on a Thursday and has 29 days
        let grid = month_grid(date(2024, 2, 10), WeekStart::Sunday);
        assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 4);
        assert_eq!(grid.len(), 4 + 29);
        assert_eq!(grid[4], Some(date(2024, 2, 1)));
        assert_eq!(grid.last().copied().flatten(), Some(date(2024, 2, 29)));

        let monday_grid = month_grid(date(2024, 2, 10), WeekStart::Monday);
        assert_eq!(monday_grid.iter().take_while(|c| c.is_none()).count(), 3);
    }

    #[test]
    fn month_grid_without_blanks_when_month_starts_on_week_start() {
        // September 2024 starts on a Sunday
        let grid = month_grid(date(2024, 9, 1), WeekStart::Sunday);
        assert_eq!(grid[0], Some(date(2024, 9, 1)));
        assert_eq!(grid.len(), 30);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(date(2024, 2, 1)), 29);
        assert_eq!(days_in_month(date(2023, 2, 1)), 28);
        assert_eq!(days_in_month(date(2024, 12, 5)), 31);
        assert_eq!(days_in_month(date(2024, 4, 30)), 30);
    }

    #[test]
    fn titles() {
        let week = CalendarWindow::new(ViewMode::Week, date(2024, 1, 1), WeekStart::Sunday);
        assert_eq!(week.title(), "Jan 1 - Jan 5, 2024");
        let month = CalendarWindow::new(ViewMode::Month, date(2024, 1, 17), WeekStart::Sunday);
        assert_eq!(month.title(), "January 2024");
        let spanning = CalendarWindow::new(ViewMode::Week, date(2024, 12, 31), WeekStart::Sunday);
        assert_eq!(spanning.title(), "Dec 30, 2024 - Jan 3, 2025");
    }

    #[test]
    fn slugs_are_stable_per_window() {
        let week = CalendarWindow::new(ViewMode::Week, date(2024, 1, 3), WeekStart::Sunday);
        assert_eq!(week.slug(), "week-2023-12-31");
        let month = CalendarWindow::new(ViewMode::Month, date(2024, 1, 3), WeekStart::Sunday);
        assert_eq!(month.slug(), "month-2024-01");
    }

    #[test]
    fn today_is_day_granular() {
        assert!(is_today(date(2024, 1, 1), date(2024, 1, 1)));
        assert!(!is_today(date(2024, 1, 1), date(2024, 1, 2)));
    }

    #[test]
    fn parse_date_rejects_bad_input() {
        assert_eq!(parse_date("2024-01-01").unwrap(), date(2024, 1, 1));
        assert!(matches!(parse_date("01/02/2024"), Err(LeadeaError::InvalidDate(_))));
    }
}
