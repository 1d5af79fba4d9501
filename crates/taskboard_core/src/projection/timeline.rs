//! Weekly timeline projection.
//!
//! # Responsibility
//! - Bucket tasks by due date into a 7-day window.
//! - Provide week navigation over a caller-owned reference date.
//!
//! # Invariants
//! - A timeline always has exactly 7 consecutive days (short only at the
//!   very end of the representable calendar).
//! - A task with a due date inside the window is in exactly one bucket;
//!   tasks without a due date are in none.

use crate::model::task::Task;
use chrono::{Datelike, Days, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Number of days in one timeline window.
pub const DAYS_PER_WEEK: usize = 7;

/// First day of a calendar week. Defaults to Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekStart(pub Weekday);

impl Default for WeekStart {
    fn default() -> Self {
        Self(Weekday::Sun)
    }
}

/// Tasks due on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
}

/// One week of day buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub week_start: NaiveDate,
    pub days: Vec<DayBucket>,
}

impl Timeline {
    pub fn bucket(&self, date: NaiveDate) -> Option<&DayBucket> {
        self.days.iter().find(|bucket| bucket.date == date)
    }

    pub fn task_count(&self) -> usize {
        self.days.iter().map(|bucket| bucket.tasks.len()).sum()
    }
}

/// Returns the first day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let current = date.weekday().num_days_from_monday();
    let first = week_start.0.num_days_from_monday();
    let offset = (current + 7 - first) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// Moves `date` by `delta` weeks. Returns `None` past the calendar range.
pub fn shift_weeks(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::weeks(i64::from(delta)))
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Buckets `tasks` into the 7 days starting at `week_start`.
///
/// `week_start` is used as given; normalize it with [`start_of_week`] first
/// when it comes from an arbitrary reference date.
pub fn group_by_day(tasks: &[Task], week_start: NaiveDate) -> Timeline {
    let days = week_start
        .iter_days()
        .take(DAYS_PER_WEEK)
        .map(|date| DayBucket {
            date,
            tasks: tasks
                .iter()
                .filter(|task| task.due_date == Some(date))
                .cloned()
                .collect(),
        })
        .collect();

    Timeline { week_start, days }
}

/// Caller-owned timeline position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineCursor {
    reference: NaiveDate,
}

impl TimelineCursor {
    pub fn new(reference: NaiveDate) -> Self {
        Self { reference }
    }

    /// Cursor positioned on the current local date.
    pub fn today() -> Self {
        Self::new(today())
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Moves by `delta` weeks; stays put if that leaves the calendar range.
    pub fn shift(&mut self, delta: i32) {
        if let Some(shifted) = shift_weeks(self.reference, delta) {
            self.reference = shifted;
        }
    }

    pub fn next_week(&mut self) {
        self.shift(1);
    }

    pub fn previous_week(&mut self) {
        self.shift(-1);
    }

    pub fn jump_to_today(&mut self) {
        self.reference = today();
    }

    pub fn week_start(&self, week_start: WeekStart) -> NaiveDate {
        start_of_week(self.reference, week_start)
    }

    /// Projects `tasks` onto the week containing the reference date.
    pub fn project(&self, tasks: &[Task], week_start: WeekStart) -> Timeline {
        group_by_day(tasks, self.week_start(week_start))
    }
}
