use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

const PLAN_START: NaiveDate = match NaiveDate::from_ymd_opt(2026, 2, 9) {
    Some(d) => d,
    None => panic!("invalid plan start date"),
};
const PLAN_END: NaiveDate = match NaiveDate::from_ymd_opt(2026, 7, 9) {
    Some(d) => d,
    None => panic!("invalid plan end date"),
};
pub const PLAN_TOTAL_DAYS: u32 = 150;

/// The fixed calendar range a plan is measured against.
///
/// Both dates are counted from local midnight. `total_days` is the
/// denominator for percentages and the ceiling for every clamp; it is
/// expected to match the span between the two dates but that is not
/// enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanConfig {
    start_date: NaiveDate,
    end_date: NaiveDate,
    total_days: u32,
}

impl PlanConfig {
    /// The built-in 150-day plan, 2026-02-09 to 2026-07-09.
    pub fn study_plan() -> Self {
        Self {
            start_date: PLAN_START,
            end_date: PLAN_END,
            total_days: PLAN_TOTAL_DAYS,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn start_instant(&self) -> NaiveDateTime {
        self.start_date.and_time(NaiveTime::MIN)
    }

    pub fn end_instant(&self) -> NaiveDateTime {
        self.end_date.and_time(NaiveTime::MIN)
    }

    /// Calendar date on which the given plan day falls (day 0 = start).
    pub fn date_of_day(&self, day: u32) -> NaiveDate {
        self.start_date + Duration::days(day as i64)
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self::study_plan()
    }
}
