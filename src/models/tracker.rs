use std::collections::BTreeSet;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::progress::error::StoreError;
use crate::progress::store::KeyValueStore;

pub const TRACKER_KEY: &str = "tracker_days";
pub const LAST_VISIT_KEY: &str = "last_visit";

pub const DAY_LABELS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// Parse a weekday as `mon`..`sun` (any case, 3+ letters) or an index 0..6.
pub fn parse_weekday(s: &str) -> Result<u8> {
    if let Ok(idx) = s.parse::<u8>() {
        return if idx < 7 {
            Ok(idx)
        } else {
            Err(anyhow!("Day index must be 0..6, got {}", idx))
        };
    }
    let lower = s.to_lowercase();
    let names = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
    names
        .iter()
        .position(|n| lower.starts_with(n))
        .map(|i| i as u8)
        .ok_or_else(|| anyhow!("Unknown day '{}'. Use: mon, tue, wed, thu, fri, sat, sun", s))
}

/// Seven manually ticked boxes, Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekTracker {
    completed: BTreeSet<u8>,
}

impl WeekTracker {
    /// Load the saved boxes; anything unreadable counts as nothing ticked.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let raw = match store.get(TRACKER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                log::warn!("Tracker state unavailable: {}", e);
                return Self::default();
            }
        };
        match serde_json::from_str::<Vec<u8>>(&raw) {
            Ok(days) => Self {
                completed: days.into_iter().filter(|d| *d < 7).collect(),
            },
            Err(e) => {
                log::warn!("Discarding malformed tracker state: {}", e);
                Self::default()
            }
        }
    }

    pub fn is_done(&self, day: u8) -> bool {
        self.completed.contains(&day)
    }

    pub fn done_count(&self) -> usize {
        self.completed.len()
    }

    /// Flip one box and persist. Returns the new state of that box.
    pub fn toggle<S: KeyValueStore>(&mut self, store: &mut S, day: u8) -> Result<bool> {
        if day >= 7 {
            return Err(anyhow!("Day index must be 0..6, got {}", day));
        }
        let now_done = if self.completed.remove(&day) {
            false
        } else {
            self.completed.insert(day);
            true
        };
        if let Err(e) = self.save(store) {
            log::warn!("Could not save tracker state: {}", e);
        }
        Ok(now_done)
    }

    fn save<S: KeyValueStore>(&self, store: &mut S) -> Result<(), StoreError> {
        let days: Vec<u8> = self.completed.iter().copied().collect();
        store.set(TRACKER_KEY, &serde_json::to_string(&days)?)
    }
}

/// Remembers the last day the tracker was opened.
pub struct VisitLog;

impl VisitLog {
    /// True when `today` differs from the stored last visit. Records
    /// `today` as the new last visit in that case.
    pub fn check_new_day<S: KeyValueStore>(store: &mut S, today: NaiveDate) -> bool {
        let today_str = today.format("%Y-%m-%d").to_string();
        let last = store.get(LAST_VISIT_KEY).ok().flatten();
        if last.as_deref() == Some(today_str.as_str()) {
            return false;
        }
        if let Err(e) = store.set(LAST_VISIT_KEY, &today_str) {
            log::warn!("Could not record visit: {}", e);
        }
        true
    }
}
