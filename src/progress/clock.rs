use chrono::{Local, NaiveDateTime};

/// Source of the current wall-clock instant.
///
/// No monotonicity is assumed: the system clock may be adjusted backwards
/// between two calls and callers must still behave.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// True when time does not advance (previews and tests).
    fn is_pinned(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single instant. Used by `--at` previews and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl FixedClock {
    pub fn set(&mut self, now: NaiveDateTime) {
        self.0 = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }

    fn is_pinned(&self) -> bool {
        true
    }
}

/// Either the live system clock or a pinned instant, chosen at startup.
#[derive(Debug, Clone, Copy)]
pub enum AppClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl AppClock {
    pub fn from_override(at: Option<NaiveDateTime>) -> Self {
        match at {
            Some(t) => AppClock::Fixed(FixedClock(t)),
            None => AppClock::System(SystemClock),
        }
    }
}

impl Clock for AppClock {
    fn now(&self) -> NaiveDateTime {
        match self {
            AppClock::System(c) => c.now(),
            AppClock::Fixed(c) => c.now(),
        }
    }

    fn is_pinned(&self) -> bool {
        matches!(self, AppClock::Fixed(_))
    }
}
