use chrono::NaiveDateTime;

use crate::models::{Decoded, PlanConfig, ProgressSnapshot, ProgressState, STATE_KEY};
use crate::progress::clock::Clock;
use crate::progress::error::StoreError;
use crate::progress::store::KeyValueStore;

/// Why `initialize` ended up with the state it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Migrated,
    Missing,
    Corrupt(String),
    Unavailable(String),
    UnsupportedVersion(u64),
}

/// Result of one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub snapshot: ProgressSnapshot,
    /// Plan just reached 100% for the first time; show the celebration.
    pub celebrate: bool,
}

/// Elapsed-time progress blended with a persisted manual offset.
///
/// Every query recomputes from `clock.now()`; every mutation writes the
/// state back through the store. Storage failures never reach the caller:
/// reads fall back to defaults and failed writes are logged and dropped,
/// leaving the in-memory state authoritative until the next write.
///
/// A preview model (see [`preview`](Self::preview)) behaves the same but
/// never writes, so looking at another date cannot touch saved progress.
pub struct ProgressModel<S, C> {
    plan: PlanConfig,
    store: S,
    clock: C,
    state: ProgressState,
    preview: bool,
}

impl<S: KeyValueStore, C: Clock> ProgressModel<S, C> {
    /// Build a model with default state. Call [`initialize`](Self::initialize)
    /// to pick up saved progress.
    pub fn new(plan: PlanConfig, store: S, clock: C) -> Self {
        Self {
            plan,
            store,
            clock,
            state: ProgressState::default(),
            preview: false,
        }
    }

    /// `new` followed by `initialize`.
    pub fn open(plan: PlanConfig, store: S, clock: C) -> Self {
        let mut model = Self::new(plan, store, clock);
        model.initialize();
        model
    }

    /// Load saved state, substituting defaults for anything missing,
    /// unreadable or malformed. Never writes.
    pub fn initialize(&mut self) -> LoadOutcome {
        let (state, outcome) = match self.store.get(STATE_KEY) {
            Ok(None) => (ProgressState::default(), LoadOutcome::Missing),
            Ok(Some(raw)) => match ProgressState::decode(&raw) {
                Ok(Decoded::Current(s)) => (s, LoadOutcome::Loaded),
                Ok(Decoded::Migrated(s)) => (s, LoadOutcome::Migrated),
                Err(StoreError::UnsupportedVersion(v)) => {
                    (ProgressState::default(), LoadOutcome::UnsupportedVersion(v))
                }
                Err(e) => (ProgressState::default(), LoadOutcome::Corrupt(e.to_string())),
            },
            Err(e) => (ProgressState::default(), LoadOutcome::Unavailable(e.to_string())),
        };

        match &outcome {
            LoadOutcome::Loaded | LoadOutcome::Missing => {
                log::debug!("Progress state {:?}: offset {}", outcome, state.manual_offset)
            }
            LoadOutcome::Migrated => {
                log::info!("Migrated legacy progress record (offset {})", state.manual_offset)
            }
            other => log::warn!("Using default progress state: {:?}", other),
        }

        self.state = state;
        outcome
    }

    /// Stop persisting. Mutations and celebrations stay in memory only.
    pub fn preview(mut self) -> Self {
        self.preview = true;
        self
    }

    pub fn is_preview(&self) -> bool {
        self.preview
    }

    pub fn plan(&self) -> &PlanConfig {
        &self.plan
    }

    pub fn manual_offset(&self) -> i64 {
        self.state.manual_offset
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[cfg(test)]
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Whole days between plan start and `now`, clamped to the plan length.
    pub fn compute_auto_days(&self, now: NaiveDateTime) -> u32 {
        let total = self.plan.total_days();
        if now < self.plan.start_instant() {
            return 0;
        }
        if now > self.plan.end_instant() {
            return total;
        }
        let elapsed = (now - self.plan.start_instant()).num_days();
        elapsed.clamp(0, total as i64) as u32
    }

    pub fn snapshot(&self, now: NaiveDateTime) -> ProgressSnapshot {
        let auto_days = self.compute_auto_days(now);
        ProgressSnapshot::compute(auto_days, self.state.manual_offset, self.plan.total_days())
    }

    pub fn current_snapshot(&self) -> ProgressSnapshot {
        self.snapshot(self.clock.now())
    }

    /// Refresh from the clock and claim the one-shot celebration if the
    /// plan has just completed.
    pub fn tick(&mut self) -> Tick {
        let snapshot = self.current_snapshot();
        let celebrate = snapshot.is_complete && !self.has_celebrated();
        if celebrate {
            self.mark_celebrated();
        }
        Tick { snapshot, celebrate }
    }

    /// Shift the manual offset. The offset itself is never clamped, only
    /// the counted total derived from it.
    pub fn add_days(&mut self, n: i64) {
        self.state.manual_offset = self.state.manual_offset.saturating_add(n);
        self.persist();
    }

    pub fn add_day(&mut self) {
        self.add_days(1);
    }

    pub fn add_week(&mut self) {
        self.add_days(7);
    }

    pub fn remove_day(&mut self) {
        self.add_days(-1);
    }

    pub fn reset_manual(&mut self) {
        self.state.manual_offset = 0;
        self.persist();
    }

    /// Set the offset so the plan reads as complete right now.
    pub fn jump_to_complete(&mut self) {
        let auto_days = self.compute_auto_days(self.clock.now());
        self.state.manual_offset = self.plan.total_days() as i64 - auto_days as i64;
        self.persist();
    }

    pub fn has_celebrated(&self) -> bool {
        self.state.celebrated
    }

    pub fn mark_celebrated(&mut self) {
        if !self.state.celebrated {
            self.state.celebrated = true;
            self.persist();
        }
    }

    fn persist(&mut self) {
        if self.preview {
            log::debug!("Preview only, progress state not saved");
            return;
        }
        let result = self
            .state
            .encode()
            .and_then(|raw| self.store.set(STATE_KEY, &raw));
        match result {
            Ok(()) => log::debug!("Saved progress state: offset {}", self.state.manual_offset),
            Err(e) => log::warn!("Progress state not saved: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::state::SCHEMA_VERSION;
    use crate::progress::clock::FixedClock;
    use crate::progress::store::MemoryStore;
    use chrono::{Duration, NaiveDate};

    /// Reads succeed from a backing map, every write fails.
    #[derive(Default)]
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }
    }

    struct DeadStore;

    impl KeyValueStore for DeadStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("storage disabled".to_string()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("storage disabled".to_string()))
        }
    }

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 9)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn day(n: i64) -> NaiveDateTime {
        start() + Duration::days(n)
    }

    fn model_at(now: NaiveDateTime) -> ProgressModel<MemoryStore, FixedClock> {
        ProgressModel::open(PlanConfig::study_plan(), MemoryStore::new(), FixedClock(now))
    }

    #[test]
    fn test_initialize_defaults_when_missing() {
        let mut model = ProgressModel::new(PlanConfig::study_plan(), MemoryStore::new(), FixedClock(start()));
        assert_eq!(model.initialize(), LoadOutcome::Missing);
        assert_eq!(model.manual_offset(), 0);
        assert!(!model.has_celebrated());
        assert_eq!(model.store().get(STATE_KEY).unwrap(), None);
    }

    #[test]
    fn test_initialize_restores_saved_state() {
        let mut model = model_at(day(20));
        model.add_days(4);
        model.mark_celebrated();
        let store = model.store().clone();

        let mut reopened = ProgressModel::new(PlanConfig::study_plan(), store, FixedClock(day(20)));
        assert_eq!(reopened.initialize(), LoadOutcome::Loaded);
        assert_eq!(reopened.manual_offset(), 4);
        assert!(reopened.has_celebrated());
    }

    #[test]
    fn test_initialize_corrupt_payload() {
        for raw in ["{not json", "42", r#"{"manualOffset":"x"}"#, ""] {
            let store = MemoryStore::with_entry(STATE_KEY, raw);
            let mut model = ProgressModel::new(PlanConfig::study_plan(), store, FixedClock(start()));
            assert!(matches!(model.initialize(), LoadOutcome::Corrupt(_)), "payload {:?}", raw);
            assert_eq!(model.manual_offset(), 0);
        }
    }

    #[test]
    fn test_initialize_migrates_legacy_record() {
        let store = MemoryStore::with_entry(STATE_KEY, r#"{"manualOffset":-3,"lastAutoDays":17}"#);
        let mut model = ProgressModel::new(PlanConfig::study_plan(), store, FixedClock(start()));
        assert_eq!(model.initialize(), LoadOutcome::Migrated);
        assert_eq!(model.manual_offset(), -3);

        // initialize is read-only; the next mutation rewrites the record
        assert!(!model.store().get(STATE_KEY).unwrap().unwrap().contains("version"));
        model.add_day();
        let raw = model.store().get(STATE_KEY).unwrap().unwrap();
        assert_eq!(ProgressState::decode(&raw).unwrap().into_state().version, SCHEMA_VERSION);
    }

    #[test]
    fn test_initialize_discards_newer_version() {
        let store = MemoryStore::with_entry(STATE_KEY, r#"{"version":99,"manualOffset":10}"#);
        let mut model = ProgressModel::new(PlanConfig::study_plan(), store, FixedClock(start()));
        assert_eq!(model.initialize(), LoadOutcome::UnsupportedVersion(99));
        assert_eq!(model.manual_offset(), 0);
    }

    #[test]
    fn test_unavailable_storage_degrades_to_memory() {
        let mut model = ProgressModel::new(PlanConfig::study_plan(), DeadStore, FixedClock(day(10)));
        assert!(matches!(model.initialize(), LoadOutcome::Unavailable(_)));
        model.add_week();
        assert_eq!(model.manual_offset(), 7);
        assert_eq!(model.current_snapshot().total_days_counted, 17);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let mut model = ProgressModel::open(
            PlanConfig::study_plan(),
            ReadOnlyStore::default(),
            FixedClock(day(5)),
        );
        model.add_days(3);
        model.mark_celebrated();
        assert_eq!(model.manual_offset(), 3);
        assert!(model.has_celebrated());
        assert_eq!(model.store().get(STATE_KEY).unwrap(), None);
    }

    #[test]
    fn test_auto_days_boundaries() {
        let model = model_at(start());
        let plan = *model.plan();
        assert_eq!(model.compute_auto_days(plan.start_instant()), 0);
        assert_eq!(model.compute_auto_days(plan.start_instant() - Duration::seconds(1)), 0);
        assert_eq!(model.compute_auto_days(day(-365)), 0);
        assert_eq!(model.compute_auto_days(day(1) - Duration::seconds(1)), 0);
        assert_eq!(model.compute_auto_days(day(1)), 1);
        assert_eq!(model.compute_auto_days(plan.end_instant() - Duration::seconds(1)), 149);
        assert_eq!(model.compute_auto_days(plan.end_instant()), 150);
        assert_eq!(model.compute_auto_days(plan.end_instant() + Duration::days(400)), 150);
    }

    #[test]
    fn test_auto_days_monotonic() {
        let model = model_at(start());
        let mut previous = 0;
        let mut t = start();
        while t <= model.plan().end_instant() {
            let days = model.compute_auto_days(t);
            assert!(days >= previous, "auto days went backwards at {}", t);
            previous = days;
            t += Duration::hours(5);
        }
    }

    #[test]
    fn test_clamping_invariant() {
        let offsets = [i64::MIN, -1_000, -151, -150, -1, 0, 1, 149, 150, 1_000, i64::MAX];
        let instants = [
            day(-400),
            start() - Duration::seconds(1),
            start(),
            day(10),
            day(75),
            day(150) - Duration::seconds(1),
            day(150),
            day(151),
            day(1_000),
        ];
        for offset in offsets {
            let mut model = model_at(start());
            model.add_days(offset);
            for now in instants {
                let s = model.snapshot(now);
                assert!(s.total_days_counted <= s.total_days, "offset {} at {}", offset, now);
                assert!(s.percentage <= 100);
                assert_eq!(s.is_complete, s.total_days_counted == s.total_days);
                assert_eq!(s.remaining_days, s.total_days - s.total_days_counted);
            }
        }
    }

    #[test]
    fn test_offset_round_trip() {
        let mut model = model_at(day(30));
        model.add_days(2);
        let before = model.manual_offset();
        model.add_days(5);
        model.add_days(-5);
        assert_eq!(model.manual_offset(), before);
    }

    #[test]
    fn test_controls() {
        let mut model = model_at(day(30));
        model.add_day();
        model.add_week();
        model.remove_day();
        assert_eq!(model.manual_offset(), 7);
        assert_eq!(model.current_snapshot().total_days_counted, 37);
    }

    #[test]
    fn test_reset_idempotent() {
        let mut model = model_at(day(30));
        model.add_days(-12);
        model.reset_manual();
        assert_eq!(model.manual_offset(), 0);
        model.reset_manual();
        assert_eq!(model.manual_offset(), 0);

        let raw = model.store().get(STATE_KEY).unwrap().unwrap();
        assert_eq!(ProgressState::decode(&raw).unwrap().into_state().manual_offset, 0);
    }

    #[test]
    fn test_mutations_persist() {
        let mut model = model_at(day(3));
        model.add_days(9);
        let raw = model.store().get(STATE_KEY).unwrap().unwrap();
        assert!(raw.contains("\"manualOffset\":9"));
    }

    #[test]
    fn test_scenario_same_day_as_start() {
        let model = model_at(start());
        let s = model.current_snapshot();
        assert_eq!(s.auto_days, 0);
        assert_eq!(s.percentage, 0);
        assert_eq!(s.week, 1);
        assert!(!s.is_complete);
    }

    #[test]
    fn test_scenario_halfway() {
        let model = model_at(day(75));
        let s = model.current_snapshot();
        assert_eq!(s.auto_days, 75);
        assert_eq!(s.percentage, 50);
        assert_eq!(s.week, 11);
        assert_eq!(s.remaining_days, 75);
    }

    #[test]
    fn test_scenario_rest_days_below_zero() {
        let mut model = model_at(day(10));
        model.add_days(-15);
        let s = model.current_snapshot();
        assert_eq!(s.total_days_counted, 0);
        assert_eq!(s.percentage, 0);
        // the excess stays in the offset
        assert_eq!(model.manual_offset(), -15);
        assert_eq!(model.snapshot(day(20)).total_days_counted, 5);
    }

    #[test]
    fn test_scenario_after_end() {
        let model = model_at(day(200));
        let s = model.current_snapshot();
        assert_eq!(s.auto_days, 150);
        assert!(s.is_complete);
    }

    #[test]
    fn test_scenario_jump_to_complete() {
        let mut model = model_at(day(40));
        model.jump_to_complete();
        assert_eq!(model.manual_offset(), 110);
        let s = model.current_snapshot();
        assert_eq!(s.total_days_counted, 150);
        assert!(s.is_complete);

        // automatic progress keeps flowing afterwards
        model.clock_mut().set(day(-5));
        assert_eq!(model.current_snapshot().total_days_counted, 110);
    }

    #[test]
    fn test_tick_celebrates_once() {
        let mut model = model_at(day(149));
        let first = model.tick();
        assert!(!first.celebrate);
        assert!(!first.snapshot.is_complete);

        model.add_day();
        assert!(model.tick().celebrate);
        assert!(!model.tick().celebrate);
        assert!(model.has_celebrated());

        // the guard survives a reload
        let store = model.store().clone();
        let mut reopened = ProgressModel::open(PlanConfig::study_plan(), store, FixedClock(day(149)));
        reopened.add_day();
        assert!(!reopened.tick().celebrate);
    }

    #[test]
    fn test_reset_keeps_celebration_guard() {
        let mut model = model_at(day(150));
        assert!(model.tick().celebrate);
        model.reset_manual();
        assert!(model.has_celebrated());
    }

    #[test]
    fn test_preview_never_writes() {
        let mut model = model_at(day(200)).preview();
        assert!(model.is_preview());
        assert!(model.tick().celebrate);
        model.add_week();
        model.jump_to_complete();
        assert_eq!(model.store().get(STATE_KEY).unwrap(), None);

        // the real completion still gets its celebration
        let store = model.store().clone();
        let mut live = ProgressModel::open(PlanConfig::study_plan(), store, FixedClock(day(150)));
        assert_eq!(live.manual_offset(), 0);
        assert!(live.tick().celebrate);
    }
}
