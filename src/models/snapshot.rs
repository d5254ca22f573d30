use serde::Serialize;

/// Read-only view of progress at one instant. Recomputed on every query,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub auto_days: u32,
    pub manual_offset: i64,
    pub total_days_counted: u32,
    pub total_days: u32,
    pub percentage: u32,
    pub week: u32,
    pub remaining_days: u32,
    pub is_complete: bool,
}

impl ProgressSnapshot {
    /// Derive every metric from the clamped auto component and the raw
    /// manual offset. `total_days` must be non-zero.
    pub fn compute(auto_days: u32, manual_offset: i64, total_days: u32) -> Self {
        let total = total_days as i64;
        let counted = (auto_days as i64).saturating_add(manual_offset).clamp(0, total);
        let counted = counted as u32;

        // Round half up, matching the integer display of the bar.
        let percentage = (counted * 200 + total_days) / (2 * total_days);

        Self {
            auto_days,
            manual_offset,
            total_days_counted: counted,
            total_days,
            percentage,
            week: counted / 7 + 1,
            remaining_days: total_days - counted,
            is_complete: counted >= total_days,
        }
    }
}
