use anyhow::Result;
use std::fmt::Write as _;

use crate::config::AppConfig;
use crate::models::milestone::{
    adjustment_label, checkpoints_reached, milestones_reached, motivation_for, BarTier, Tone,
};
use crate::models::tracker::{parse_weekday, DAY_LABELS};
use crate::models::{ProgressSnapshot, WeekTracker};
use crate::progress::{Clock, KeyValueStore, ProgressModel};
use crate::utils::format::{format_signed, format_today, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const PURPLE: &str = "\x1b[35m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn tier_color(tier: BarTier) -> &'static str {
    match tier {
        BarTier::Starting => BLUE,
        BarTier::Early | BarTier::Middle => PURPLE,
        BarTier::Advanced | BarTier::Closing => AMBER,
        BarTier::Done => GREEN,
    }
}

fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Warm => AMBER,
        Tone::Calm => GREEN,
        Tone::Hot | Tone::Urgent => RED,
    }
}

// ─── Status ──────────────────────────────────────────────────────────────────

pub fn handle_status<S: KeyValueStore, C: Clock>(
    model: &mut ProgressModel<S, C>,
    config: &AppConfig,
) -> Result<()> {
    let now = model.clock().now();
    let tick = model.tick();
    let snap = tick.snapshot;
    let tracker = WeekTracker::load(model.store());

    println!();
    println_colored!(GOLD, "  Study Plan — {} → {}", model.plan().start_date(), model.plan().end_date());
    println_colored!(DIM, "  Today is {}", format_today(now));
    if model.is_preview() {
        println_colored!(DIM, "  Preview only, nothing is saved");
    }
    println!();

    print_bar(&snap, config.display.bar_width as usize);
    println!();
    println_colored!(
        BOLD,
        "  Day {}/{}  ·  Week {}  ·  {} days left",
        snap.total_days_counted,
        snap.total_days,
        snap.week,
        snap.remaining_days
    );
    println_colored!(
        DIM,
        "  Calendar: {} days  ·  Adjustment: {}",
        snap.auto_days,
        adjustment_label(snap.manual_offset)
    );

    let motivation = motivation_for(snap.percentage);
    println!();
    println_colored!(tone_color(motivation.tone), "  {}", motivation.text);

    println!();
    println_colored!(GOLD, "  Milestones");
    for (day, done) in milestones_reached(snap.total_days_counted) {
        if done {
            println_colored!(GREEN, "  ✓ Day {}", day);
        } else {
            println_colored!(DIM, "  ○ Day {}", day);
        }
    }

    if config.tracker.enabled {
        println!();
        println_colored!(GOLD, "  This week");
        print!("  ");
        for (i, label) in DAY_LABELS.iter().enumerate() {
            if tracker.is_done(i as u8) {
                print!("{}{}\x1b[0m ", GREEN, label);
            } else {
                print!("{}{}\x1b[0m ", DIM, label);
            }
        }
        println!();
    }

    if tick.celebrate {
        print_celebration(snap.total_days);
    }
    println!();
    Ok(())
}

fn print_bar(snap: &ProgressSnapshot, width: usize) {
    let bar = progress_bar(snap.total_days_counted, snap.total_days, width);
    println_colored!(
        tier_color(BarTier::for_percentage(snap.percentage)),
        "  {}  {}%",
        bar,
        snap.percentage
    );
}

fn print_celebration(total_days: u32) {
    println!();
    println_colored!(GOLD, "  🎉🎊  {} days done. Goal reached!  🎊🎉", total_days);
}

// ─── Manual controls ─────────────────────────────────────────────────────────

pub fn handle_add<S: KeyValueStore, C: Clock>(model: &mut ProgressModel<S, C>, days: i64) -> Result<()> {
    model.add_days(days);
    match days {
        1 => println_colored!(GREEN, "  ➕ Day added: great work!"),
        d if d > 0 => println_colored!(GREEN, "  ➕ {} days added: great work!", d),
        0 => println_colored!(DIM, "  Nothing to add"),
        d => println_colored!(AMBER, "  ➖ {} days removed", d.unsigned_abs()),
    }
    print_after_change(model);
    Ok(())
}

pub fn handle_week<S: KeyValueStore, C: Clock>(model: &mut ProgressModel<S, C>) -> Result<()> {
    model.add_week();
    println_colored!(GREEN, "  ➕ Full week added: impressive!");
    print_after_change(model);
    Ok(())
}

pub fn handle_rest<S: KeyValueStore, C: Clock>(model: &mut ProgressModel<S, C>) -> Result<()> {
    model.remove_day();
    println_colored!(AMBER, "  ➖ Rest day logged: resting is productive too!");
    print_after_change(model);
    Ok(())
}

pub fn handle_reset<S: KeyValueStore, C: Clock>(model: &mut ProgressModel<S, C>) -> Result<()> {
    model.reset_manual();
    println_colored!(BLUE, "  🔄 Progress reset to automatic");
    print_after_change(model);
    Ok(())
}

pub fn handle_complete<S: KeyValueStore, C: Clock>(
    model: &mut ProgressModel<S, C>,
    config: &AppConfig,
) -> Result<()> {
    model.jump_to_complete();
    let tick = model.tick();
    println_colored!(
        DIM,
        "  Manual offset set to {} to reach day {}",
        format_signed(model.manual_offset()),
        tick.snapshot.total_days
    );
    print_bar(&tick.snapshot, config.display.bar_width as usize);
    // Always show it here, the guard only limits automatic celebrations.
    print_celebration(tick.snapshot.total_days);
    println!();
    Ok(())
}

fn print_after_change<S: KeyValueStore, C: Clock>(model: &mut ProgressModel<S, C>) {
    let tick = model.tick();
    let snap = tick.snapshot;
    println_colored!(
        DIM,
        "  Day {}/{} ({}%)  ·  {}",
        snap.total_days_counted,
        snap.total_days,
        snap.percentage,
        adjustment_label(snap.manual_offset)
    );
    if tick.celebrate {
        print_celebration(snap.total_days);
    }
}

// ─── Tracker ─────────────────────────────────────────────────────────────────

pub fn handle_track<S: KeyValueStore, C: Clock>(model: &mut ProgressModel<S, C>, day: &str) -> Result<()> {
    let idx = parse_weekday(day)?;
    let mut tracker = WeekTracker::load(model.store());
    let done = tracker.toggle(model.store_mut(), idx)?;
    let names = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
    if done {
        println_colored!(GREEN, "  ✓ {} ticked", names[idx as usize]);
    } else {
        println_colored!(DIM, "  ○ {} cleared", names[idx as usize]);
    }
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export<S: KeyValueStore, C: Clock>(model: &ProgressModel<S, C>) -> Result<()> {
    let tracker = WeekTracker::load(model.store());
    print!("{}", render_export(model, &tracker)?);
    Ok(())
}

pub fn render_export<S: KeyValueStore, C: Clock>(
    model: &ProgressModel<S, C>,
    tracker: &WeekTracker,
) -> Result<String> {
    let now = model.clock().now();
    let snap = model.snapshot(now);
    let plan = model.plan();
    let mut out = String::new();

    writeln!(out, "# rumbo — Progress Summary")?;
    writeln!(out, "# {}", now.format("%Y-%m-%d %H:%M"))?;
    writeln!(out)?;
    writeln!(out, "Plan:     {} → {} ({} days)", plan.start_date(), plan.end_date(), plan.total_days())?;
    writeln!(out, "Progress: {}  {}%", progress_bar(snap.total_days_counted, snap.total_days, 20), snap.percentage)?;
    writeln!(out)?;
    writeln!(out, "## Summary")?;
    writeln!(out, "  Days counted:  {}/{}", snap.total_days_counted, snap.total_days)?;
    writeln!(out, "  Calendar days: {}", snap.auto_days)?;
    writeln!(out, "  Adjustment:    {}", format_signed(snap.manual_offset))?;
    writeln!(out, "  Week:          {}", snap.week)?;
    writeln!(out, "  Remaining:     {}", snap.remaining_days)?;
    writeln!(out, "  Complete:      {}", if snap.is_complete { "yes" } else { "no" })?;
    writeln!(out)?;
    writeln!(out, "## Checkpoints")?;
    for (checkpoint, done) in checkpoints_reached(snap.total_days_counted) {
        let mark = if done { "[x]" } else { "[ ]" };
        writeln!(
            out,
            "  {} Day {:<3}  {:<10}  {}",
            mark,
            checkpoint.day,
            checkpoint.label,
            plan.date_of_day(checkpoint.day)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "## This week")?;
    let days: Vec<String> = DAY_LABELS
        .iter()
        .enumerate()
        .map(|(i, l)| if tracker.is_done(i as u8) { format!("[{}]", l) } else { format!(" {} ", l) })
        .collect();
    writeln!(out, "  {}  ({}/7)", days.join(""), tracker.done_count())?;
    Ok(out)
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, write: bool) -> Result<()> {
    let path = AppConfig::config_path()?;
    println!("  Config: {}", path.display());
    println!("  Data:   {}", AppConfig::db_path()?.display());
    if write {
        if path.exists() {
            println_colored!(DIM, "  Config file already exists, leaving it untouched");
        } else {
            config.save()?;
            println_colored!(GREEN, "  ✓ Wrote default config");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanConfig;
    use crate::progress::{FixedClock, MemoryStore};
    use chrono::NaiveDate;

    fn model_on(date: (i32, u32, u32)) -> ProgressModel<MemoryStore, FixedClock> {
        let now = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        ProgressModel::open(PlanConfig::study_plan(), MemoryStore::new(), FixedClock(now))
    }

    #[test]
    fn test_export_summary() {
        // 2026-03-11 is day 30
        let mut model = model_on((2026, 3, 11));
        model.add_days(2);
        let mut tracker = WeekTracker::default();
        tracker.toggle(model.store_mut(), 0).unwrap();

        let out = render_export(&model, &tracker).unwrap();
        assert!(out.contains("Days counted:  32/150"));
        assert!(out.contains("Calendar days: 30"));
        assert!(out.contains("Adjustment:    +2"));
        assert!(out.contains("Week:          5"));
        assert!(out.contains("[x] Day 30"));
        assert!(out.contains("[ ] Day 60"));
        assert!(out.contains("[M]"));
        assert!(out.contains("(1/7)"));
    }

    #[test]
    fn test_track_toggles_store() {
        let mut model = model_on((2026, 3, 11));
        handle_track(&mut model, "wed").unwrap();
        assert!(WeekTracker::load(model.store()).is_done(2));
        handle_track(&mut model, "2").unwrap();
        assert!(!WeekTracker::load(model.store()).is_done(2));
        assert!(handle_track(&mut model, "someday").is_err());
    }

    #[test]
    fn test_controls_update_model() {
        let mut model = model_on((2026, 3, 11));
        handle_add(&mut model, 3).unwrap();
        handle_week(&mut model).unwrap();
        handle_rest(&mut model).unwrap();
        assert_eq!(model.manual_offset(), 9);
        handle_reset(&mut model).unwrap();
        assert_eq!(model.manual_offset(), 0);
        handle_complete(&mut model, &AppConfig::default()).unwrap();
        assert!(model.current_snapshot().is_complete);
        assert!(model.has_celebrated());
    }

    #[test]
    fn test_status_preview_keeps_real_celebration() {
        let mut preview = model_on((2026, 8, 1)).preview();
        handle_status(&mut preview, &AppConfig::default()).unwrap();

        let store = preview.store().clone();
        let end = NaiveDate::from_ymd_opt(2026, 7, 9).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let mut model = ProgressModel::open(PlanConfig::study_plan(), store, FixedClock(end));
        assert!(model.tick().celebrate);
    }

    #[test]
    fn test_add_extreme_negative() {
        let mut model = model_on((2026, 3, 11));
        handle_add(&mut model, i64::MIN).unwrap();
        assert_eq!(model.manual_offset(), i64::MIN);
        assert_eq!(model.current_snapshot().total_days_counted, 0);
    }
}
