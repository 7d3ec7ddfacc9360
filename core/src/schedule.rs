//! Day resolution and trigger gating.
//!
//! The scheduler is invoked by an external timer; this module decides
//! whether the invocation falls inside the run window and which day's
//! rules apply. A simulated day name overrides the clock for testing.

use chrono::{DateTime, Datelike, Local, Timelike, Weekday};

use crate::config::RotaConfig;
use crate::types::fold;

/// The trigger window: weekdays, 09:00-09:09 local time.
const RUN_HOUR: u32 = 9;
const RUN_WINDOW_MINUTES: u32 = 10;

/// Day name governing today's rules: the simulation override when set,
/// otherwise the local weekday name ("Monday", ...).
pub fn current_day_name(config: &RotaConfig, now: DateTime<Local>) -> String {
    if let Some(day) = &config.simulate_day {
        log::debug!("simulating day: {day}");
        return day.clone();
    }
    now.format("%A").to_string()
}

/// Whether this invocation should produce a rotation at all.
pub fn should_run_now(config: &RotaConfig, now: DateTime<Local>) -> bool {
    if config.force_run {
        return true;
    }
    let weekday = !matches!(now.weekday(), Weekday::Sat | Weekday::Sun);
    weekday && now.hour() == RUN_HOUR && now.minute() < RUN_WINDOW_MINUTES
}

/// Whether only 2 people (not all remaining) get operations today.
pub fn is_reduced_ops_day(config: &RotaConfig, day_name: &str) -> bool {
    let today = fold(day_name);
    config.reduced_ops_days.iter().any(|d| fold(d) == today)
}

/// Onboarding type scheduled for the given day, or None.
/// First matching schedule entry wins; day names match case-insensitively.
pub fn onboarding_type_for(config: &RotaConfig, day_name: &str) -> Option<String> {
    let today = fold(day_name);
    config
        .onboarding_schedule
        .iter()
        .find(|(day, _)| fold(day) == today)
        .map(|(_, kind)| kind.clone())
}
