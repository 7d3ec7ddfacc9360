//! Run configuration, resolved once from environment-style key/value
//! pairs into an explicit structure.
//!
//! RULE: components never read the environment themselves. The binary
//! builds one `RotaConfig` up front and passes it down; tests build
//! configs from a lookup closure without touching process state.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::types::{fold, Person, Task};

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const DEFAULT_HISTORY_FILE: &str = "selection_history.json";

#[derive(Debug, Clone)]
pub struct RotaConfig {
    /// Ordered roster of unique people.
    pub roster: Vec<Person>,
    /// Operations task list.
    pub tasks: Vec<Task>,
    /// Per-day hard exclusions, keyed by upper-case day name.
    pub day_exclusions: HashMap<String, Vec<String>>,
    /// Days on which only 2 people receive operations tasks.
    pub reduced_ops_days: Vec<String>,
    /// Ordered `(day, onboarding type)` schedule; first match wins.
    pub onboarding_schedule: Vec<(String, String)>,
    /// Run even outside the scheduled trigger window.
    pub force_run: bool,
    /// Day-name override for deterministic testing.
    pub simulate_day: Option<String>,
    /// Location of the persisted history record.
    pub history_path: PathBuf,
    /// Delivery endpoint; None means log-only delivery.
    pub webhook_url: Option<String>,
    /// Fixed master seed; None means seed from OS entropy.
    pub master_seed: Option<u64>,
}

impl Default for RotaConfig {
    fn default() -> Self {
        Self {
            roster: Vec::new(),
            tasks: Vec::new(),
            day_exclusions: HashMap::new(),
            reduced_ops_days: Vec::new(),
            onboarding_schedule: Vec::new(),
            force_run: false,
            simulate_day: None,
            history_path: PathBuf::from(DEFAULT_HISTORY_FILE),
            webhook_url: None,
            master_seed: None,
        }
    }
}

impl RotaConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key/value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();

        let mut day_exclusions = HashMap::new();
        for day in DAY_NAMES {
            let key = format!("{}_EXCLUSIONS", day.to_uppercase());
            let names = parse_list(&get(&key));
            if !names.is_empty() {
                day_exclusions.insert(day.to_uppercase(), names);
            }
        }

        let simulate_day = {
            let value = get("SIMULATE_DAY");
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        let webhook_url = {
            let value = get("SLACK_WEBHOOK_URL");
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        let history_path = {
            let value = get("HISTORY_FILE");
            let trimmed = value.trim();
            if trimmed.is_empty() {
                PathBuf::from(DEFAULT_HISTORY_FILE)
            } else {
                PathBuf::from(trimmed)
            }
        };

        Self {
            roster: parse_list(&get("PEOPLE")).into_iter().map(Person::new).collect(),
            tasks: parse_list(&get("OPERATIONS")).into_iter().map(Task::new).collect(),
            day_exclusions,
            reduced_ops_days: parse_list(&get("REDUCED_OPS_DAYS")),
            onboarding_schedule: parse_schedule(&get("ONBOARDING_SCHEDULE")),
            force_run: truthy(&get("FORCE_RUN")),
            simulate_day,
            history_path,
            webhook_url,
            master_seed: get("ROTA_SEED").trim().parse().ok(),
        }
    }

    /// Hard-exclusion names configured for the given day, if any.
    pub fn day_exclusions_for(&self, day_name: &str) -> &[String] {
        self.day_exclusions
            .get(&day_name.trim().to_uppercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Split a comma- or newline-separated list, trimming entries and
/// dropping empties.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .replace('\n', ",")
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Truthiness for flag-style values: 1/true/yes/y/on.
pub fn truthy(value: &str) -> bool {
    matches!(fold(value).as_str(), "1" | "true" | "yes" | "y" | "on")
}

/// Parse a `"Day:Type,Day:Type,..."` schedule string, preserving order.
/// Entries without a `:` are skipped.
pub fn parse_schedule(value: &str) -> Vec<(String, String)> {
    value
        .split(',')
        .filter_map(|entry| {
            let (day, kind) = entry.trim().split_once(':')?;
            Some((day.trim().to_string(), kind.trim().to_string()))
        })
        .collect()
}
