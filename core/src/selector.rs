//! Help-desk selection.
//!
//! Hard exclusions remove people from the whole day; the repeat
//! exclusion is a fairness heuristic only and is discarded whenever it
//! would leave the help desk understaffed.

use std::collections::HashSet;

use crate::rng::DutyRng;
use crate::types::Person;

/// People on help-desk per run.
pub const HELP_DESK_SIZE: usize = 2;

/// Operations assignees on a reduced-operations day.
pub const REDUCED_OPS_SIZE: usize = 2;

#[derive(Debug)]
pub struct HelpDeskSelection {
    /// Up to `HELP_DESK_SIZE` people, in draw order.
    pub selected: Vec<Person>,
    /// Everyone available today who was not drawn, in roster order.
    /// This is `available - selected`, not `eligible - selected`: a
    /// person re-included by the fallback still lands here if unpicked.
    pub remaining: Vec<Person>,
}

/// Draw up to 2 people for help-desk from the roster.
///
/// 1. available = roster minus hard exclusions (deduplicated by key).
/// 2. eligible  = available minus repeat exclusions.
/// 3. Fewer than 2 eligible: drop the repeat exclusion for this run.
/// 4. Uniform draw without replacement of min(2, |eligible|).
pub fn select_help_desk(
    roster: &[Person],
    day_excluded: &HashSet<String>,
    repeat_excluded: &HashSet<String>,
    rng: &mut DutyRng,
) -> HelpDeskSelection {
    let mut seen = HashSet::new();
    let available: Vec<&Person> = roster
        .iter()
        .filter(|p| seen.insert(p.key()) && !day_excluded.contains(&p.key()))
        .collect();

    let mut eligible: Vec<&Person> = available
        .iter()
        .copied()
        .filter(|p| !repeat_excluded.contains(&p.key()))
        .collect();

    if eligible.len() < HELP_DESK_SIZE && eligible.len() < available.len() {
        log::info!(
            "only {} eligible after repeat exclusion; re-including recent assignees",
            eligible.len()
        );
        eligible = available.clone();
    }

    let take = HELP_DESK_SIZE.min(eligible.len());
    let selected: Vec<Person> = rng
        .sample(&eligible, take)
        .into_iter()
        .cloned()
        .collect();

    let selected_keys: HashSet<String> = selected.iter().map(Person::key).collect();
    let remaining: Vec<Person> = available
        .into_iter()
        .filter(|p| !selected_keys.contains(&p.key()))
        .cloned()
        .collect();

    HelpDeskSelection { selected, remaining }
}

/// Reduced-operations days: when more than `REDUCED_OPS_SIZE` people
/// remain, exactly that many are drawn to receive tasks; the rest get
/// none today.
pub fn down_select_for_reduced_ops(remaining: Vec<Person>, rng: &mut DutyRng) -> Vec<Person> {
    if remaining.len() <= REDUCED_OPS_SIZE {
        return remaining;
    }
    rng.sample(&remaining, REDUCED_OPS_SIZE)
}
