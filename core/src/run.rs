//! One scheduled rotation run, start to finish.
//!
//! PIPELINE (fixed order):
//!   1. Load history, resolve exclusions.
//!   2. Help-desk selection.
//!   3. Reduced-operations down-select, when today calls for it.
//!   4. Task assignment for everyone still in the pool.
//!   5. Onboarding selection, when scheduled today.
//!   6. Format, deliver, persist.
//!
//! Only configuration errors propagate. Delivery and persistence
//! failures are logged and swallowed so one flaky collaborator never
//! takes down the whole run.

use chrono::{DateTime, Local};

use crate::{
    assigner, exclusion, message, onboarding, schedule, selector,
    config::RotaConfig,
    error::{RotaError, RotaResult},
    history::HistoryStore,
    rng::{DutySlot, RngBank},
    sink::MessageSink,
    types::{Person, Task},
};

/// Everything one run produced, for logging and inspection.
#[derive(Debug)]
pub struct RunReport {
    pub day: String,
    pub selected: Vec<Person>,
    pub assignments: Vec<(Person, [Task; 2])>,
    pub onboarding: Vec<Person>,
    pub onboarding_type: Option<String>,
    pub message: String,
}

pub fn run_once(
    config: &RotaConfig,
    store: &HistoryStore,
    sink: &dyn MessageSink,
    bank: &RngBank,
    now: DateTime<Local>,
) -> RotaResult<RunReport> {
    if config.roster.is_empty() {
        return Err(RotaError::NoPeopleConfigured);
    }

    let day = schedule::current_day_name(config, now);
    let prior = store.load();

    let repeat_excluded = exclusion::repeat_excluded(&prior);
    if !repeat_excluded.is_empty() {
        log::info!(
            "excluding from help desk (selected twice in a row): {}",
            join_keys(&repeat_excluded)
        );
    }

    let (day_excluded_names, day_excluded_keys) = exclusion::day_excluded(config, &day);
    if !day_excluded_names.is_empty() {
        log::info!(
            "excluding from today's rotation (unavailable on {day}): {}",
            day_excluded_names.join(", ")
        );
    }

    let mut help_desk_rng = bank.for_duty(DutySlot::HelpDesk);
    let selection = selector::select_help_desk(
        &config.roster,
        &day_excluded_keys,
        &repeat_excluded,
        &mut help_desk_rng,
    );

    let mut remaining = selection.remaining;
    if schedule::is_reduced_ops_day(config, &day) {
        let mut reduced_rng = bank.for_duty(DutySlot::ReducedOps);
        remaining = selector::down_select_for_reduced_ops(remaining, &mut reduced_rng);
        log::info!("reduced operations day: {} assignees", remaining.len());
    }

    let mut ops_rng = bank.for_duty(DutySlot::Operations);
    let assignments = assigner::assign_tasks(&remaining, &config.tasks, &prior.last_ops, &mut ops_rng)?;

    let onboarding_type = schedule::onboarding_type_for(config, &day);
    let onboarding = match &onboarding_type {
        Some(kind) => {
            let mut onboarding_rng = bank.for_duty(DutySlot::Onboarding);
            let picked =
                onboarding::select_onboarding(&config.roster, &day_excluded_keys, &mut onboarding_rng);
            log::info!("onboarding ({kind}): {}", join_people(&picked));
            picked
        }
        None => Vec::new(),
    };

    let message = message::format_message(
        &selection.selected,
        &assignments,
        &onboarding,
        onboarding_type.as_deref(),
    );

    if let Err(err) = sink.send(&message) {
        log::warn!("delivery failed: {err}");
    }

    if let Err(err) = store.save(&selection.selected, &prior, &assignments) {
        log::warn!("could not save selection history: {err}");
    }

    Ok(RunReport {
        day,
        selected: selection.selected,
        assignments,
        onboarding,
        onboarding_type,
        message,
    })
}

fn join_people(people: &[Person]) -> String {
    people
        .iter()
        .map(Person::name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_keys(keys: &std::collections::HashSet<String>) -> String {
    let mut sorted: Vec<&str> = keys.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(", ")
}
