//! Onboarding support selection.
//!
//! Independent of help-desk and operations: the same person may hold
//! several duties on an onboarding day. Only hard exclusions apply.

use std::collections::HashSet;

use crate::rng::DutyRng;
use crate::types::Person;

/// People on onboarding support per scheduled day.
pub const ONBOARDING_SIZE: usize = 2;

/// Draw `min(2, |available|)` people from the roster minus the day's
/// hard exclusions. The repeat exclusion deliberately does not apply.
pub fn select_onboarding(
    roster: &[Person],
    day_excluded: &HashSet<String>,
    rng: &mut DutyRng,
) -> Vec<Person> {
    let mut seen = HashSet::new();
    let available: Vec<&Person> = roster
        .iter()
        .filter(|p| seen.insert(p.key()) && !day_excluded.contains(&p.key()))
        .collect();

    rng.sample(&available, ONBOARDING_SIZE)
        .into_iter()
        .cloned()
        .collect()
}
