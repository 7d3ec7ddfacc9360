//! Exclusion resolution: who sits out, and how firmly.
//!
//! Two independent computations feed the selector:
//!   - repeat exclusion (soft): picked for help-desk in both of the
//!     last two runs; overridable when staffing is short.
//!   - day exclusion (hard): configured as unavailable today; removed
//!     from every duty.

use std::collections::HashSet;

use crate::config::RotaConfig;
use crate::history::{HistoryRecord, HISTORY_DEPTH};
use crate::types::fold;

/// People selected in both of the last two runs, as folded keys.
/// Empty unless a full `HISTORY_DEPTH` of selections exists.
pub fn repeat_excluded(record: &HistoryRecord) -> HashSet<String> {
    if record.last_selections.len() < HISTORY_DEPTH {
        return HashSet::new();
    }
    let older: HashSet<String> = record.last_selections[0].iter().map(|n| fold(n)).collect();
    record.last_selections[1]
        .iter()
        .map(|n| fold(n))
        .filter(|key| older.contains(key))
        .collect()
}

/// Hard exclusions for the given day: the configured names (for
/// logging) and their folded keys (for matching).
pub fn day_excluded(config: &RotaConfig, day_name: &str) -> (Vec<String>, HashSet<String>) {
    let names = config.day_exclusions_for(day_name).to_vec();
    let keys = names.iter().map(|n| fold(n)).collect();
    (names, keys)
}
