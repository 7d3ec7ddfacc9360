//! History persistence — one small JSON record.
//!
//! RULE: only this module touches the history file. Components see a
//! loaded `HistoryRecord` and never the path.
//!
//! A missing, unreadable, or malformed file is "no history", never a
//! fatal error; write failures are surfaced to the caller, which treats
//! them as best-effort.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RotaResult;
use crate::types::{Person, Task};

/// How many prior runs' selections are retained (FIFO, oldest dropped).
pub const HISTORY_DEPTH: usize = 2;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    /// Help-desk selections from the most recent runs, oldest first.
    /// Names keep their configured casing for readability.
    #[serde(default)]
    pub last_selections: Vec<Vec<String>>,
    /// Most recent task assignments: person key -> 2 folded task labels.
    #[serde(default)]
    pub last_ops: HashMap<String, Vec<String>>,
}

impl HistoryRecord {
    fn truncate_to_depth(&mut self) {
        if self.last_selections.len() > HISTORY_DEPTH {
            let excess = self.last_selections.len() - HISTORY_DEPTH;
            self.last_selections.drain(..excess);
        }
    }
}

pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the prior record. Never fails: anything unreadable becomes
    /// the empty record.
    pub fn load(&self) -> HistoryRecord {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                log::debug!("no readable history at {}: {err}", self.path.display());
                return HistoryRecord::default();
            }
        };
        match serde_json::from_str::<HistoryRecord>(&text) {
            Ok(mut record) => {
                record.truncate_to_depth();
                record
            }
            Err(err) => {
                log::warn!(
                    "malformed history at {}; starting fresh: {err}",
                    self.path.display()
                );
                HistoryRecord::default()
            }
        }
    }

    /// Append the newest selection (keeping only the last
    /// `HISTORY_DEPTH`) and record this run's task assignments. When no
    /// assignments were made, the prior `last_ops` carries forward so
    /// repeat avoidance survives runs with an empty operations pool.
    pub fn save(
        &self,
        selected: &[Person],
        prior: &HistoryRecord,
        assignments: &[(Person, [Task; 2])],
    ) -> RotaResult<()> {
        let mut record = HistoryRecord {
            last_selections: prior.last_selections.clone(),
            last_ops: if assignments.is_empty() {
                prior.last_ops.clone()
            } else {
                assignments
                    .iter()
                    .map(|(person, tasks)| {
                        (person.key(), tasks.iter().map(Task::key).collect())
                    })
                    .collect()
            },
        };
        record
            .last_selections
            .push(selected.iter().map(|p| p.name().to_string()).collect());
        record.truncate_to_depth();

        fs::write(&self.path, serde_json::to_string(&record)?)?;
        Ok(())
    }
}
