//! Operations task assignment.
//!
//! Each remaining person gets exactly 2 tasks, preferring tasks they
//! did not do in the previous run. Repeat avoidance degrades in steps
//! and is never an error; only an empty task list is.

use std::collections::HashMap;

use crate::error::{RotaError, RotaResult};
use crate::rng::DutyRng;
use crate::types::{Person, Task};

/// Tasks per assignee per run.
pub const TASKS_PER_PERSON: usize = 2;

/// Assign 2 tasks to every person in `remaining`, independently:
///
/// - one global task: that task twice (degenerate case).
/// - fresh = tasks whose folded label is not in the person's previous
///   labels.
///   - 2+ fresh: 2 distinct uniform draws from fresh.
///   - 1 fresh: the fresh task is guaranteed; the second is drawn from
///     the full list minus that task (stale repeats allowed), then the
///     pair order is shuffled.
///   - 0 fresh: 2 distinct uniform draws from the full list.
///
/// The output preserves the order of `remaining`; the formatter and
/// history store both rely on that.
pub fn assign_tasks(
    remaining: &[Person],
    tasks: &[Task],
    last_ops: &HashMap<String, Vec<String>>,
    rng: &mut DutyRng,
) -> RotaResult<Vec<(Person, [Task; TASKS_PER_PERSON])>> {
    if remaining.is_empty() {
        return Ok(Vec::new());
    }
    if tasks.is_empty() {
        return Err(RotaError::NoTasksConfigured {
            assignees: remaining.len(),
        });
    }
    if tasks.len() == 1 {
        return Ok(remaining
            .iter()
            .map(|p| (p.clone(), [tasks[0].clone(), tasks[0].clone()]))
            .collect());
    }

    let mut assignments = Vec::with_capacity(remaining.len());
    for person in remaining {
        let prev = last_ops.get(&person.key());
        let fresh: Vec<Task> = tasks
            .iter()
            .filter(|t| prev.is_none_or(|labels| !labels.iter().any(|l| *l == t.key())))
            .cloned()
            .collect();

        let pair: [Task; TASKS_PER_PERSON] = if fresh.len() >= 2 {
            let picked = rng.sample(&fresh, 2);
            [picked[0].clone(), picked[1].clone()]
        } else if fresh.len() == 1 {
            // Guarantee the single fresh task; draw the second from
            // everything else, then randomize the pair's order.
            let pool: Vec<Task> = tasks
                .iter()
                .filter(|t| t.raw() != fresh[0].raw())
                .cloned()
                .collect();
            let second = match rng.choose(&pool) {
                Some(task) => task.clone(),
                // Only reachable when the task list holds duplicates.
                None => fresh[0].clone(),
            };
            let mut pair = [fresh[0].clone(), second];
            rng.shuffle(&mut pair);
            pair
        } else {
            // Person did every task last run; repeat avoidance bypassed.
            let picked = rng.sample(tasks, 2);
            [picked[0].clone(), picked[1].clone()]
        };

        assignments.push((person.clone(), pair));
    }
    Ok(assignments)
}
