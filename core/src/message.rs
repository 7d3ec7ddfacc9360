//! Rendering the day's rotation into the outbound chat message.
//!
//! Pure formatting: deterministic given its inputs. Operations lines
//! follow the assigner's insertion order. The onboarding block only
//! appears when onboarding people were actually selected.

use crate::types::{Person, Task};

pub fn format_message(
    selected: &[Person],
    assignments: &[(Person, [Task; 2])],
    onboarding: &[Person],
    onboarding_type: Option<&str>,
) -> String {
    let mut lines = vec!["🖥️ *Service Desk*".to_string()];
    if selected.is_empty() {
        lines.push("    (none)".to_string());
    } else {
        for person in selected {
            lines.push(format!("    {person}"));
        }
    }

    lines.push(String::new());
    lines.push("⚙️ *Operations*".to_string());
    if assignments.is_empty() {
        lines.push("    (none)".to_string());
    } else {
        for (person, tasks) in assignments {
            lines.push(format!("    {person}"));
            lines.push(format!("        • {}", tasks[0].raw()));
            lines.push(format!("        • {}", tasks[1].raw()));
        }
    }

    if !onboarding.is_empty() {
        let kind = onboarding_type.unwrap_or_default();
        lines.push(String::new());
        lines.push(format!("👋 *Onboarding Support ({kind}):*"));
        for person in onboarding {
            lines.push(format!("    {person}"));
        }
        lines.push("ℹ️ _Class ≤8: 1 support needed | Class 9+: 2 support needed_".to_string());
    }

    lines.join("\n")
}
