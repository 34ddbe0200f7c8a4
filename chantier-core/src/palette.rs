//! Deterministic colors for collaborators and task statuses.

use crate::project::TaskStatus;

/// Fixed palette; a collaborator's color is `palette[id mod 8]`.
pub const COLLABORATOR_PALETTE: [&str; 8] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#06B6D4", "#84CC16",
];

/// Palette lookup keyed by collaborator id. Pure, no state.
pub fn collaborator_color(id: i64) -> &'static str {
    let index = id.rem_euclid(COLLABORATOR_PALETTE.len() as i64) as usize;
    COLLABORATOR_PALETTE[index]
}

/// Badge color for a task status.
pub fn status_color(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "#6B7280",
        TaskStatus::InProgress => "#3B82F6",
        TaskStatus::Done => "#10B981",
    }
}
