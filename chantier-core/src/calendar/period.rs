//! Per-day task period resolution.

use chrono::NaiveDate;
use serde::Serialize;

use crate::palette::collaborator_color;
use crate::project::{Project, TaskStatus};

/// Corner rounding for a rendered period segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderStyle {
    FullyRounded,
    RoundedLeft,
    RoundedRight,
    Square,
}

/// A per-day rendering descriptor for a task overlapping that day.
///
/// Derived and ephemeral: recomputed in full whenever the displayed month or
/// the selected project changes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPeriod {
    pub task_id: i64,
    pub task_title: String,
    pub collaborator_id: i64,
    pub color: &'static str,
    pub is_start: bool,
    pub is_end: bool,
    pub is_middle: bool,
    pub display_text: String,
}

impl TaskPeriod {
    pub fn border_style(&self) -> BorderStyle {
        match (self.is_start, self.is_end) {
            (true, true) => BorderStyle::FullyRounded,
            (true, false) => BorderStyle::RoundedLeft,
            (false, true) => BorderStyle::RoundedRight,
            (false, false) => BorderStyle::Square,
        }
    }
}

/// Resolve the periods to render on `day` for the selected project.
///
/// Only tasks whose status is "En cours" produce a period: "À faire" and
/// "Terminée" tasks never render on the calendar even when their dates
/// overlap the day. Periods come out in collaborator order, then task order
/// within each collaborator, nothing else sorts them.
pub fn resolve_periods(project: Option<&Project>, day: NaiveDate) -> Vec<TaskPeriod> {
    let Some(project) = project else {
        return Vec::new();
    };

    let mut periods = Vec::new();

    for collaborator in &project.collaborators {
        for task in &collaborator.tasks {
            if task.status != TaskStatus::InProgress {
                continue;
            }
            if day < task.start_date || day > task.end_date {
                continue;
            }

            let is_start = day == task.start_date;
            let is_end = day == task.end_date;

            // The start check comes first, so a single-day task always gets
            // the start label, never "Fin:".
            let display_text = if is_start {
                format!("{} - {}", collaborator.first_name, task.title)
            } else if is_end {
                format!("Fin: {}", task.title)
            } else {
                format!("{} - {}", collaborator.first_name, task.title)
            };

            periods.push(TaskPeriod {
                task_id: task.id,
                task_title: task.title.clone(),
                collaborator_id: collaborator.id,
                color: collaborator_color(collaborator.id),
                is_start,
                is_end,
                is_middle: !is_start && !is_end,
                display_text,
            });
        }
    }

    periods
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Collaborator, Task};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: i64, title: &str, start: NaiveDate, end: NaiveDate, status: TaskStatus) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            start_date: start,
            end_date: end,
            status,
            collaborator_id: 0,
            project_id: 1,
        }
    }

    fn collaborator(id: i64, first_name: &str, tasks: Vec<Task>) -> Collaborator {
        Collaborator {
            id,
            last_name: "Martin".to_string(),
            first_name: first_name.to_string(),
            email: format!("{}@email.com", first_name.to_lowercase()),
            project_id: 1,
            tasks,
        }
    }

    fn project(collaborators: Vec<Collaborator>) -> Project {
        Project {
            id: 1,
            author: "Jean Dupont".to_string(),
            title: "Site E-commerce".to_string(),
            description: String::new(),
            start_date: day(2024, 1, 15),
            end_date: day(2024, 6, 30),
            collaborators,
        }
    }

    fn sophie_project() -> Project {
        project(vec![collaborator(
            1,
            "Sophie",
            vec![task(
                2,
                "Intégration Frontend",
                day(2024, 2, 16),
                day(2024, 4, 15),
                TaskStatus::InProgress,
            )],
        )])
    }

    #[test]
    fn test_no_project_resolves_to_empty() {
        assert!(resolve_periods(None, day(2024, 2, 16)).is_empty());
    }

    #[test]
    fn test_start_day() {
        let project = sophie_project();
        let periods = resolve_periods(Some(&project), day(2024, 2, 16));

        assert_eq!(periods.len(), 1);
        let period = &periods[0];
        assert!(period.is_start);
        assert!(!period.is_end);
        assert!(!period.is_middle);
        assert_eq!(period.display_text, "Sophie - Intégration Frontend");
        assert_eq!(period.border_style(), BorderStyle::RoundedLeft);
    }

    #[test]
    fn test_end_day() {
        let project = sophie_project();
        let periods = resolve_periods(Some(&project), day(2024, 4, 15));

        assert_eq!(periods.len(), 1);
        let period = &periods[0];
        assert!(!period.is_start);
        assert!(period.is_end);
        assert_eq!(period.display_text, "Fin: Intégration Frontend");
        assert_eq!(period.border_style(), BorderStyle::RoundedRight);
    }

    #[test]
    fn test_middle_day() {
        let project = sophie_project();
        let periods = resolve_periods(Some(&project), day(2024, 3, 1));

        assert_eq!(periods.len(), 1);
        let period = &periods[0];
        assert!(period.is_middle);
        assert_eq!(period.display_text, "Sophie - Intégration Frontend");
        assert_eq!(period.border_style(), BorderStyle::Square);
    }

    #[test]
    fn test_days_outside_range_resolve_to_empty() {
        let project = sophie_project();
        assert!(resolve_periods(Some(&project), day(2024, 2, 15)).is_empty());
        assert!(resolve_periods(Some(&project), day(2024, 4, 16)).is_empty());
    }

    #[test]
    fn test_only_in_progress_tasks_render() {
        let overlap = day(2024, 3, 1);
        let project = project(vec![collaborator(
            1,
            "Sophie",
            vec![
                task(1, "Design", day(2024, 2, 1), day(2024, 3, 15), TaskStatus::Done),
                task(2, "Auth", day(2024, 2, 1), day(2024, 3, 15), TaskStatus::Todo),
            ],
        )]);

        assert!(resolve_periods(Some(&project), overlap).is_empty());
    }

    #[test]
    fn test_single_day_task_gets_start_label() {
        let d = day(2024, 3, 7);
        let project = project(vec![collaborator(
            1,
            "Sophie",
            vec![task(5, "Revue", d, d, TaskStatus::InProgress)],
        )]);

        let periods = resolve_periods(Some(&project), d);
        assert_eq!(periods.len(), 1);
        let period = &periods[0];
        assert!(period.is_start && period.is_end);
        assert!(!period.is_middle);
        assert_eq!(period.display_text, "Sophie - Revue");
        assert_eq!(period.border_style(), BorderStyle::FullyRounded);
    }

    #[test]
    fn test_periods_keep_collaborator_then_task_order() {
        let overlap = day(2024, 3, 1);
        let project = project(vec![
            collaborator(
                2,
                "Pierre",
                vec![
                    task(3, "API Backend", day(2024, 2, 1), day(2024, 5, 1), TaskStatus::InProgress),
                    task(4, "Tests", day(2024, 2, 20), day(2024, 3, 10), TaskStatus::InProgress),
                ],
            ),
            collaborator(
                1,
                "Sophie",
                vec![task(
                    2,
                    "Intégration Frontend",
                    day(2024, 2, 16),
                    day(2024, 4, 15),
                    TaskStatus::InProgress,
                )],
            ),
        ]);

        let periods = resolve_periods(Some(&project), overlap);
        let ids: Vec<i64> = periods.iter().map(|p| p.task_id).collect();
        assert_eq!(ids, vec![3, 4, 2]);
    }

    #[test]
    fn test_color_comes_from_collaborator_palette() {
        let project = sophie_project();
        let periods = resolve_periods(Some(&project), day(2024, 3, 1));
        // collaborator id 1 -> second palette entry
        assert_eq!(periods[0].color, "#EF4444");
    }

    #[test]
    fn test_inclusive_bounds_match_task_dates() {
        let project = sophie_project();
        let task = &project.collaborators[0].tasks[0];

        let mut d = task.start_date;
        while d <= task.end_date {
            assert_eq!(resolve_periods(Some(&project), d).len(), 1, "missing on {d}");
            d = d + chrono::Duration::days(1);
        }
    }
}
