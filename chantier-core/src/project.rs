//! Project, collaborator and task domain types.
//!
//! Field names serialize in the backend's French camelCase wire format
//! (`titre`, `auteur`, `dateDebut`, ...) and dates as `YYYY-MM-DD` strings,
//! so payloads are interchangeable with the original REST API.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task status, serialized with the exact wire labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "À faire")]
    Todo,
    #[serde(rename = "En cours")]
    InProgress,
    #[serde(rename = "Terminée")]
    Done,
}

impl TaskStatus {
    /// The wire/display label.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "À faire",
            TaskStatus::InProgress => "En cours",
            TaskStatus::Done => "Terminée",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A unit of work belonging to one collaborator and one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "dateDebut")]
    pub start_date: NaiveDate,
    #[serde(rename = "dateFin")]
    pub end_date: NaiveDate,
    #[serde(rename = "statut")]
    pub status: TaskStatus,
    #[serde(rename = "collaborateurId")]
    pub collaborator_id: i64,
    #[serde(rename = "projetId")]
    pub project_id: i64,
}

/// A person assigned to a project, owning zero or more tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: i64,
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    pub email: String,
    #[serde(rename = "projetId")]
    pub project_id: i64,
    #[serde(rename = "taches", default)]
    pub tasks: Vec<Task>,
}

/// Top-level work item with a title, author, date range and collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    #[serde(rename = "auteur")]
    pub author: String,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "dateDebut")]
    pub start_date: NaiveDate,
    #[serde(rename = "dateFin")]
    pub end_date: NaiveDate,
    #[serde(rename = "collaborateurs", default)]
    pub collaborators: Vec<Collaborator>,
}

impl Project {
    /// All tasks across all collaborators, in collaborator order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.collaborators.iter().flat_map(|c| c.tasks.iter())
    }

    pub fn total_tasks(&self) -> usize {
        self.collaborators.iter().map(|c| c.tasks.len()).sum()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_task_serializes_to_wire_format() {
        let task = Task {
            id: 2,
            title: "Intégration Frontend".to_string(),
            description: "Dev des composants".to_string(),
            start_date: day(2024, 2, 16),
            end_date: day(2024, 4, 15),
            status: TaskStatus::InProgress,
            collaborator_id: 1,
            project_id: 1,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["titre"], "Intégration Frontend");
        assert_eq!(json["dateDebut"], "2024-02-16");
        assert_eq!(json["dateFin"], "2024-04-15");
        assert_eq!(json["statut"], "En cours");
        assert_eq!(json["collaborateurId"], 1);
    }

    #[test]
    fn test_project_deserializes_from_backend_payload() {
        let json = r#"{
            "id": 1,
            "auteur": "Jean Dupont",
            "titre": "Site E-commerce",
            "description": "Développement d'un site e-commerce moderne",
            "dateDebut": "2024-01-15",
            "dateFin": "2024-06-30",
            "collaborateurs": [
                {
                    "id": 1,
                    "nom": "Martin",
                    "prenom": "Sophie",
                    "email": "sophie.martin@email.com",
                    "projetId": 1,
                    "taches": [
                        {
                            "id": 2,
                            "titre": "Intégration Frontend",
                            "description": "",
                            "dateDebut": "2024-02-16",
                            "dateFin": "2024-04-15",
                            "statut": "En cours",
                            "collaborateurId": 1,
                            "projetId": 1
                        }
                    ]
                }
            ]
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.author, "Jean Dupont");
        assert_eq!(project.start_date, day(2024, 1, 15));
        assert_eq!(project.collaborators[0].first_name, "Sophie");
        assert_eq!(project.collaborators[0].tasks[0].status, TaskStatus::InProgress);
    }

    #[test]
    fn test_status_rejects_unknown_label() {
        assert!(serde_json::from_str::<TaskStatus>("\"En pause\"").is_err());
    }

    #[test]
    fn test_collaborators_default_to_empty() {
        let json = r#"{
            "id": 9,
            "auteur": "A",
            "titre": "T",
            "dateDebut": "2024-01-01",
            "dateFin": "2024-02-01"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.collaborators.is_empty());
        assert_eq!(project.total_tasks(), 0);
    }
}
