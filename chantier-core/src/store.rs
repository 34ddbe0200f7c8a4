//! In-memory project store.
//!
//! The explicit-state counterpart of the backend the UI talks to: CRUD,
//! 1-based offset pagination, paginated search and a selected-project slot.
//! The selection replaces the front end's observable subject; callers mutate
//! it directly and recompute their views.

use chrono::NaiveDate;

use crate::error::{ChantierError, ChantierResult};
use crate::project::{Collaborator, Project, Task, TaskStatus};

/// One page of projects plus the total count across all pages.
#[derive(Debug, Clone)]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    pub total: usize,
}

/// Fields for creating a project. Collaborators always start empty.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub author: String,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Partial update: only the provided fields are touched.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub collaborators: Option<Vec<Collaborator>>,
}

#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    selected: Option<i64>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        ProjectStore { projects, selected: None }
    }

    /// Store seeded with the demo fixture the mock backend ships.
    pub fn with_sample_data() -> Self {
        Self::with_projects(sample_projects())
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// One page of projects; `page` is 1-based.
    pub fn list(&self, page: usize, limit: usize) -> ProjectPage {
        let start = page.saturating_sub(1) * limit;
        let projects = self.projects.iter().skip(start).take(limit).cloned().collect();

        ProjectPage { projects, total: self.projects.len() }
    }

    pub fn get(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Create a project with the next free id and no collaborators.
    pub fn create(&mut self, new: NewProject) -> &Project {
        let id = self.projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        self.projects.push(Project {
            id,
            author: new.author,
            title: new.title,
            description: new.description,
            start_date: new.start_date,
            end_date: new.end_date,
            collaborators: Vec::new(),
        });

        let last = self.projects.len() - 1;
        &self.projects[last]
    }

    /// Merge the provided fields into an existing project.
    pub fn update(&mut self, id: i64, changes: ProjectUpdate) -> ChantierResult<&Project> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ChantierError::ProjectNotFound(id))?;

        if let Some(author) = changes.author {
            project.author = author;
        }
        if let Some(title) = changes.title {
            project.title = title;
        }
        if let Some(description) = changes.description {
            project.description = description;
        }
        if let Some(start_date) = changes.start_date {
            project.start_date = start_date;
        }
        if let Some(end_date) = changes.end_date {
            project.end_date = end_date;
        }
        if let Some(collaborators) = changes.collaborators {
            project.collaborators = collaborators;
        }

        Ok(project)
    }

    /// Remove a project; returns whether anything was deleted.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);

        if self.selected == Some(id) {
            self.selected = None;
        }

        self.projects.len() != before
    }

    /// Case-insensitive substring search over title and author, paginated.
    pub fn search(&self, query: &str, page: usize, limit: usize) -> ProjectPage {
        let query = query.to_lowercase();
        let matches: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&query) || p.author.to_lowercase().contains(&query)
            })
            .collect();

        let total = matches.len();
        let start = page.saturating_sub(1) * limit;
        let projects = matches.into_iter().skip(start).take(limit).cloned().collect();

        ProjectPage { projects, total }
    }

    /// Select a project (or clear the selection with `None`).
    pub fn select(&mut self, id: Option<i64>) -> ChantierResult<()> {
        if let Some(id) = id
            && self.get(id).is_none()
        {
            return Err(ChantierError::ProjectNotFound(id));
        }

        self.selected = id;
        Ok(())
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.and_then(|id| self.get(id))
    }

    /// All tasks of a project, flattened in collaborator order.
    pub fn tasks_for_project(&self, id: i64) -> Vec<&Task> {
        match self.get(id) {
            Some(project) => project.tasks().collect(),
            None => Vec::new(),
        }
    }
}

// =============================================================================
// Demo fixture
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// The three demo projects the mock backend ships.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            author: "Jean Dupont".to_string(),
            title: "Site E-commerce".to_string(),
            description: "Développement d'un site e-commerce moderne".to_string(),
            start_date: date(2024, 1, 15),
            end_date: date(2024, 6, 30),
            collaborators: vec![
                Collaborator {
                    id: 1,
                    last_name: "Martin".to_string(),
                    first_name: "Sophie".to_string(),
                    email: "sophie.martin@email.com".to_string(),
                    project_id: 1,
                    tasks: vec![
                        Task {
                            id: 1,
                            title: "Design UI/UX".to_string(),
                            description: "Création des maquettes".to_string(),
                            start_date: date(2024, 1, 15),
                            end_date: date(2024, 2, 15),
                            status: TaskStatus::Done,
                            collaborator_id: 1,
                            project_id: 1,
                        },
                        Task {
                            id: 2,
                            title: "Intégration Frontend".to_string(),
                            description: "Dev des composants React".to_string(),
                            start_date: date(2024, 2, 16),
                            end_date: date(2024, 4, 15),
                            status: TaskStatus::InProgress,
                            collaborator_id: 1,
                            project_id: 1,
                        },
                    ],
                },
                Collaborator {
                    id: 2,
                    last_name: "Dubois".to_string(),
                    first_name: "Pierre".to_string(),
                    email: "pierre.dubois@email.com".to_string(),
                    project_id: 1,
                    tasks: vec![Task {
                        id: 3,
                        title: "API Backend".to_string(),
                        description: "Développement des endpoints".to_string(),
                        start_date: date(2024, 2, 1),
                        end_date: date(2024, 5, 1),
                        status: TaskStatus::InProgress,
                        collaborator_id: 2,
                        project_id: 1,
                    }],
                },
            ],
        },
        Project {
            id: 2,
            author: "Marie Leblanc".to_string(),
            title: "App Mobile Banking".to_string(),
            description: "Application mobile pour services bancaires".to_string(),
            start_date: date(2024, 3, 1),
            end_date: date(2024, 8, 31),
            collaborators: vec![Collaborator {
                id: 3,
                last_name: "Garcia".to_string(),
                first_name: "Carlos".to_string(),
                email: "carlos.garcia@email.com".to_string(),
                project_id: 2,
                tasks: vec![
                    Task {
                        id: 4,
                        title: "Architecture Mobile".to_string(),
                        description: "Setup du projet Flutter".to_string(),
                        start_date: date(2024, 3, 1),
                        end_date: date(2024, 3, 15),
                        status: TaskStatus::Done,
                        collaborator_id: 3,
                        project_id: 2,
                    },
                    Task {
                        id: 5,
                        title: "Authentification".to_string(),
                        description: "Module de connexion sécurisée".to_string(),
                        start_date: date(2024, 3, 16),
                        end_date: date(2024, 4, 30),
                        status: TaskStatus::Todo,
                        collaborator_id: 3,
                        project_id: 2,
                    },
                ],
            }],
        },
        Project {
            id: 3,
            author: "Paul Moreau".to_string(),
            title: "Dashboard Analytics".to_string(),
            description: "Tableau de bord pour l'analyse de données".to_string(),
            start_date: date(2024, 2, 1),
            end_date: date(2024, 7, 15),
            collaborators: vec![Collaborator {
                id: 4,
                last_name: "Chen".to_string(),
                first_name: "Li".to_string(),
                email: "li.chen@email.com".to_string(),
                project_id: 3,
                tasks: vec![Task {
                    id: 6,
                    title: "Visualisation données".to_string(),
                    description: "Graphiques et charts".to_string(),
                    start_date: date(2024, 2, 1),
                    end_date: date(2024, 5, 1),
                    status: TaskStatus::InProgress,
                    collaborator_id: 4,
                    project_id: 3,
                }],
            }],
        },
    ]
}
