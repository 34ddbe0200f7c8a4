//! Project CRUD endpoints (`/api/projets`).

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use chantier_core::{ChantierError, Collaborator, NewProject, Project, ProjectUpdate, dates};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/projets", get(list_projects).post(create_project))
        .route("/api/projets/search", get(search_projects))
        .route(
            "/api/projets/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    10
}

fn default_size() -> usize {
    5
}

/// Response shape of the list and search endpoints.
#[derive(Serialize)]
pub struct ProjectListResponse {
    pub projets: Vec<Project>,
    pub total: usize,
}

#[derive(Deserialize)]
struct ListParams {
    #[serde(default = "default_page")]
    page: usize,
    #[serde(default = "default_limit")]
    limit: usize,
}

/// GET /api/projets - paginated project list
async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ProjectListResponse> {
    let page = state.store().list(params.page, params.limit);

    Json(ProjectListResponse {
        projets: page.projects,
        total: page.total,
    })
}

#[derive(Deserialize)]
struct SearchParams {
    query: String,
    #[serde(default = "default_page")]
    page: usize,
    #[serde(default = "default_size")]
    size: usize,
}

/// GET /api/projets/search - paginated title/author search
async fn search_projects(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<ProjectListResponse> {
    debug!(query = %params.query, page = params.page, "searching projects");
    let page = state.store().search(&params.query, params.page, params.size);

    Json(ProjectListResponse {
        projets: page.projects,
        total: page.total,
    })
}

/// GET /api/projets/:id
async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, AppError> {
    let store = state.store();
    let project = store
        .get(id)
        .cloned()
        .ok_or(ChantierError::ProjectNotFound(id))?;

    Ok(Json(project))
}

/// Request body for creating a project. Dates arrive as plain strings and
/// are validated here, at ingestion.
#[derive(Deserialize)]
pub struct CreateProjectRequest {
    pub auteur: String,
    pub titre: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "dateDebut")]
    pub date_debut: String,
    #[serde(rename = "dateFin")]
    pub date_fin: String,
}

/// POST /api/projets - Create a new project
async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let new = NewProject {
        author: req.auteur,
        title: req.titre,
        description: req.description,
        start_date: dates::parse_date(&req.date_debut)?,
        end_date: dates::parse_date(&req.date_fin)?,
    };

    let mut store = state.store_mut();
    let project = store.create(new).clone();

    Ok((StatusCode::CREATED, Json(project)))
}

/// Request body for updating a project; absent fields stay untouched.
#[derive(Deserialize)]
pub struct UpdateProjectRequest {
    pub auteur: Option<String>,
    pub titre: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "dateDebut")]
    pub date_debut: Option<String>,
    #[serde(rename = "dateFin")]
    pub date_fin: Option<String>,
    pub collaborateurs: Option<Vec<Collaborator>>,
}

/// PUT /api/projets/:id - Partial update
async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, AppError> {
    let changes = ProjectUpdate {
        author: req.auteur,
        title: req.titre,
        description: req.description,
        start_date: req.date_debut.as_deref().map(dates::parse_date).transpose()?,
        end_date: req.date_fin.as_deref().map(dates::parse_date).transpose()?,
        collaborators: req.collaborateurs,
    };

    let mut store = state.store_mut();
    let project = store.update(id, changes)?.clone();

    Ok(Json(project))
}

/// DELETE /api/projets/:id
async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.store_mut().delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ChantierError::ProjectNotFound(id).into())
    }
}
