//! Month-view endpoint: the 42-day grid with resolved task periods.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::{Datelike, Local};
use serde::Deserialize;

use chantier_core::{CalendarDay, ChantierError, calendar};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/projets/{id}/calendrier", get(month_view))
}

#[derive(Deserialize)]
struct MonthParams {
    annee: Option<i32>,
    /// 0-based month (0 = January), like the front end's `Date` month.
    mois: Option<u32>,
}

/// GET /api/projets/:id/calendrier?annee=2024&mois=1
///
/// The grid is recomputed in full on every request; the core contract takes
/// a pre-normalized month, so range checking happens here.
async fn month_view(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<MonthParams>,
) -> Result<Json<Vec<CalendarDay>>, AppError> {
    let today = Local::now().date_naive();
    let year = params.annee.unwrap_or_else(|| today.year());
    let month0 = params.mois.unwrap_or_else(|| today.month0());

    if month0 > 11 {
        return Err(AppError::BadRequest(format!("mois out of range: {month0}")));
    }

    let store = state.store();
    let project = store.get(id).ok_or(ChantierError::ProjectNotFound(id))?;

    Ok(Json(calendar::project_month(
        Some(project),
        year,
        month0,
        today,
    )))
}
