use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::service::VacancyQueryService;
use super::store::VacancyRepository;
use super::views::{VacancyRowView, VacancyView};

#[derive(Debug, Deserialize)]
pub(crate) struct DetailQuery {
    #[serde(rename = "idVacante")]
    pub(crate) id_vacante: i32,
}

/// Routes for the home listing, the table listing, and posting details.
pub fn vacancy_router<R>(service: Arc<VacancyQueryService<R>>) -> Router
where
    R: VacancyRepository + 'static,
{
    Router::new()
        .route("/", get(home_handler::<R>))
        .route("/tabla", get(table_handler::<R>))
        .route("/vacantes/view-request", get(detail_query_handler::<R>))
        .route("/vacantes/view-patch/:id", get(detail_path_handler::<R>))
        .with_state(service)
}

pub(crate) async fn home_handler<R>(
    State(service): State<Arc<VacancyQueryService<R>>>,
) -> Json<Vec<VacancyView>>
where
    R: VacancyRepository + 'static,
{
    let postings = service.find_all();
    if postings.is_empty() {
        warn!("no vacancies available for the home listing");
    } else {
        let featured = postings
            .iter()
            .filter(|posting| posting.featured().is_featured())
            .count();
        info!(count = postings.len(), featured, "serving home listing");
    }

    Json(postings.iter().map(VacancyView::from).collect())
}

pub(crate) async fn table_handler<R>(
    State(service): State<Arc<VacancyQueryService<R>>>,
) -> Json<Vec<VacancyRowView>>
where
    R: VacancyRepository + 'static,
{
    let rows: Vec<VacancyRowView> = service
        .find_all()
        .iter()
        .map(VacancyRowView::from)
        .collect();
    info!(count = rows.len(), "serving vacancy table");
    Json(rows)
}

pub(crate) async fn detail_query_handler<R>(
    State(service): State<Arc<VacancyQueryService<R>>>,
    query: Result<Query<DetailQuery>, QueryRejection>,
) -> Response
where
    R: VacancyRepository + 'static,
{
    match query {
        Ok(Query(query)) => detail_response(&service, query.id_vacante),
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "rejecting vacancy lookup");
            let payload = json!({ "error": rejection.body_text() });
            (rejection.status(), Json(payload)).into_response()
        }
    }
}

pub(crate) async fn detail_path_handler<R>(
    State(service): State<Arc<VacancyQueryService<R>>>,
    Path(id): Path<i32>,
) -> Response
where
    R: VacancyRepository + 'static,
{
    detail_response(&service, id)
}

fn detail_response<R>(service: &VacancyQueryService<R>, id: i32) -> Response
where
    R: VacancyRepository + 'static,
{
    info!(id, "looking up vacancy");
    match service.find_by_id(id).first() {
        Some(posting) => (StatusCode::OK, Json(VacancyView::from(posting))).into_response(),
        None => {
            warn!(id, "vacancy not found");
            let payload = json!({
                "error": "vacancy not found",
                "id": id,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
