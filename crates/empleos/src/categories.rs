//! Job categories. Submissions are validated and logged; nothing is persisted yet.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

/// Field names match the HTML form the category page posts.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryForm {
    pub var_nombre: String,
    #[serde(default)]
    pub var_descripcion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CategoryError {
    #[error("category name must not be blank")]
    BlankName,
}

impl TryFrom<CategoryForm> for CategoryDraft {
    type Error = CategoryError;

    fn try_from(form: CategoryForm) -> Result<Self, Self::Error> {
        let name = form.var_nombre.trim();
        if name.is_empty() {
            return Err(CategoryError::BlankName);
        }

        Ok(Self {
            name: name.to_string(),
            description: form.var_descripcion.trim().to_string(),
        })
    }
}

pub fn category_router() -> Router {
    Router::new()
        .route("/categorias/index", get(index_handler))
        .route("/categorias/save", post(save_handler))
}

pub(crate) async fn index_handler() -> Json<serde_json::Value> {
    Json(json!({ "categories": [] }))
}

pub(crate) async fn save_handler(Form(form): Form<CategoryForm>) -> Response {
    match CategoryDraft::try_from(form) {
        Ok(draft) => {
            info!(name = %draft.name, description = %draft.description, "category received");
            (StatusCode::ACCEPTED, Json(draft)).into_response()
        }
        Err(err) => {
            warn!(error = %err, "rejecting category submission");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
