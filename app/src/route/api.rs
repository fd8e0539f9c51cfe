use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

pub const API_NAME: &str = "ExerciseDB API";
pub const API_VERSION: &str = "v1";
pub const API_BASE_PATH: &str = "/api/v1";
pub const DOCS_PATH: &str = "/docs";

pub fn route_api() -> Router<()> {
    Router::new().route("/", get(index))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiIndex {
    pub name: String,
    pub version: String,
    pub docs: String,
    pub base: String,
}
impl Default for ApiIndex {
    fn default() -> Self {
        Self {
            name: API_NAME.to_string(),
            version: API_VERSION.to_string(),
            docs: DOCS_PATH.to_string(),
            base: API_BASE_PATH.to_string(),
        }
    }
}

#[tracing::instrument]
pub async fn index() -> Json<ApiIndex> {
    Json(ApiIndex::default())
}
