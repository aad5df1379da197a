use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Service liveness",
    responses(
        (status = 200, body = RootResponse)
    )
)]
pub async fn root() -> Response<RootResponse> {
    Response::OK(RootResponse {
        message: "Meal Plan AI API".to_string(),
        status: "running".to_string(),
    })
}
