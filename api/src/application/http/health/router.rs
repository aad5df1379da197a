use super::handlers::root::{__path_root, root};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(root))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    let path = if state.args.server.root_path.is_empty() {
        "/".to_string()
    } else {
        state.args.server.root_path.clone()
    };

    Router::new().route(&path, get(root))
}
