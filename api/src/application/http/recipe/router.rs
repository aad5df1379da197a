use super::handlers::parse_recipe::{__path_parse_recipe, parse_recipe};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(parse_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/parse-recipe", state.args.server.root_path),
        post(parse_recipe),
    )
}
