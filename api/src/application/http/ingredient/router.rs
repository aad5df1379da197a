use super::handlers::{
    get_ingredient_metadata::{__path_get_ingredient_metadata, get_ingredient_metadata},
    parse_ingredient::{__path_parse_ingredient, parse_ingredient},
    suggest_ingredients::{__path_suggest_ingredients, suggest_ingredients},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(parse_ingredient, get_ingredient_metadata, suggest_ingredients))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/parse-ingredient", state.args.server.root_path),
            post(parse_ingredient),
        )
        .route(
            &format!("{}/ingredient-metadata", state.args.server.root_path),
            post(get_ingredient_metadata),
        )
        .route(
            &format!("{}/suggest-ingredients", state.args.server.root_path),
            post(suggest_ingredients),
        )
}
