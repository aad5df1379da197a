use axum::extract::State;
use tracing::info;

use crate::application::http::{
    recipe::validators::ParseRecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use mealplan_core::domain::recipe::{entities::ParsedRecipe, ports::RecipeService};

#[utoipa::path(
    post,
    path = "/parse-recipe",
    tag = "recipe",
    summary = "Parse a recipe from a URL",
    description = "Extracts title, description, time, effort and ingredients from a recipe page",
    responses(
        (status = 200, body = ParsedRecipe)
    ),
    request_body = ParseRecipeRequest
)]
pub async fn parse_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ParseRecipeRequest>,
) -> Result<Response<ParsedRecipe>, ApiError> {
    info!(url = %payload.url, "recipe parsing request");

    let result = state
        .service
        .parse_recipe(payload.url)
        .await
        .map_err(ApiError::from)?;

    info!(
        title = ?result.title,
        ingredients = result.ingredients.len(),
        time = ?result.total_time_minutes,
        "recipe parsing completed"
    );

    Ok(Response::OK(result))
}
