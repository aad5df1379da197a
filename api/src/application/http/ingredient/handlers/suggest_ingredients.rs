use axum::extract::State;
use tracing::info;

use crate::application::{
    auth::RequiredToken,
    http::{
        ingredient::validators::SuggestIngredientsRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use mealplan_core::domain::ingredient::{
    entities::IngredientSuggestions, ports::IngredientService,
    value_objects::SuggestIngredientsInput,
};

#[utoipa::path(
    post,
    path = "/suggest-ingredients",
    tag = "ingredient",
    summary = "Suggest ingredients for a meal",
    description = "Suggests the missing ingredients for a meal, respecting dietary tags and serving count",
    responses(
        (status = 200, body = IngredientSuggestions),
        (status = 401, description = "Missing or malformed Bearer token")
    ),
    request_body = SuggestIngredientsRequest
)]
pub async fn suggest_ingredients(
    RequiredToken(access_token): RequiredToken,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestIngredientsRequest>,
) -> Result<Response<IngredientSuggestions>, ApiError> {
    info!(meal = %payload.meal_name, "ingredient suggestion request");

    let result = state
        .service
        .suggest_ingredients(
            access_token,
            SuggestIngredientsInput {
                meal_name: payload.meal_name,
                meal_description: payload.meal_description,
                tags: payload.tags,
                serves: payload.serves,
                recipe_url: payload.recipe_url,
                existing_ingredients: payload.existing_ingredients,
            },
        )
        .await
        .map_err(ApiError::from)?;

    info!(count = result.ingredients.len(), "ingredient suggestion completed");

    Ok(Response::OK(result))
}
