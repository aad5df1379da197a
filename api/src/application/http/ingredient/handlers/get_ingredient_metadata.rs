use axum::extract::State;
use tracing::info;

use crate::application::{
    auth::RequiredToken,
    http::{
        ingredient::validators::IngredientMetadataRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use mealplan_core::domain::ingredient::{entities::IngredientMetadata, ports::IngredientService};

#[utoipa::path(
    post,
    path = "/ingredient-metadata",
    tag = "ingredient",
    summary = "Classify an ingredient's storage type",
    description = "Classifies an ingredient as CUPBOARD, FRESH or FREEZER",
    responses(
        (status = 200, body = IngredientMetadata),
        (status = 401, description = "Missing or malformed Bearer token")
    ),
    request_body = IngredientMetadataRequest
)]
pub async fn get_ingredient_metadata(
    RequiredToken(access_token): RequiredToken,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<IngredientMetadataRequest>,
) -> Result<Response<IngredientMetadata>, ApiError> {
    info!(ingredient = %payload.ingredient_name, "ingredient metadata request");

    let result = state
        .service
        .get_ingredient_metadata(access_token, payload.ingredient_name)
        .await
        .map_err(ApiError::from)?;

    info!(storage = ?result.storage_type, "ingredient metadata completed");

    Ok(Response::OK(result))
}
