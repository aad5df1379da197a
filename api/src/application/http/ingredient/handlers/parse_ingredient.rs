use axum::extract::State;
use tracing::info;

use crate::application::http::{
    ingredient::validators::ParseIngredientRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use mealplan_core::domain::ingredient::{entities::ParsedIngredient, ports::IngredientService};

#[utoipa::path(
    post,
    path = "/parse-ingredient",
    tag = "ingredient",
    summary = "Parse an ingredient string",
    description = "Splits an ingredient line into amount, unit and name; handles fractions and ranges",
    responses(
        (status = 200, body = ParsedIngredient)
    ),
    request_body = ParseIngredientRequest
)]
pub async fn parse_ingredient(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ParseIngredientRequest>,
) -> Result<Response<ParsedIngredient>, ApiError> {
    info!(input = %payload.ingredient_string, "ingredient parsing request");

    let result = state.service.parse_ingredient(&payload.ingredient_string);

    info!(
        name = %result.name,
        amount = ?result.amount,
        unit = ?result.unit,
        well_formed = result.is_well_formed,
        "ingredient parsing completed"
    );

    Ok(Response::OK(result))
}
