use axum::extract::State;
use tracing::info;

use crate::application::{
    auth::RequiredToken,
    http::{
        meal_plan::validators::AiMealPlanGenerationRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use mealplan_core::domain::plan_generation::{
    entities::WeeklyPlanResult, ports::MealPlanGenerationService,
    value_objects::GenerateMealPlanInput,
};

#[utoipa::path(
    post,
    path = "/generate-meal-plan",
    tag = "meal-plan",
    summary = "Generate a weekly meal plan",
    description = "Plans one main meal per day across the requested week, avoiding recent repeats",
    responses(
        (status = 200, body = WeeklyPlanResult),
        (status = 401, description = "Missing or malformed Bearer token")
    ),
    request_body = AiMealPlanGenerationRequest
)]
pub async fn generate_meal_plan(
    RequiredToken(access_token): RequiredToken,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AiMealPlanGenerationRequest>,
) -> Result<Response<WeeklyPlanResult>, ApiError> {
    info!(
        week_start = %payload.week_start_date,
        week_end = %payload.week_end_date,
        meals = payload.available_meals.len(),
        "meal plan generation request"
    );

    let result = state
        .service
        .generate_meal_plan(
            access_token,
            GenerateMealPlanInput {
                week_start_date: payload.week_start_date,
                week_end_date: payload.week_end_date,
                available_meals: payload.available_meals,
                recent_meal_plans: payload.recent_meal_plans,
                existing_plans_for_week: payload.existing_plans_for_week,
                calendar_events: payload.calendar_events,
                prompt: payload.prompt,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
