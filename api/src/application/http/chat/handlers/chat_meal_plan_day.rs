use axum::extract::State;
use tracing::info;

use crate::application::{
    auth::RequiredToken,
    http::{
        chat::validators::DayMealPlanChatRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use mealplan_core::domain::chat::{
    entities::MealDaySuggestions, ports::MealPlanChatService, value_objects::SuggestMealsForDayInput,
};

#[utoipa::path(
    post,
    path = "/chat-meal-plan-day",
    tag = "chat",
    summary = "Chat-based meal planning for a specific day",
    description = "Suggests 3-5 ranked meals for a day; supports iterative conversation with feedback",
    responses(
        (status = 200, body = MealDaySuggestions),
        (status = 401, description = "Missing or malformed Bearer token")
    ),
    request_body = DayMealPlanChatRequest
)]
pub async fn chat_meal_plan_day(
    RequiredToken(access_token): RequiredToken,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DayMealPlanChatRequest>,
) -> Result<Response<MealDaySuggestions>, ApiError> {
    info!(
        day = %payload.day_of_week,
        events = payload.calendar_events.len(),
        meals = payload.available_meals.len(),
        history = payload.conversation_history.len(),
        "meal plan chat request"
    );

    let result = state
        .service
        .suggest_meals_for_day(
            access_token,
            SuggestMealsForDayInput {
                day_of_week: payload.day_of_week,
                calendar_events: payload.calendar_events,
                current_week_plan: payload.current_week_plan,
                recent_meal_plans: payload.recent_meal_plans,
                available_meals: payload.available_meals,
                conversation_history: payload.conversation_history,
                chat_context: payload.chat_context,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
