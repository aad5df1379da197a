use super::handlers::chat_meal_plan_day::{__path_chat_meal_plan_day, chat_meal_plan_day};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(chat_meal_plan_day))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/chat-meal-plan-day", state.args.server.root_path),
        post(chat_meal_plan_day),
    )
}
