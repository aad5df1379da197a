use chrono::NaiveDate;
use mealplan_core::domain::{
    chat::entities::{ChatContext, ChatMessage},
    meal::entities::{CalendarEventDto, MealDto, PlanDto, deserialize_flexible_date},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request for day-by-day chat meal planning. Clients send camelCase;
/// snake_case is accepted too.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct DayMealPlanChatRequest {
    /// The specific day being planned, as an ISO date or epoch millis.
    #[serde(
        rename = "dayOfWeek",
        alias = "day_of_week",
        deserialize_with = "deserialize_flexible_date"
    )]
    #[schema(value_type = String)]
    pub day_of_week: NaiveDate,
    #[serde(rename = "calendarEvents", alias = "calendar_events", default)]
    pub calendar_events: Vec<CalendarEventDto>,
    #[serde(rename = "currentWeekPlan", alias = "current_week_plan", default)]
    pub current_week_plan: Option<Vec<PlanDto>>,
    #[serde(rename = "recentMealPlans", alias = "recent_meal_plans", default)]
    pub recent_meal_plans: Vec<PlanDto>,
    #[serde(rename = "availableMeals", alias = "available_meals")]
    pub available_meals: Vec<MealDto>,
    #[serde(rename = "conversationHistory", alias = "conversation_history", default)]
    pub conversation_history: Vec<ChatMessage>,
    /// Opaque context from previous turns; passed through untouched.
    #[serde(rename = "chatContext", alias = "chat_context", default)]
    #[schema(value_type = Option<Object>)]
    pub chat_context: Option<ChatContext>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_camel_case_with_epoch_millis_date() {
        let body = json!({
            "dayOfWeek": 1741564800000i64,
            "calendarEvents": [],
            "availableMeals": [{ "name": "Tacos" }],
            "conversationHistory": [{ "role": "user", "content": "plan my Monday" }],
            "chatContext": { "household_size": 2 }
        });

        let request: DayMealPlanChatRequest = serde_json::from_value(body).unwrap();
        assert_eq!(
            request.day_of_week,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
        assert_eq!(request.available_meals[0].name, "Tacos");
        assert!(request.current_week_plan.is_none());
        assert_eq!(request.chat_context.unwrap()["household_size"], 2);
    }

    #[test]
    fn accepts_snake_case_aliases() {
        let body = json!({
            "day_of_week": "2025-03-10",
            "calendar_events": [],
            "available_meals": [],
            "conversation_history": []
        });

        let request: DayMealPlanChatRequest = serde_json::from_value(body).unwrap();
        assert_eq!(
            request.day_of_week,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
    }
}
