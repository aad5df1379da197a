use chrono::NaiveDate;
use mealplan_core::domain::meal::entities::{
    CalendarEventDto, MealDto, PlanDto, deserialize_flexible_date,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request for whole-week meal plan generation.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AiMealPlanGenerationRequest {
    #[serde(
        rename = "weekStartDate",
        alias = "week_start_date",
        deserialize_with = "deserialize_flexible_date"
    )]
    #[schema(value_type = String)]
    pub week_start_date: NaiveDate,
    #[serde(
        rename = "weekEndDate",
        alias = "week_end_date",
        deserialize_with = "deserialize_flexible_date"
    )]
    #[schema(value_type = String)]
    pub week_end_date: NaiveDate,
    #[serde(rename = "availableMeals", alias = "available_meals")]
    pub available_meals: Vec<MealDto>,
    #[serde(rename = "recentMealPlans", alias = "recent_meal_plans", default)]
    pub recent_meal_plans: Vec<PlanDto>,
    #[serde(
        rename = "existingPlansForWeek",
        alias = "existing_plans_for_week",
        default
    )]
    pub existing_plans_for_week: Vec<PlanDto>,
    #[serde(rename = "calendarEvents", alias = "calendar_events", default)]
    pub calendar_events: Vec<CalendarEventDto>,
    /// Free-form extra instructions for the planner.
    #[serde(default)]
    pub prompt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_mixed_date_representations() {
        let body = json!({
            "weekStartDate": "2025-03-10",
            "weekEndDate": 1742083200000i64,
            "availableMeals": [],
            "recentMealPlans": [],
            "existingPlansForWeek": [],
            "calendarEvents": []
        });

        let request: AiMealPlanGenerationRequest = serde_json::from_value(body).unwrap();
        assert_eq!(
            request.week_start_date,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
        assert_eq!(
            request.week_end_date,
            NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()
        );
        assert!(request.prompt.is_none());
    }
}
