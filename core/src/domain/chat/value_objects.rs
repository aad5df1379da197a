use chrono::NaiveDate;

use crate::domain::{
    chat::entities::{ChatContext, ChatMessage},
    meal::entities::{CalendarEventDto, MealDto, PlanDto},
};

#[derive(Debug, Clone)]
pub struct SuggestMealsForDayInput {
    /// The specific day being planned.
    pub day_of_week: NaiveDate,
    /// Calendar events for this day.
    pub calendar_events: Vec<CalendarEventDto>,
    /// The full week's meal plan, if the caller has one.
    pub current_week_plan: Option<Vec<PlanDto>>,
    /// 1-2 months of historical plans, used to avoid repetition.
    pub recent_meal_plans: Vec<PlanDto>,
    /// Meals the model may choose from.
    pub available_meals: Vec<MealDto>,
    /// Previous messages in the conversation.
    pub conversation_history: Vec<ChatMessage>,
    /// Persistent context carried between turns; opaque to this service.
    pub chat_context: Option<ChatContext>,
}
