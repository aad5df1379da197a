use chrono::NaiveDate;

use crate::domain::meal::entities::{CalendarEventDto, MealDto, PlanDto};

#[derive(Debug, Clone)]
pub struct GenerateMealPlanInput {
    pub week_start_date: NaiveDate,
    pub week_end_date: NaiveDate,
    /// Meals the model may schedule.
    pub available_meals: Vec<MealDto>,
    /// Historical plans, used to avoid repetition.
    pub recent_meal_plans: Vec<PlanDto>,
    /// Days of the target week the user has already filled in.
    pub existing_plans_for_week: Vec<PlanDto>,
    /// Events across the target week.
    pub calendar_events: Vec<CalendarEventDto>,
    /// Free-form extra instructions from the user.
    pub prompt: Option<String>,
}
