pub mod chat_meal_plan_day;
