pub mod generate_meal_plan;
