pub mod chat;
pub mod health;
pub mod ingredient;
pub mod meal_plan;
pub mod recipe;
pub mod server;
