pub mod chat;
pub mod common;
pub mod ingredient;
pub mod meal;
pub mod plan_generation;
pub mod recipe;
