use crate::application::http::{
    chat::router::ChatApiDoc, health::router::HealthApiDoc, ingredient::router::IngredientApiDoc,
    meal_plan::router::MealPlanApiDoc, recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meal Plan AI API"
    ),
    nest(
        (path = {""}, api = HealthApiDoc),
        (path = {""}, api = ChatApiDoc),
        (path = {""}, api = MealPlanApiDoc),
        (path = {""}, api = RecipeApiDoc),
        (path = {""}, api = IngredientApiDoc),
    )
)]
pub struct ApiDoc;
