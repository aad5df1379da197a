use mealplan_core::domain::ingredient::entities::SuggestedIngredient;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ParseIngredientRequest {
    /// Raw ingredient line, e.g. "2 1/2 cups all-purpose flour".
    #[validate(length(min = 1, message = "ingredient_string must not be empty"))]
    pub ingredient_string: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct IngredientMetadataRequest {
    /// Name of the ingredient to classify.
    #[validate(length(min = 1, message = "ingredient_name must not be empty"))]
    pub ingredient_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SuggestIngredientsRequest {
    #[serde(rename = "mealName", alias = "meal_name")]
    #[validate(length(min = 1, message = "meal_name must not be empty"))]
    pub meal_name: String,
    #[serde(rename = "mealDescription", alias = "meal_description", default)]
    pub meal_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub serves: Option<i32>,
    #[serde(rename = "recipeUrl", alias = "recipe_url", default)]
    pub recipe_url: Option<String>,
    #[serde(
        rename = "existingIngredients",
        alias = "existing_ingredients",
        default
    )]
    pub existing_ingredients: Vec<SuggestedIngredient>,
}
