use crate::domain::ingredient::entities::SuggestedIngredient;

/// Context for suggesting the missing ingredients of a meal.
#[derive(Debug, Clone, Default)]
pub struct SuggestIngredientsInput {
    pub meal_name: String,
    pub meal_description: Option<String>,
    pub tags: Vec<String>,
    pub serves: Option<i32>,
    pub recipe_url: Option<String>,
    /// Ingredients the meal already has; the model must not repeat them.
    pub existing_ingredients: Vec<SuggestedIngredient>,
}
