pub mod get_ingredient_metadata;
pub mod parse_ingredient;
pub mod suggest_ingredients;
