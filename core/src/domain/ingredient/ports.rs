use std::future::Future;

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::AccessToken},
    ingredient::{
        entities::{IngredientMetadata, IngredientSuggestions, ParsedIngredient},
        value_objects::SuggestIngredientsInput,
    },
};

/// Service trait covering ingredient parsing, classification and
/// suggestion.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    /// Rule-based; no model call involved.
    fn parse_ingredient(&self, ingredient_string: &str) -> ParsedIngredient;

    fn get_ingredient_metadata(
        &self,
        access_token: AccessToken,
        ingredient_name: String,
    ) -> impl Future<Output = Result<IngredientMetadata, CoreError>> + Send;

    fn suggest_ingredients(
        &self,
        access_token: AccessToken,
        input: SuggestIngredientsInput,
    ) -> impl Future<Output = Result<IngredientSuggestions, CoreError>> + Send;
}
