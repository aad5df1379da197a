use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ingredient::entities::ParsedIngredient, meal::entities::Effort};

/// A recipe scraped from a web page.
///
/// Every field except `url` is best-effort; a fetch failure still yields
/// a value, with the error recorded in `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParsedRecipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_minutes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<Effort>,
    #[serde(default)]
    pub ingredients: Vec<ParsedIngredient>,
    pub url: String,
}
