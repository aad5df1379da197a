use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Where an ingredient is usually kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum IngredientStorageType {
    Cupboard,
    Fresh,
    Freezer,
}

/// One ingredient line broken into structured components.
///
/// `amount` stays a string: it can be a range ("1-2") as well as a
/// number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParsedIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub is_well_formed: bool,
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientMetadata {
    pub ingredient_name: String,
    pub storage_type: IngredientStorageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestedIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Unit code such as "tsp" or "g"; `None` for countable items.
    #[serde(
        rename = "unitCode",
        alias = "unit_code",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub unit_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientSuggestions {
    pub ingredients: Vec<SuggestedIngredient>,
    pub reasoning: String,
}
