use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Opaque user-preference mapping maintained by the LLM itself.
///
/// The service never inspects, validates, merges, or size-caps it; it is
/// round-tripped between client and model across turns, and the model is
/// instructed to return either `null` (nothing new) or a complete
/// replacement mapping where the newest value wins.
pub type ChatContext = serde_json::Map<String, serde_json::Value>;

/// A single message in the planning conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    /// "user" or "assistant".
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestedMeal {
    #[serde(rename = "mealName", alias = "meal_name")]
    pub meal_name: String,
    #[serde(rename = "mealId", alias = "meal_id")]
    pub meal_id: i64,
    /// Position in the suggestions, 1 (most suitable) to 5.
    pub rank: u8,
    #[serde(
        rename = "suitabilityScore",
        alias = "suitability_score",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub suitability_score: Option<f64>,
}

/// Ranked suggestions for one day, as produced by the model (or the
/// fallback path when the model misbehaves).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealDaySuggestions {
    pub suggestions: Vec<SuggestedMeal>,
    pub reasoning: String,
    #[serde(
        rename = "conversationComplete",
        alias = "conversation_complete",
        default
    )]
    pub conversation_complete: bool,
    #[serde(
        rename = "updatedChatContext",
        alias = "updated_chat_context",
        default
    )]
    #[schema(value_type = Option<Object>)]
    pub updated_chat_context: Option<ChatContext>,
}
