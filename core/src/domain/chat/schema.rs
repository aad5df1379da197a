use serde_json::json;

/// JSON schema for day meal suggestion LLM responses.
///
/// Property names are snake_case; the wire DTOs accept both snake and
/// camel case on input.
pub fn get_day_suggestions_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "suggestions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "meal_name": { "type": "string" },
                        "meal_id": { "type": "integer" },
                        "rank": { "type": "integer", "minimum": 1, "maximum": 5 },
                        "suitability_score": {
                            "type": "number",
                            "minimum": 0,
                            "maximum": 1,
                            "nullable": true
                        }
                    },
                    "required": ["meal_name", "meal_id", "rank"]
                }
            },
            "reasoning": { "type": "string" },
            "conversation_complete": { "type": "boolean" },
            "updated_chat_context": { "type": "object", "nullable": true }
        },
        "required": ["suggestions", "reasoning", "conversation_complete"]
    })
}
