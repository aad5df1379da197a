use serde_json::json;

/// JSON schema for weekly plan LLM responses. Meals inside generated
/// plans carry only a name; enrichment happens server-side downstream.
pub fn get_weekly_plan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "generated_plans": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "date": { "type": "string", "description": "ISO date, YYYY-MM-DD" },
                        "plan_meals": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "meal": {
                                        "type": "object",
                                        "properties": {
                                            "name": { "type": "string" }
                                        },
                                        "required": ["name"]
                                    },
                                    "required_servings": { "type": "integer", "minimum": 1 }
                                },
                                "required": ["meal", "required_servings"]
                            }
                        }
                    },
                    "required": ["date", "plan_meals"]
                }
            },
            "reasoning": { "type": "string" }
        },
        "required": ["generated_plans", "reasoning"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_plans_and_reasoning() {
        let schema = get_weekly_plan_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["generated_plans", "reasoning"]);
    }
}
