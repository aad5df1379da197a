use serde_json::json;

/// JSON schema for ingredient storage classification responses.
pub fn get_metadata_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredient_name": { "type": "string" },
            "storage_type": {
                "type": "string",
                "enum": ["CUPBOARD", "FRESH", "FREEZER"]
            },
            "description": { "type": "string", "nullable": true }
        },
        "required": ["ingredient_name", "storage_type"]
    })
}

/// JSON schema for ingredient suggestion responses.
pub fn get_suggestions_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "amount": { "type": "number", "nullable": true },
                        "unit_code": {
                            "type": "string",
                            "nullable": true,
                            "description": "Unit code such as 'tsp' or 'g'; null for countable items"
                        }
                    },
                    "required": ["name"]
                }
            },
            "reasoning": { "type": "string" }
        },
        "required": ["ingredients", "reasoning"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_schema_lists_all_storage_types() {
        let schema = get_metadata_schema();
        let variants: Vec<&str> = schema["properties"]["storage_type"]["enum"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(variants, vec!["CUPBOARD", "FRESH", "FREEZER"]);
    }
}
