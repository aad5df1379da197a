use tracing::{error, info};

use crate::domain::{
    common::{
        entities::app_errors::CoreError, ports::LLMClient, services::Service,
        value_objects::AccessToken,
    },
    ingredient::{
        entities::{IngredientMetadata, IngredientStorageType, IngredientSuggestions,
            ParsedIngredient, SuggestedIngredient},
        parser::parse_ingredient_text,
        ports::IngredientService,
        schema::{get_metadata_schema, get_suggestions_schema},
        value_objects::SuggestIngredientsInput,
    },
    recipe::ports::PageFetcher,
};

// Lower temperature for consistent classification.
const METADATA_TEMPERATURE: f32 = 0.3;
const SUGGESTION_TEMPERATURE: f32 = 0.4;

const FRESH_KEYWORDS: &[&str] = &[
    "milk", "cream", "butter", "cheese", "yogurt", // dairy
    "egg", "eggs", // eggs
    "chicken", "beef", "pork", "fish", "salmon", "meat", // proteins
    "lettuce", "tomato", "onion", "garlic", "carrot", "potato", // vegetables
    "apple", "banana", "orange", "lemon", "lime", // fruits
    "basil", "parsley", "cilantro", "dill", "mint", // fresh herbs
    "fresh", "raw",
];

impl<L, P> IngredientService for Service<L, P>
where
    L: LLMClient,
    P: PageFetcher,
{
    fn parse_ingredient(&self, ingredient_string: &str) -> ParsedIngredient {
        info!("parsing ingredient: {ingredient_string}");
        parse_ingredient_text(ingredient_string)
    }

    async fn get_ingredient_metadata(
        &self,
        access_token: AccessToken,
        ingredient_name: String,
    ) -> Result<IngredientMetadata, CoreError> {
        info!("getting metadata for ingredient: {ingredient_name}");

        let prompt = create_metadata_prompt(&ingredient_name);

        let result = self
            .llm_client
            .generate_with_text(
                Some(access_token),
                prompt,
                METADATA_TEMPERATURE,
                get_metadata_schema(),
            )
            .await
            .and_then(|raw| {
                serde_json::from_str::<IngredientMetadata>(&raw)
                    .map_err(|e| CoreError::ExternalServiceError(e.to_string()))
            });

        match result {
            Ok(metadata) => {
                info!(
                    "classified '{}' as {:?}",
                    metadata.ingredient_name, metadata.storage_type
                );
                Ok(metadata)
            }
            Err(e) => {
                error!("error getting ingredient metadata: {e}");
                Ok(fallback_metadata(&ingredient_name))
            }
        }
    }

    async fn suggest_ingredients(
        &self,
        access_token: AccessToken,
        input: SuggestIngredientsInput,
    ) -> Result<IngredientSuggestions, CoreError> {
        info!("suggesting ingredients for meal: {}", input.meal_name);

        let prompt = create_suggestion_prompt(&input);

        let raw = self
            .llm_client
            .generate_with_text(
                Some(access_token),
                prompt,
                SUGGESTION_TEMPERATURE,
                get_suggestions_schema(),
            )
            .await?;

        let parsed: IngredientSuggestions = serde_json::from_str(&raw)
            .map_err(|e| CoreError::ExternalServiceError(format!("unparseable response: {e}")))?;

        info!(
            count = parsed.ingredients.len(),
            "suggested ingredients for '{}'", input.meal_name
        );
        Ok(parsed)
    }
}

fn create_metadata_prompt(ingredient_name: &str) -> String {
    format!(
        "\
You are a culinary expert helping to classify ingredients by their typical storage requirements.

Classify the following ingredient as either CUPBOARD, FRESH or FREEZER:

Ingredient: {ingredient_name}

Classification criteria:
- CUPBOARD: Dry goods, spices, canned items, oils, condiments, grains, pasta, flour, sugar, etc.
  Items with long shelf life that don't require refrigeration.
- FRESH: Produce, dairy, meat, fish, eggs, fresh herbs, items that require refrigeration or have short shelf life.
- FREEZER: Any ingredient that requires freezing to maintain longevity.

Provide a brief description explaining the classification."
    )
}

fn create_suggestion_prompt(input: &SuggestIngredientsInput) -> String {
    let description = input
        .meal_description
        .as_deref()
        .map(|d| format!("\nDescription: {d}"))
        .unwrap_or_default();

    let tags = if input.tags.is_empty() {
        String::new()
    } else {
        format!("\nTags: {}", input.tags.join(", "))
    };

    let serves = input
        .serves
        .map(|s| format!("\nServes: {s} people"))
        .unwrap_or_default();

    let recipe_url = input
        .recipe_url
        .as_deref()
        .map(|u| format!("\nRecipe URL: {u}"))
        .unwrap_or_default();

    let existing = if input.existing_ingredients.is_empty() {
        String::new()
    } else {
        let items: Vec<String> = input
            .existing_ingredients
            .iter()
            .map(format_existing_ingredient)
            .collect();
        format!(
            "\n\nExisting ingredients (do NOT suggest these again):\n- {}",
            items.join("\n- ")
        )
    };

    format!(
        "\
You are a culinary expert. Suggest ingredients for a meal.

Meal name: {meal_name}{description}{tags}{serves}{recipe_url}{existing}

Rules:
- Suggest a complete, practical list of ingredients for this meal
- If existing ingredients are listed, only suggest the MISSING ones
- Scale quantities for the serving count if provided
- Use these unit codes where appropriate: tsp, tbsp, cup, ml, l, g, kg, oz, lb, pinch, clove, slice, piece, can, bunch
- Use null for unit_code when items are countable (e.g., 2 eggs, 1 onion)
- Respect dietary tags (e.g., vegetarian = no meat/fish)
- Order logically: proteins first, then vegetables, then pantry/spice items
- Be practical and realistic with quantities",
        meal_name = input.meal_name,
    )
}

fn format_existing_ingredient(ing: &SuggestedIngredient) -> String {
    let mut parts = Vec::new();
    if let Some(amount) = ing.amount {
        parts.push(amount.to_string());
    }
    if let Some(unit_code) = &ing.unit_code {
        parts.push(unit_code.clone());
    }
    parts.push(ing.name.clone());
    parts.join(" ")
}

/// Keyword heuristics when the model is unavailable or returns garbage.
fn fallback_metadata(ingredient_name: &str) -> IngredientMetadata {
    info!("using fallback classification for: {ingredient_name}");

    let lower = ingredient_name.to_lowercase();

    if FRESH_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        IngredientMetadata {
            ingredient_name: ingredient_name.to_string(),
            storage_type: IngredientStorageType::Fresh,
            description: Some(
                "Typically requires refrigeration or has a short shelf life (fallback classification)"
                    .to_string(),
            ),
        }
    } else {
        IngredientMetadata {
            ingredient_name: ingredient_name.to_string(),
            storage_type: IngredientStorageType::Cupboard,
            description: Some(
                "Typically a dry good or shelf-stable item (fallback classification)".to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{MealPlanAiConfig, ports::MockLLMClient},
        recipe::ports::MockPageFetcher,
    };
    use serde_json::json;

    fn service(llm: MockLLMClient) -> Service<MockLLMClient, MockPageFetcher> {
        Service::new(llm, MockPageFetcher::new(), MealPlanAiConfig::default())
    }

    fn token() -> AccessToken {
        AccessToken::new("token".to_string())
    }

    #[tokio::test]
    async fn metadata_uses_model_classification_when_available() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _, _, _| {
            let body = json!({
                "ingredient_name": "soy sauce",
                "storage_type": "CUPBOARD",
                "description": "Shelf-stable condiment."
            })
            .to_string();
            Box::pin(async move { Ok(body) })
        });

        let metadata = service(llm)
            .get_ingredient_metadata(token(), "soy sauce".to_string())
            .await
            .unwrap();

        assert_eq!(metadata.storage_type, IngredientStorageType::Cupboard);
        assert_eq!(metadata.description.as_deref(), Some("Shelf-stable condiment."));
    }

    #[tokio::test]
    async fn metadata_falls_back_to_keywords_on_model_error() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _, _, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("down".to_string())) })
        });

        let metadata = service(llm)
            .get_ingredient_metadata(token(), "fresh basil".to_string())
            .await
            .unwrap();

        assert_eq!(metadata.storage_type, IngredientStorageType::Fresh);
        assert!(metadata.description.unwrap().contains("fallback classification"));
    }

    #[tokio::test]
    async fn metadata_fallback_defaults_to_cupboard() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _, _, _| Box::pin(async { Ok("{nonsense".to_string()) }));

        let metadata = service(llm)
            .get_ingredient_metadata(token(), "dried oregano".to_string())
            .await
            .unwrap();

        assert_eq!(metadata.storage_type, IngredientStorageType::Cupboard);
    }

    #[tokio::test]
    async fn suggestion_errors_propagate() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _, _, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("quota".to_string())) })
        });

        let result = service(llm)
            .suggest_ingredients(
                token(),
                SuggestIngredientsInput {
                    meal_name: "Carbonara".to_string(),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn suggestions_are_parsed_from_model_output() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _, _, _| {
            let body = json!({
                "ingredients": [
                    { "name": "spaghetti", "amount": 400.0, "unit_code": "g" },
                    { "name": "eggs", "amount": 4.0, "unit_code": null }
                ],
                "reasoning": "Classic carbonara base."
            })
            .to_string();
            Box::pin(async move { Ok(body) })
        });

        let result = service(llm)
            .suggest_ingredients(
                token(),
                SuggestIngredientsInput {
                    meal_name: "Carbonara".to_string(),
                    serves: Some(4),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(result.ingredients.len(), 2);
        assert_eq!(result.ingredients[0].unit_code.as_deref(), Some("g"));
        assert!(result.ingredients[1].unit_code.is_none());
    }

    #[test]
    fn suggestion_prompt_lists_existing_ingredients() {
        let input = SuggestIngredientsInput {
            meal_name: "Stir Fry".to_string(),
            tags: vec!["vegetarian".to_string()],
            existing_ingredients: vec![SuggestedIngredient {
                name: "rice".to_string(),
                amount: Some(200.0),
                unit_code: Some("g".to_string()),
            }],
            ..Default::default()
        };

        let prompt = create_suggestion_prompt(&input);
        assert!(prompt.contains("do NOT suggest these again"));
        assert!(prompt.contains("- 200 g rice"));
        assert!(prompt.contains("Tags: vegetarian"));
    }
}
