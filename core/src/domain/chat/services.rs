use tracing::{info, warn};

use crate::domain::{
    chat::{
        entities::{MealDaySuggestions, SuggestedMeal},
        helpers::{
            format_available_meals, format_calendar_events, format_chat_context,
            format_current_week_plan, format_day, format_recent_meals,
        },
        ports::MealPlanChatService,
        schema::get_day_suggestions_schema,
        value_objects::SuggestMealsForDayInput,
    },
    common::{
        entities::app_errors::CoreError, ports::LLMClient, services::Service,
        value_objects::AccessToken,
    },
    recipe::ports::PageFetcher,
};

const SUGGESTION_TEMPERATURE: f32 = 0.7;
const MAX_SUGGESTIONS: usize = 5;

impl<L, P> MealPlanChatService for Service<L, P>
where
    L: LLMClient,
    P: PageFetcher,
{
    async fn suggest_meals_for_day(
        &self,
        access_token: AccessToken,
        input: SuggestMealsForDayInput,
    ) -> Result<MealDaySuggestions, CoreError> {
        info!(day = %input.day_of_week, "starting day meal plan chat");

        // A single message means the user just opened the conversation.
        let is_initial_request = input.conversation_history.len() <= 1;

        let prompt = if is_initial_request {
            info!("initial request, generating first suggestions");
            create_initial_prompt(&input)
        } else {
            info!(
                messages = input.conversation_history.len(),
                "follow-up request"
            );
            create_followup_prompt(&input)
        };

        let raw = match self
            .llm_client
            .generate_with_text(
                Some(access_token),
                prompt,
                SUGGESTION_TEMPERATURE,
                get_day_suggestions_schema(),
            )
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!("AI model error: {e}");
                return Ok(create_fallback_response(
                    &input,
                    &format!("AI model error: {e}"),
                ));
            }
        };

        match serde_json::from_str::<MealDaySuggestions>(&raw) {
            Ok(mut parsed) => {
                if parsed.suggestions.len() < 3 {
                    warn!(
                        count = parsed.suggestions.len(),
                        "fewer suggestions than expected, wanted 3-5"
                    );
                } else if parsed.suggestions.len() > MAX_SUGGESTIONS {
                    warn!(
                        count = parsed.suggestions.len(),
                        "too many suggestions, trimming to 5"
                    );
                    parsed.suggestions.truncate(MAX_SUGGESTIONS);
                }
                info!(
                    count = parsed.suggestions.len(),
                    "day meal plan chat completed"
                );
                Ok(parsed)
            }
            Err(e) => {
                warn!("failed to parse AI response: {e}");
                Ok(create_fallback_response(
                    &input,
                    &format!("Parsing error: {e}"),
                ))
            }
        }
    }
}

fn create_initial_prompt(input: &SuggestMealsForDayInput) -> String {
    format!(
        "\
You are a helpful meal planning assistant. Your task is to suggest 3-5 meals for a specific day based on the user's context.

DAY BEING PLANNED:
{day_name}

USER CONTEXT (persistent information about the user):
{chat_context}

CALENDAR EVENTS FOR THIS DAY:
{events}

ALREADY PLANNED MEALS THIS WEEK:
{planned_meals}

RECENT MEAL HISTORY (to avoid repetition):
{recent_meals}

AVAILABLE MEALS TO CHOOSE FROM:
{available_meals}

INSTRUCTIONS:
- Suggest 3-5 meals ranked from most suitable to least suitable
- ALWAYS consider the user context when making suggestions (dietary restrictions, preferences, household info, etc.)
- Consider the calendar events when choosing effort levels:
  * Busy days with many events -> suggest LOW effort meals
  * Free days -> can suggest MEDIUM or HIGH effort meals
  * Consider event timings (morning events less likely to affect dinner)
- Avoid suggesting meals that were recently planned (check recent history)
- Ensure variety - don't suggest similar meals (e.g., multiple pasta dishes)
- Consider the already planned meals for this week to ensure variety
- For each suggestion, assign a rank (1-5) where 1 is most suitable
- Provide clear reasoning explaining why these meals are appropriate for this day

CONTEXT MANAGEMENT:
- If the user's message contains important information that should be remembered for future meal planning, include it in the 'updated_chat_context' field
- Important information includes: dietary restrictions, preferences, dislikes, household composition, timing preferences, allergies, favorite meals, etc.
- If no new important information is provided, set 'updated_chat_context' to null
- If updating context, include ALL previous context plus the new information (don't remove existing context)

Remember to suggest 3-5 meals, ranked by suitability, with a single reasoning paragraph explaining your choices.",
        day_name = format_day(input.day_of_week),
        chat_context = format_chat_context(input.chat_context.as_ref()),
        events = format_calendar_events(&input.calendar_events),
        planned_meals =
            format_current_week_plan(input.current_week_plan.as_deref(), input.day_of_week),
        recent_meals = format_recent_meals(&input.recent_meal_plans),
        available_meals = format_available_meals(&input.available_meals),
    )
}

fn create_followup_prompt(input: &SuggestMealsForDayInput) -> String {
    let last_user_message = input
        .conversation_history
        .iter()
        .rev()
        .find(|msg| msg.role == "user")
        .map(|msg| msg.content.as_str())
        .unwrap_or("No specific feedback");

    let conversation = input
        .conversation_history
        .iter()
        .map(|msg| format!("{}: {}", msg.role.to_uppercase(), msg.content))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\
You are a helpful meal planning assistant. You previously suggested meals for {day_name}, and the user has provided feedback.

USER CONTEXT (persistent information about the user):
{chat_context}

CALENDAR EVENTS FOR THIS DAY:
{events}

ALREADY PLANNED MEALS THIS WEEK:
{planned_meals}

RECENT MEAL HISTORY (to avoid repetition):
{recent_meals}

CONVERSATION HISTORY:
{conversation}

AVAILABLE MEALS TO CHOOSE FROM:
{available_meals}

USER'S LATEST FEEDBACK:
{user_feedback}

INSTRUCTIONS:
- Based on the user's feedback, adjust your meal suggestions
- ALWAYS consider the user context when making suggestions (dietary restrictions, preferences, household info, etc.)
- Consider the calendar events when choosing effort levels:
  * Busy days with many events -> suggest LOW effort meals
  * Free days -> can suggest MEDIUM or HIGH effort meals
  * Consider event timings (morning events less likely to affect dinner)
- Avoid suggesting meals that were recently planned (check recent history)
- Consider the already planned meals for this week to ensure variety
- Still suggest 3-5 meals ranked by suitability
- Address the user's specific requests or concerns
- If the user wants vegetarian meals, only suggest vegetarian options
- If the user doesn't like a specific ingredient or meal type, exclude those
- If the user likes one of your suggestions, you can keep it and suggest variations
- Provide clear reasoning explaining how you addressed their feedback

CONTEXT MANAGEMENT:
- If the user's feedback contains important information that should be remembered for future meal planning, include it in the 'updated_chat_context' field
- Important information includes: dietary restrictions, preferences, dislikes, household composition, timing preferences, allergies, favorite meals, etc.
- If no new important information is provided, set 'updated_chat_context' to null
- If updating context, include ALL previous context plus the new information (don't remove existing context)

Remember to suggest 3-5 meals, ranked by suitability, with reasoning that addresses the user's feedback.",
        day_name = format_day(input.day_of_week),
        chat_context = format_chat_context(input.chat_context.as_ref()),
        events = format_calendar_events(&input.calendar_events),
        planned_meals =
            format_current_week_plan(input.current_week_plan.as_deref(), input.day_of_week),
        recent_meals = format_recent_meals(&input.recent_meal_plans),
        conversation = conversation,
        available_meals = format_available_meals(&input.available_meals),
        user_feedback = last_user_message,
    )
}

/// Degraded-mode response when the model call or parse fails: the first
/// few available meals, in order, with no scores.
fn create_fallback_response(input: &SuggestMealsForDayInput, error: &str) -> MealDaySuggestions {
    info!("creating fallback meal suggestions: {error}");

    let suggestions = input
        .available_meals
        .iter()
        .take(MAX_SUGGESTIONS)
        .enumerate()
        .map(|(i, meal)| SuggestedMeal {
            meal_name: meal.name.clone(),
            meal_id: meal.id.unwrap_or(0),
            rank: i as u8 + 1,
            suitability_score: None,
        })
        .collect();

    MealDaySuggestions {
        suggestions,
        reasoning: format!(
            "I encountered an error generating personalized suggestions ({error}). Here are some meal options from your available meals."
        ),
        conversation_complete: false,
        updated_chat_context: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        chat::entities::ChatMessage,
        common::{MealPlanAiConfig, ports::MockLLMClient},
        meal::entities::MealDto,
        recipe::ports::MockPageFetcher,
    };
    use chrono::NaiveDate;
    use serde_json::json;

    fn meal(name: &str, id: i64) -> MealDto {
        MealDto {
            id: Some(id),
            name: name.to_string(),
            effort: None,
            image: None,
            description: None,
            serves: None,
            prep_time_minutes: None,
            ingredients: None,
            recipe: None,
            tags: None,
        }
    }

    fn input(meals: Vec<MealDto>, history: Vec<ChatMessage>) -> SuggestMealsForDayInput {
        SuggestMealsForDayInput {
            day_of_week: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            calendar_events: vec![],
            current_week_plan: None,
            recent_meal_plans: vec![],
            available_meals: meals,
            conversation_history: history,
            chat_context: None,
        }
    }

    fn service(llm: MockLLMClient) -> Service<MockLLMClient, MockPageFetcher> {
        Service::new(llm, MockPageFetcher::new(), MealPlanAiConfig::default())
    }

    #[tokio::test]
    async fn parses_model_output_and_keeps_context() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _, _, _| {
            let body = json!({
                "suggestions": [
                    { "meal_name": "Tacos", "meal_id": 1, "rank": 1 },
                    { "meal_name": "Curry", "meal_id": 2, "rank": 2 },
                    { "meal_name": "Stir Fry", "meal_id": 3, "rank": 3 }
                ],
                "reasoning": "Quick meals for a busy Monday.",
                "conversation_complete": false,
                "updated_chat_context": { "dietary_restrictions": "vegetarian" }
            })
            .to_string();
            Box::pin(async move { Ok(body) })
        });

        let result = service(llm)
            .suggest_meals_for_day(
                AccessToken::new("token".to_string()),
                input(vec![meal("Tacos", 1)], vec![]),
            )
            .await
            .unwrap();

        assert_eq!(result.suggestions.len(), 3);
        assert_eq!(result.suggestions[0].meal_name, "Tacos");
        let context = result.updated_chat_context.unwrap();
        assert_eq!(context["dietary_restrictions"], "vegetarian");
    }

    #[tokio::test]
    async fn trims_excess_suggestions_to_five() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _, _, _| {
            let suggestions: Vec<serde_json::Value> = (1..=7)
                .map(|i| json!({ "meal_name": format!("Meal {i}"), "meal_id": i, "rank": i }))
                .collect();
            let body = json!({
                "suggestions": suggestions,
                "reasoning": "Plenty of options.",
                "conversation_complete": false
            })
            .to_string();
            Box::pin(async move { Ok(body) })
        });

        let result = service(llm)
            .suggest_meals_for_day(AccessToken::new("token".to_string()), input(vec![], vec![]))
            .await
            .unwrap();

        assert_eq!(result.suggestions.len(), 5);
    }

    #[tokio::test]
    async fn model_error_falls_back_to_available_meals() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _, _, _| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "Gemini API error 503".to_string(),
                ))
            })
        });

        let meals: Vec<MealDto> = (1..=8).map(|i| meal(&format!("Meal {i}"), i)).collect();
        let result = service(llm)
            .suggest_meals_for_day(AccessToken::new("token".to_string()), input(meals, vec![]))
            .await
            .unwrap();

        assert_eq!(result.suggestions.len(), 5);
        assert_eq!(result.suggestions[0].rank, 1);
        assert!(!result.conversation_complete);
        assert!(result.reasoning.contains("AI model error"));
        assert!(result.updated_chat_context.is_none());
    }

    #[tokio::test]
    async fn unparseable_output_falls_back() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _, _, _| Box::pin(async { Ok("not json at all".to_string()) }));

        let result = service(llm)
            .suggest_meals_for_day(
                AccessToken::new("token".to_string()),
                input(
                    vec![meal("Soup", 4)],
                    vec![
                        ChatMessage {
                            role: "user".to_string(),
                            content: "something lighter please".to_string(),
                        },
                        ChatMessage {
                            role: "assistant".to_string(),
                            content: "sure".to_string(),
                        },
                        ChatMessage {
                            role: "user".to_string(),
                            content: "vegetarian too".to_string(),
                        },
                    ],
                ),
            )
            .await
            .unwrap();

        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].meal_id, 4);
        assert!(result.reasoning.contains("Parsing error"));
    }

    #[test]
    fn followup_prompt_includes_latest_user_feedback() {
        let input = input(
            vec![],
            vec![
                ChatMessage {
                    role: "user".to_string(),
                    content: "first ask".to_string(),
                },
                ChatMessage {
                    role: "assistant".to_string(),
                    content: "suggestions".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: "no pasta please".to_string(),
                },
            ],
        );

        let prompt = create_followup_prompt(&input);
        assert!(prompt.contains("USER'S LATEST FEEDBACK:\nno pasta please"));
        assert!(prompt.contains("USER: first ask"));
        assert!(prompt.contains("ASSISTANT: suggestions"));
    }

    #[test]
    fn initial_prompt_mentions_the_day_and_context_placeholder() {
        let prompt = create_initial_prompt(&input(vec![meal("Tacos", 1)], vec![]));
        assert!(prompt.contains("Monday, March 10, 2025"));
        assert!(prompt.contains("No stored context yet"));
        assert!(prompt.contains("- Tacos [ID: 1]"));
    }
}
