use tracing::{info, warn};

use crate::domain::{
    chat::helpers::{format_available_meals, format_calendar_events},
    common::{
        entities::app_errors::CoreError, ports::LLMClient, services::Service,
        value_objects::AccessToken,
    },
    meal::entities::{PlanDto, PlanMealDto},
    plan_generation::{
        entities::WeeklyPlanResult, ports::MealPlanGenerationService,
        schema::get_weekly_plan_schema, value_objects::GenerateMealPlanInput,
    },
    recipe::ports::PageFetcher,
};

const GENERATION_TEMPERATURE: f32 = 0.7;
const DEFAULT_SERVINGS: i32 = 4;

impl<L, P> MealPlanGenerationService for Service<L, P>
where
    L: LLMClient,
    P: PageFetcher,
{
    async fn generate_meal_plan(
        &self,
        access_token: AccessToken,
        input: GenerateMealPlanInput,
    ) -> Result<WeeklyPlanResult, CoreError> {
        info!(
            week_start = %input.week_start_date,
            week_end = %input.week_end_date,
            "starting meal plan generation"
        );

        let prompt = create_generation_prompt(&input);

        let raw = match self
            .llm_client
            .generate_with_text(
                Some(access_token),
                prompt,
                GENERATION_TEMPERATURE,
                get_weekly_plan_schema(),
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

        match serde_json::from_str::<WeeklyPlanResult>(&raw) {
            Ok(parsed) => {
                let simplified = simplify_response_meals(parsed);
                info!(
                    plans = simplified.generated_plans.len(),
                    "meal plan generation completed"
                );
                Ok(simplified)
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

fn create_generation_prompt(input: &GenerateMealPlanInput) -> String {
    let available_meals = if input.available_meals.is_empty() {
        "No meals provided".to_string()
    } else {
        format_available_meals(&input.available_meals)
    };

    let recent_meal_plans = if input.recent_meal_plans.is_empty() {
        "No recent plans".to_string()
    } else {
        input
            .recent_meal_plans
            .iter()
            .flat_map(|plan| {
                plan.plan_meals
                    .iter()
                    .map(|pm| format!("- {} on {}", pm.meal.name, plan.date))
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let existing_plans = if input.existing_plans_for_week.is_empty() {
        "No days planned yet".to_string()
    } else {
        input
            .existing_plans_for_week
            .iter()
            .map(|plan| {
                let names: Vec<&str> = plan
                    .plan_meals
                    .iter()
                    .map(|pm| pm.meal.name.as_str())
                    .collect();
                format!("- {}: {}", plan.date, names.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let extra_instructions = match input.prompt.as_deref() {
        Some(text) if !text.trim().is_empty() => {
            format!("\nADDITIONAL INSTRUCTIONS FROM THE USER:\n{}\n", text.trim())
        }
        _ => String::new(),
    };

    format!(
        "\
You are a helpful meal planning assistant. Your task is to generate a weekly meal plan based on the provided information.

CONTEXT:
- Week period: {week_start} to {week_end}
- Available meals:
{available_meals}
- Recent meal plans:
{recent_meal_plans}
- Already planned days this week (do not change these):
{existing_plans}
- Calendar events:
{calendar_events}
{extra_instructions}
REQUIREMENTS:
1. Plan one main meal per day for the week
2. Consider meal effort levels in relation to calendar events (use low effort meals on busy days)
3. Avoid repeating meals from recent plans unless absolutely necessary
4. Ensure variety in meal types and effort levels throughout the week
5. Consider calendar events when planning - suggest easier meals on days with many events
6. Include a brief reasoning for your choices

IMPORTANT:
- Include a 'generated_plans' array with one plan per day, and a 'reasoning' field explaining your choices
- For meals in the response, ONLY include the 'name' field - do not include any other meal properties like effort, ingredients, etc.",
        week_start = input.week_start_date,
        week_end = input.week_end_date,
        available_meals = available_meals,
        recent_meal_plans = recent_meal_plans,
        existing_plans = existing_plans,
        calendar_events = if input.calendar_events.is_empty() {
            "No calendar events".to_string()
        } else {
            format_calendar_events(&input.calendar_events)
        },
        extra_instructions = extra_instructions,
    )
}

/// Strips every meal in the response down to its name. The model sometimes
/// invents effort levels or ingredients; downstream enrichment owns those.
fn simplify_response_meals(result: WeeklyPlanResult) -> WeeklyPlanResult {
    let generated_plans = result
        .generated_plans
        .into_iter()
        .map(|plan| PlanDto {
            id: None,
            date: plan.date,
            plan_meals: plan
                .plan_meals
                .into_iter()
                .map(|pm| PlanMealDto {
                    id: None,
                    meal: pm.meal.name_only(),
                    required_servings: pm.required_servings,
                })
                .collect(),
            shopping_list_items: None,
        })
        .collect();

    WeeklyPlanResult {
        generated_plans,
        reasoning: result.reasoning,
    }
}

/// Round-robins the available meals across the week when the model call
/// or parse fails.
fn create_fallback_response(input: &GenerateMealPlanInput, error: &str) -> WeeklyPlanResult {
    info!("creating fallback meal plan: {error}");

    let mut generated_plans = Vec::new();

    if input.available_meals.is_empty() {
        warn!("no available meals provided for fallback plan");
    } else {
        let mut current_date = input.week_start_date;
        let mut meal_index = 0usize;

        while current_date <= input.week_end_date {
            let meal = &input.available_meals[meal_index % input.available_meals.len()];
            generated_plans.push(PlanDto {
                id: None,
                date: current_date,
                plan_meals: vec![PlanMealDto {
                    id: None,
                    meal: meal.name_only(),
                    required_servings: meal.serves.unwrap_or(DEFAULT_SERVINGS),
                }],
                shopping_list_items: None,
            });

            let Some(next) = current_date.succ_opt() else {
                break;
            };
            current_date = next;
            meal_index += 1;
        }
    }

    info!(plans = generated_plans.len(), "generated fallback plans");

    WeeklyPlanResult {
        generated_plans,
        reasoning: format!(
            "Fallback meal plan generated due to AI parsing error: {error}. Created simple rotation of available meals."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{MealPlanAiConfig, ports::MockLLMClient},
        meal::entities::MealDto,
        recipe::ports::MockPageFetcher,
    };
    use chrono::NaiveDate;
    use serde_json::json;

    fn meal(name: &str, serves: Option<i32>) -> MealDto {
        MealDto {
            id: Some(1),
            name: name.to_string(),
            effort: None,
            image: None,
            description: None,
            serves,
            prep_time_minutes: None,
            ingredients: None,
            recipe: None,
            tags: None,
        }
    }

    fn week_input(meals: Vec<MealDto>) -> GenerateMealPlanInput {
        GenerateMealPlanInput {
            week_start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            week_end_date: NaiveDate::from_ymd_opt(2025, 3, 16).unwrap(),
            available_meals: meals,
            recent_meal_plans: vec![],
            existing_plans_for_week: vec![],
            calendar_events: vec![],
            prompt: None,
        }
    }

    fn service(llm: MockLLMClient) -> Service<MockLLMClient, MockPageFetcher> {
        Service::new(llm, MockPageFetcher::new(), MealPlanAiConfig::default())
    }

    #[tokio::test]
    async fn strips_extra_meal_fields_from_model_output() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _, _, _| {
            let body = json!({
                "generated_plans": [{
                    "date": "2025-03-10",
                    "plan_meals": [{
                        "meal": { "name": "Lasagne", "effort": "HIGH", "serves": 6 },
                        "required_servings": 4
                    }]
                }],
                "reasoning": "A hearty start to the week."
            })
            .to_string();
            Box::pin(async move { Ok(body) })
        });

        let result = service(llm)
            .generate_meal_plan(
                AccessToken::new("token".to_string()),
                week_input(vec![meal("Lasagne", Some(6))]),
            )
            .await
            .unwrap();

        assert_eq!(result.generated_plans.len(), 1);
        let generated = &result.generated_plans[0].plan_meals[0].meal;
        assert_eq!(generated.name, "Lasagne");
        assert!(generated.effort.is_none());
        assert!(generated.serves.is_none());
    }

    #[tokio::test]
    async fn fallback_rotates_meals_over_every_day_of_the_week() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _, _, _| Box::pin(async { Ok("{broken".to_string()) }));

        let result = service(llm)
            .generate_meal_plan(
                AccessToken::new("token".to_string()),
                week_input(vec![meal("Tacos", Some(2)), meal("Curry", None)]),
            )
            .await
            .unwrap();

        assert_eq!(result.generated_plans.len(), 7);
        assert_eq!(result.generated_plans[0].plan_meals[0].meal.name, "Tacos");
        assert_eq!(result.generated_plans[0].plan_meals[0].required_servings, 2);
        assert_eq!(result.generated_plans[1].plan_meals[0].meal.name, "Curry");
        // serves missing defaults to 4
        assert_eq!(result.generated_plans[1].plan_meals[0].required_servings, 4);
        assert_eq!(result.generated_plans[2].plan_meals[0].meal.name, "Tacos");
        assert!(result.reasoning.contains("Fallback meal plan"));
    }

    #[tokio::test]
    async fn fallback_without_meals_produces_empty_plan_list() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _, _, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("boom".to_string())) })
        });

        let result = service(llm)
            .generate_meal_plan(AccessToken::new("token".to_string()), week_input(vec![]))
            .await
            .unwrap();

        assert!(result.generated_plans.is_empty());
        assert!(result.reasoning.contains("AI model error"));
    }

    #[test]
    fn prompt_carries_existing_plans_and_user_instructions() {
        let mut input = week_input(vec![meal("Tacos", None)]);
        input.existing_plans_for_week = vec![PlanDto {
            id: None,
            date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
            plan_meals: vec![PlanMealDto {
                id: None,
                meal: meal("Roast Chicken", None),
                required_servings: 4,
            }],
            shopping_list_items: None,
        }];
        input.prompt = Some("Keep Friday light".to_string());

        let prompt = create_generation_prompt(&input);
        assert!(prompt.contains("- 2025-03-12: Roast Chicken"));
        assert!(prompt.contains("ADDITIONAL INSTRUCTIONS FROM THE USER:\nKeep Friday light"));
    }
}
