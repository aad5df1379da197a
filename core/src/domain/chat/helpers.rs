//! Prompt section formatters for the day-planning chat.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::{
    chat::entities::ChatContext,
    meal::entities::{CalendarEventDto, MealDto, PlanDto},
};

pub fn format_day(day: NaiveDate) -> String {
    day.format("%A, %B %d, %Y").to_string()
}

pub fn format_calendar_events(events: &[CalendarEventDto]) -> String {
    if events.is_empty() {
        return "No calendar events".to_string();
    }

    events
        .iter()
        .map(|event| {
            let kind = if event.all_day { "All day" } else { "Timed event" };
            format!("- {} at {} ({})", event.name, event.time, kind)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats the current week's plan, skipping the day being planned.
pub fn format_current_week_plan(plan: Option<&[PlanDto]>, current_day: NaiveDate) -> String {
    let Some(plan) = plan else {
        return "No meals planned for this week yet".to_string();
    };
    if plan.is_empty() {
        return "No meals planned for this week yet".to_string();
    }

    let lines: Vec<String> = plan
        .iter()
        .filter(|day_plan| day_plan.date != current_day)
        .filter_map(|day_plan| {
            let meal_names: Vec<&str> = day_plan
                .plan_meals
                .iter()
                .map(|pm| pm.meal.name.as_str())
                .collect();
            if meal_names.is_empty() {
                None
            } else {
                Some(format!(
                    "- {}: {}",
                    day_plan.date.format("%A, %b %d"),
                    meal_names.join(", ")
                ))
            }
        })
        .collect();

    if lines.is_empty() {
        "No other meals planned for this week".to_string()
    } else {
        lines.join("\n")
    }
}

/// Formats recent meal history to avoid repetition. Only the last 20 plans
/// are considered; names are deduplicated and sorted.
pub fn format_recent_meals(recent_meal_plans: &[PlanDto]) -> String {
    if recent_meal_plans.is_empty() {
        return "No recent meal history available".to_string();
    }

    let start = recent_meal_plans.len().saturating_sub(20);
    let recent_meals: BTreeSet<&str> = recent_meal_plans[start..]
        .iter()
        .flat_map(|plan| plan.plan_meals.iter())
        .map(|pm| pm.meal.name.as_str())
        .collect();

    if recent_meals.is_empty() {
        return "No recent meals to avoid".to_string();
    }

    format!(
        "Recently planned meals (try to avoid): {}",
        recent_meals.into_iter().collect::<Vec<_>>().join(", ")
    )
}

/// Formats available meals with the attributes the model ranks on.
pub fn format_available_meals(available_meals: &[MealDto]) -> String {
    available_meals
        .iter()
        .map(|meal| {
            let effort = meal.effort.map(|e| e.as_str()).unwrap_or("Unknown");
            let serves = meal
                .serves
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            let prep = meal
                .prep_time_minutes
                .map(|p| p.to_string())
                .unwrap_or_else(|| "N/A".to_string());

            let tags = match &meal.tags {
                Some(tags) if !tags.is_empty() => format!(
                    " [Tags: {}]",
                    tags.iter()
                        .map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                _ => String::new(),
            };

            format!(
                "- {} [ID: {}] (Effort: {}, Serves: {}, Prep: {}min){}",
                meal.name,
                meal.id.unwrap_or(0),
                effort,
                serves,
                prep,
                tags
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the opaque context mapping into readable prompt lines.
/// Keys become Title Case; list values are comma-joined, nested objects
/// stay JSON.
pub fn format_chat_context(chat_context: Option<&ChatContext>) -> String {
    let Some(context) = chat_context.filter(|c| !c.is_empty()) else {
        return "No stored context yet - this is the first interaction or no preferences have been captured"
            .to_string();
    };

    context
        .iter()
        .map(|(key, value)| format!("- {}: {}", title_case(key), format_context_value(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_context_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(format_context_value)
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::Object(_) => value.to_string(),
        other => other.to_string(),
    }
}

fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meal::entities::{Effort, MealTag, PlanMealDto};
    use serde_json::json;

    fn meal(name: &str, id: i64) -> MealDto {
        MealDto {
            id: Some(id),
            name: name.to_string(),
            effort: Some(Effort::Medium),
            image: None,
            description: None,
            serves: Some(4),
            prep_time_minutes: Some(30),
            ingredients: None,
            recipe: None,
            tags: Some(vec![MealTag::FamilyFriendly]),
        }
    }

    fn plan(date: NaiveDate, meal_names: &[&str]) -> PlanDto {
        PlanDto {
            id: None,
            date,
            plan_meals: meal_names
                .iter()
                .enumerate()
                .map(|(i, name)| PlanMealDto {
                    id: None,
                    meal: meal(name, i as i64 + 1),
                    required_servings: 4,
                })
                .collect(),
            shopping_list_items: None,
        }
    }

    #[test]
    fn chat_context_renders_title_case_keys_and_joined_lists() {
        let mut context = ChatContext::new();
        context.insert(
            "dietary_restrictions".to_string(),
            json!(["vegetarian", "no nuts"]),
        );
        context.insert("household_size".to_string(), json!(3));

        let text = format_chat_context(Some(&context));
        assert!(text.contains("- Dietary Restrictions: vegetarian, no nuts"));
        assert!(text.contains("- Household Size: 3"));
    }

    #[test]
    fn empty_chat_context_gets_first_interaction_text() {
        assert!(format_chat_context(None).contains("No stored context yet"));
        assert!(format_chat_context(Some(&ChatContext::new())).contains("No stored context yet"));
    }

    #[test]
    fn available_meals_line_includes_id_effort_and_tags() {
        let text = format_available_meals(&[meal("Spaghetti Carbonara", 7)]);
        assert_eq!(
            text,
            "- Spaghetti Carbonara [ID: 7] (Effort: MEDIUM, Serves: 4, Prep: 30min) [Tags: FAMILY_FRIENDLY]"
        );
    }

    #[test]
    fn recent_meals_dedupes_sorts_and_keeps_last_twenty_plans() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut plans: Vec<PlanDto> = (0..25)
            .map(|i| plan(date + chrono::Days::new(i), &["Old Stew"]))
            .collect();
        // The first five plans fall outside the 20-plan window.
        plans[0].plan_meals[0].meal.name = "Forgotten Meal".to_string();
        plans[24].plan_meals[0].meal.name = "Chili".to_string();

        let text = format_recent_meals(&plans);
        assert_eq!(text, "Recently planned meals (try to avoid): Chili, Old Stew");
    }

    #[test]
    fn week_plan_skips_the_day_being_planned() {
        let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        let plans = vec![plan(monday, &["Tacos"]), plan(tuesday, &["Curry"])];

        let text = format_current_week_plan(Some(&plans), monday);
        assert!(!text.contains("Tacos"));
        assert!(text.contains("Curry"));
    }

    #[test]
    fn calendar_events_distinguish_all_day() {
        let events = vec![CalendarEventDto {
            name: "Conference".to_string(),
            time: NaiveDate::from_ymd_opt(2025, 1, 6)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            colour: None,
            text_colour: None,
            all_day: true,
        }];
        assert!(format_calendar_events(&events).contains("(All day)"));
        assert_eq!(format_calendar_events(&[]), "No calendar events");
    }
}
