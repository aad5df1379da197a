//! Wire DTOs shared by the chat and plan-generation domains.
//!
//! Callers send these in several historical shapes (epoch-millisecond
//! dates, `[year, month, day, hour, minute]` event times, tag objects,
//! numeric quantities), so the deserializers here are deliberately lenient.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effort::Low => "LOW",
            Effort::Medium => "MEDIUM",
            Effort::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    Quick,
    Healthy,
    ComfortFood,
    Spicy,
    BudgetFriendly,
    FamilyFriendly,
}

impl MealTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealTag::Vegetarian => "VEGETARIAN",
            MealTag::Vegan => "VEGAN",
            MealTag::GlutenFree => "GLUTEN_FREE",
            MealTag::DairyFree => "DAIRY_FREE",
            MealTag::Quick => "QUICK",
            MealTag::Healthy => "HEALTHY",
            MealTag::ComfortFood => "COMFORT_FOOD",
            MealTag::Spicy => "SPICY",
            MealTag::BudgetFriendly => "BUDGET_FRIENDLY",
            MealTag::FamilyFriendly => "FAMILY_FRIENDLY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageDto {
    pub id: Option<i64>,
    pub url: Option<String>,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, alias = "amount", deserialize_with = "deserialize_quantity")]
    pub quantity: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unit")]
    pub unit: Option<String>,
    #[serde(default)]
    pub index: Option<i32>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub prep_time_minutes: Option<i32>,
    #[serde(default)]
    pub cook_time_minutes: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<ImageDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub effort: Option<Effort>,
    #[serde(default)]
    pub image: Option<ImageDto>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub serves: Option<i32>,
    #[serde(default, alias = "prep_time_minutes")]
    pub prep_time_minutes: Option<i32>,
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientDto>>,
    #[serde(default)]
    pub recipe: Option<RecipeDto>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Option<Vec<MealTag>>,
}

impl MealDto {
    /// A copy carrying only the meal name, used when echoing generated
    /// plans back to the caller.
    pub fn name_only(&self) -> Self {
        Self {
            id: None,
            name: self.name.clone(),
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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListItemDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub ingredient_name: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanMealDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub meal: MealDto,
    #[serde(alias = "required_servings")]
    pub required_servings: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(deserialize_with = "deserialize_flexible_date")]
    #[schema(value_type = String, example = "2025-01-06")]
    pub date: NaiveDate,
    #[serde(alias = "plan_meals")]
    pub plan_meals: Vec<PlanMealDto>,
    #[serde(default, alias = "shopping_list_items")]
    pub shopping_list_items: Option<Vec<ShoppingListItemDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDto {
    pub name: String,
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    #[schema(value_type = String, example = "2025-01-06T18:30:00")]
    pub time: NaiveDateTime,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default, alias = "text_colour")]
    pub text_colour: Option<String>,
    #[serde(default, alias = "all_day")]
    pub all_day: bool,
}

/// Accepts an ISO date string or Unix epoch milliseconds.
pub fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Millis(ms) => chrono::DateTime::from_timestamp_millis(ms)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| serde::de::Error::custom(format!("invalid epoch milliseconds: {ms}"))),
        Raw::Text(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid date: {s}. Expected 'YYYY-MM-DD' or epoch milliseconds"
            ))
        }),
    }
}

/// Accepts an RFC3339/ISO 8601 datetime string or a
/// `[year, month, day, hour, minute]` integer array.
pub fn deserialize_flexible_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Parts(Vec<i64>),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Parts(parts) => {
            if parts.len() < 5 {
                return Err(serde::de::Error::custom(
                    "datetime array must be [year, month, day, hour, minute]",
                ));
            }
            NaiveDate::from_ymd_opt(parts[0] as i32, parts[1] as u32, parts[2] as u32)
                .and_then(|d| d.and_hms_opt(parts[3] as u32, parts[4] as u32, 0))
                .ok_or_else(|| serde::de::Error::custom(format!("invalid datetime array: {parts:?}")))
        }
        Raw::Text(s) => parse_datetime_text(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {s}"))),
    }
}

fn parse_datetime_text(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    let formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    formats
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
}

/// Accepts a quantity as a string or a bare number; numbers are rendered
/// back to strings.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Num(f64),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Int(n) => n.to_string(),
        Raw::Num(n) => n.to_string(),
        Raw::Text(s) => s,
    }))
}

/// Accepts a unit as a string or an object carrying a `code` field.
fn deserialize_unit<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Object(map) => map
            .get("code")
            .and_then(|code| code.as_str())
            .map(str::to_string),
        _ => None,
    }))
}

/// Accepts tags as enum strings or `{"name": ...}` objects; anything that
/// does not map onto [`MealTag`] is dropped.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Option<Vec<MealTag>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw.map(|values| values.into_iter().filter_map(tag_from_value).collect()))
}

fn tag_from_value(value: serde_json::Value) -> Option<MealTag> {
    let name = match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Object(map) => map.get("name")?.as_str()?.to_string(),
        _ => return None,
    };

    let normalized = name.to_uppercase().replace(' ', "_");
    serde_json::from_value(serde_json::Value::String(normalized)).ok()
}
