//! Recipe scraping: OpenGraph and schema.org metadata first, generic
//! HTML heuristics after.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{error, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::LLMClient, services::Service},
    ingredient::parser::parse_ingredient_text,
    meal::entities::Effort,
    recipe::{
        entities::ParsedRecipe,
        ports::{PageFetcher, RecipeService},
    },
};

macro_rules! selector {
    ($name:ident, $css:expr) => {
        static $name: LazyLock<Selector> = LazyLock::new(|| {
            Selector::parse($css).unwrap_or_else(|e| unreachable!("invalid selector {}: {e}", $css))
        });
    };
}

selector!(OG_TITLE, r#"meta[property="og:title"]"#);
selector!(OG_DESCRIPTION, r#"meta[property="og:description"]"#);
selector!(META_DESCRIPTION, r#"meta[name="description"]"#);
selector!(ITEMPROP_NAME, r#"[itemprop="name"]"#);
selector!(ITEMPROP_DESCRIPTION, r#"[itemprop="description"]"#);
selector!(ITEMPROP_PREP_TIME, r#"[itemprop="prepTime"]"#);
selector!(ITEMPROP_COOK_TIME, r#"[itemprop="cookTime"]"#);
selector!(ITEMPROP_TOTAL_TIME, r#"[itemprop="totalTime"]"#);
selector!(ITEMPROP_INGREDIENT, r#"[itemprop="recipeIngredient"]"#);
selector!(H1, "h1");
selector!(TITLE_TAG, "title");
selector!(HEADINGS, "h1, h2, h3, h4");
selector!(LIST_ITEM, "li");
selector!(ANY_LIST, "ul, ol");

// Class names recipe sites commonly use for ingredient lines.
const INGREDIENT_CLASSES: &[&str] = &[
    "ingredient",
    "recipe-ingredient",
    "ingredients-item",
    "ingredient-text",
    "ingredient-list",
    "structured-ingredients__list-item",
];

static HOURS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:hr|hour|hours)")
        .unwrap_or_else(|e| unreachable!("invalid hours regex: {e}"))
});
static MINUTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:min|minute|minutes)")
        .unwrap_or_else(|e| unreachable!("invalid minutes regex: {e}"))
});
static ISO_HOURS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)H").unwrap_or_else(|e| unreachable!("invalid iso hours regex: {e}"))
});
static ISO_MINUTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)M").unwrap_or_else(|e| unreachable!("invalid iso minutes regex: {e}"))
});

impl<L, P> RecipeService for Service<L, P>
where
    L: LLMClient,
    P: PageFetcher,
{
    async fn parse_recipe(&self, url: String) -> Result<ParsedRecipe, CoreError> {
        info!("parsing recipe from URL: {url}");

        let html = match self.page_fetcher.fetch(url.clone()).await {
            Ok(html) => html,
            Err(e) => {
                error!("error parsing recipe from {url}: {e}");
                return Ok(ParsedRecipe {
                    title: None,
                    description: Some(format!("Failed to parse recipe: {e}")),
                    total_time_minutes: None,
                    effort: None,
                    ingredients: vec![],
                    url,
                });
            }
        };

        // Html is not Send, so all extraction happens in one synchronous
        // pass with no awaits in between.
        Ok(extract_recipe(&html, url))
    }
}

fn extract_recipe(html: &str, url: String) -> ParsedRecipe {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let description = extract_description(&document);
    let total_time_minutes = extract_time(&document);
    let ingredients = extract_ingredients(&document)
        .into_iter()
        .map(|raw| parse_ingredient_text(&raw))
        .collect::<Vec<_>>();
    let effort = estimate_effort(total_time_minutes);

    info!(
        ingredients = ingredients.len(),
        time = ?total_time_minutes,
        "successfully parsed recipe: title={title:?}"
    );

    ParsedRecipe {
        title,
        description,
        total_time_minutes,
        effort,
        ingredients,
        url,
    }
}

fn extract_title(document: &Html) -> Option<String> {
    if let Some(meta) = document.select(&OG_TITLE).next() {
        if let Some(content) = meta.value().attr("content") {
            let content = content.trim();
            if !content.is_empty() {
                return Some(content.to_string());
            }
        }
    }

    for selector in [&*ITEMPROP_NAME, &*H1, &*TITLE_TAG] {
        if let Some(elem) = document.select(selector).next() {
            let text = element_text(elem);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }

    warn!("could not find recipe title");
    None
}

fn extract_description(document: &Html) -> Option<String> {
    for selector in [&*OG_DESCRIPTION, &*META_DESCRIPTION] {
        if let Some(meta) = document.select(selector).next() {
            if let Some(content) = meta.value().attr("content") {
                let content = content.trim();
                if !content.is_empty() {
                    return Some(content.to_string());
                }
            }
        }
    }

    if let Some(elem) = document.select(&ITEMPROP_DESCRIPTION).next() {
        let text = element_text(elem);
        if !text.is_empty() {
            return Some(text);
        }
    }

    warn!("could not find recipe description");
    None
}

/// Total time, preferring an explicit totalTime over prep + cook.
fn extract_time(document: &Html) -> Option<i32> {
    if let Some(total) = extract_time_value(document, &ITEMPROP_TOTAL_TIME) {
        return Some(total);
    }

    let prep = extract_time_value(document, &ITEMPROP_PREP_TIME);
    let cook = extract_time_value(document, &ITEMPROP_COOK_TIME);

    if prep.is_some() || cook.is_some() {
        let total = prep.unwrap_or(0) + cook.unwrap_or(0);
        if total > 0 {
            return Some(total);
        }
    }

    warn!("could not find recipe time information");
    None
}

fn extract_time_value(document: &Html, selector: &Selector) -> Option<i32> {
    let elem = document.select(selector).next()?;

    if let Some(datetime) = elem.value().attr("datetime") {
        if let Some(minutes) = parse_iso_duration(datetime) {
            return Some(minutes);
        }
    }

    parse_time_text(&element_text(elem))
}

/// ISO 8601 durations like "PT30M" or "PT1H30M".
fn parse_iso_duration(duration: &str) -> Option<i32> {
    let rest = duration.strip_prefix("PT")?;

    let hours: i32 = ISO_HOURS_RE
        .captures(rest)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0);
    let minutes: i32 = ISO_MINUTES_RE
        .captures(rest)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0);

    let total = hours * 60 + minutes;
    (total > 0).then_some(total)
}

/// Free text like "1 hour 30 minutes".
fn parse_time_text(text: &str) -> Option<i32> {
    let hours: i32 = HOURS_RE
        .captures(text)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0);
    let minutes: i32 = MINUTES_RE
        .captures(text)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0);

    let total = hours * 60 + minutes;
    (total > 0).then_some(total)
}

fn extract_ingredients(document: &Html) -> Vec<String> {
    // schema.org markup is the most reliable source.
    let from_itemprop: Vec<String> = document
        .select(&ITEMPROP_INGREDIENT)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect();
    if !from_itemprop.is_empty() {
        info!(
            count = from_itemprop.len(),
            "found ingredients in schema.org markup"
        );
        return from_itemprop;
    }

    for class_name in INGREDIENT_CLASSES {
        let Ok(selector) = Selector::parse(&format!(r#"[class*="{class_name}" i]"#)) else {
            continue;
        };
        let found: Vec<String> = document
            .select(&selector)
            .map(element_text)
            .filter(|text| !text.is_empty() && !text.starts_with("Ingredients"))
            .collect();
        if !found.is_empty() {
            info!(
                count = found.len(),
                "found ingredients using class '{class_name}'"
            );
            return found;
        }
    }

    // Last resort: a list following an "Ingredients" heading.
    if let Some(list) = find_list_after_ingredients_heading(document) {
        let found: Vec<String> = list
            .select(&LIST_ITEM)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect();
        if !found.is_empty() {
            info!(
                count = found.len(),
                "found ingredients in list after heading"
            );
            return found;
        }
    }

    warn!("could not find ingredients in HTML");
    vec![]
}

fn find_list_after_ingredients_heading(document: &Html) -> Option<ElementRef<'_>> {
    let heading = document
        .select(&HEADINGS)
        .find(|h| element_text(*h).to_lowercase().contains("ingredients"))?;

    for sibling in heading.next_siblings() {
        if let Some(elem) = ElementRef::wrap(sibling) {
            let name = elem.value().name();
            if name == "ul" || name == "ol" {
                return Some(elem);
            }
        }
    }

    // Some layouts nest the list in a sibling container.
    let parent = heading.parent().and_then(ElementRef::wrap)?;
    parent.select(&ANY_LIST).next()
}

fn estimate_effort(total_time_minutes: Option<i32>) -> Option<Effort> {
    let minutes = total_time_minutes?;
    Some(if minutes < 30 {
        Effort::Low
    } else if minutes < 60 {
        Effort::Medium
    } else {
        Effort::High
    })
}

fn element_text(elem: ElementRef<'_>) -> String {
    elem.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{MealPlanAiConfig, ports::MockLLMClient},
        recipe::ports::MockPageFetcher,
    };

    const SCHEMA_ORG_PAGE: &str = r#"
        <html>
          <head>
            <meta property="og:title" content="Classic Lasagne" />
            <meta property="og:description" content="A rich family lasagne." />
          </head>
          <body>
            <h1>Ignored Heading</h1>
            <span itemprop="prepTime" datetime="PT30M">30 mins</span>
            <span itemprop="cookTime" datetime="PT1H">1 hour</span>
            <li itemprop="recipeIngredient">500 g beef mince</li>
            <li itemprop="recipeIngredient">2 cans chopped tomatoes</li>
          </body>
        </html>"#;

    const PLAIN_PAGE: &str = r#"
        <html>
          <head><title>Weeknight Stir Fry</title></head>
          <body>
            <h2>Ingredients</h2>
            <ul>
              <li>2 tbsp soy sauce</li>
              <li>1 head broccoli</li>
            </ul>
          </body>
        </html>"#;

    fn service(fetcher: MockPageFetcher) -> Service<MockLLMClient, MockPageFetcher> {
        Service::new(MockLLMClient::new(), fetcher, MealPlanAiConfig::default())
    }

    #[test]
    fn extracts_opengraph_and_schema_org_fields() {
        let recipe = extract_recipe(SCHEMA_ORG_PAGE, "https://example.com/lasagne".to_string());

        assert_eq!(recipe.title.as_deref(), Some("Classic Lasagne"));
        assert_eq!(recipe.description.as_deref(), Some("A rich family lasagne."));
        assert_eq!(recipe.total_time_minutes, Some(90));
        assert_eq!(recipe.effort, Some(Effort::High));
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].name, "beef mince");
        assert_eq!(recipe.ingredients[0].amount.as_deref(), Some("500"));
        assert_eq!(recipe.ingredients[0].unit.as_deref(), Some("g"));
        assert!(recipe.ingredients[0].is_well_formed);
    }

    #[test]
    fn falls_back_to_title_tag_and_heading_list() {
        let recipe = extract_recipe(PLAIN_PAGE, "https://example.com/stirfry".to_string());

        assert_eq!(recipe.title.as_deref(), Some("Weeknight Stir Fry"));
        assert!(recipe.description.is_none());
        assert!(recipe.total_time_minutes.is_none());
        assert!(recipe.effort.is_none());
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].raw_text, "1 head broccoli");
    }

    #[test]
    fn ingredient_classes_skip_header_rows() {
        let html = r#"
            <html><body>
              <div class="recipe-ingredient">Ingredients</div>
              <div class="recipe-ingredient">1 cup rice</div>
            </body></html>"#;

        let recipe = extract_recipe(html, "https://example.com".to_string());
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].raw_text, "1 cup rice");
    }

    #[test]
    fn iso_duration_parsing() {
        assert_eq!(parse_iso_duration("PT30M"), Some(30));
        assert_eq!(parse_iso_duration("PT1H30M"), Some(90));
        assert_eq!(parse_iso_duration("PT2H"), Some(120));
        assert_eq!(parse_iso_duration("30M"), None);
        assert_eq!(parse_iso_duration("PT"), None);
    }

    #[test]
    fn time_text_parsing() {
        assert_eq!(parse_time_text("1 hour 15 minutes"), Some(75));
        assert_eq!(parse_time_text("45 mins"), Some(45));
        assert_eq!(parse_time_text("no time here"), None);
    }

    #[test]
    fn effort_thresholds() {
        assert_eq!(estimate_effort(Some(20)), Some(Effort::Low));
        assert_eq!(estimate_effort(Some(45)), Some(Effort::Medium));
        assert_eq!(estimate_effort(Some(60)), Some(Effort::High));
        assert_eq!(estimate_effort(None), None);
    }

    #[tokio::test]
    async fn fetch_failure_returns_recipe_with_error_description() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().returning(|_| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "connection refused".to_string(),
                ))
            })
        });

        let recipe = service(fetcher)
            .parse_recipe("https://example.com/broken".to_string())
            .await
            .unwrap();

        assert!(recipe.title.is_none());
        assert!(
            recipe
                .description
                .unwrap()
                .starts_with("Failed to parse recipe:")
        );
        assert_eq!(recipe.url, "https://example.com/broken");
    }

    #[tokio::test]
    async fn fetched_page_is_parsed() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|_| Box::pin(async { Ok(SCHEMA_ORG_PAGE.to_string()) }));

        let recipe = service(fetcher)
            .parse_recipe("https://example.com/lasagne".to_string())
            .await
            .unwrap();

        assert_eq!(recipe.title.as_deref(), Some("Classic Lasagne"));
    }
}
