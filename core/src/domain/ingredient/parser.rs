//! Rule-based ingredient line parser.
//!
//! Splits lines like "2 1/2 cups all-purpose flour" into an amount, a
//! unit and a name. Handles unicode fractions, mixed numbers, ranges and
//! "a pinch of" phrasing.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ingredient::entities::ParsedIngredient;

const UNICODE_FRACTIONS: &[(char, &str)] = &[
    ('¼', "1/4"),
    ('½', "1/2"),
    ('¾', "3/4"),
    ('⅐', "1/7"),
    ('⅑', "1/9"),
    ('⅒', "1/10"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

static UNITS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        // volume
        "cup",
        "cups",
        "c",
        "tablespoon",
        "tablespoons",
        "tbsp",
        "tbs",
        "tb",
        "teaspoon",
        "teaspoons",
        "tsp",
        "ts",
        "fluid ounce",
        "fluid ounces",
        "fl oz",
        "floz",
        "pint",
        "pints",
        "pt",
        "quart",
        "quarts",
        "qt",
        "gallon",
        "gallons",
        "gal",
        "milliliter",
        "milliliters",
        "ml",
        "liter",
        "liters",
        "l",
        // weight
        "pound",
        "pounds",
        "lb",
        "lbs",
        "ounce",
        "ounces",
        "oz",
        "gram",
        "grams",
        "g",
        "kilogram",
        "kilograms",
        "kg",
        // other
        "pinch",
        "pinches",
        "dash",
        "dashes",
        "clove",
        "cloves",
        "slice",
        "slices",
        "piece",
        "pieces",
        "can",
        "cans",
        "package",
        "packages",
        "pkg",
        "bunch",
        "bunches",
        "head",
        "heads",
        "sprig",
        "sprigs",
        "stalk",
        "stalks",
        "stick",
        "sticks",
        "whole",
        "small",
        "medium",
        "large",
    ])
});

// Matches "2", "1/2", "2 1/2", "1-2", "0.5" at the start of a line.
static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+(?:\.\d+)?)\s+)?(\d+/\d+|\d+(?:\.\d+)?(?:\s*-\s*\d+(?:\.\d+)?)?)")
        .unwrap_or_else(|e| unreachable!("invalid quantity regex: {e}"))
});

static A_PINCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^a\s+(pinch|dash)\s+of\s+(.+)")
        .unwrap_or_else(|e| unreachable!("invalid pinch regex: {e}"))
});

static A_PINCH_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^a\s+(pinch|dash)")
        .unwrap_or_else(|e| unreachable!("invalid pinch prefix regex: {e}"))
});

static LEADING_OF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^of\s+").unwrap_or_else(|e| unreachable!("invalid leading-of regex: {e}"))
});

pub fn parse_ingredient_text(ingredient_string: &str) -> ParsedIngredient {
    let ingredient_str = ingredient_string.trim();

    if ingredient_str.chars().count() < 2 {
        return ParsedIngredient {
            name: ingredient_str.to_string(),
            amount: None,
            unit: None,
            is_well_formed: false,
            raw_text: ingredient_str.to_string(),
        };
    }

    let (amount, unit, name) = parse_ingredient_parts(ingredient_str);
    let is_well_formed = name.is_some() && (amount.is_some() || unit.is_some());

    ParsedIngredient {
        name: name.unwrap_or_else(|| ingredient_str.to_string()),
        amount,
        unit,
        is_well_formed,
        raw_text: ingredient_str.to_string(),
    }
}

fn normalize_fractions(text: &str) -> String {
    let mut out = text.to_string();
    for (unicode_frac, ascii_frac) in UNICODE_FRACTIONS {
        out = out.replace(*unicode_frac, ascii_frac);
    }
    out
}

fn parse_ingredient_parts(
    ingredient_str: &str,
) -> (Option<String>, Option<String>, Option<String>) {
    let mut text = normalize_fractions(ingredient_str.trim());

    // "a pinch of salt" style lines have an implicit amount of 1.
    if A_PINCH_PREFIX_RE.is_match(&text) {
        if let Some(caps) = A_PINCH_RE.captures(&text) {
            return (
                Some("1".to_string()),
                Some(caps[1].to_lowercase()),
                Some(caps[2].trim().to_string()),
            );
        }
        let rest = text[2..].trim().to_string();
        return (Some("1".to_string()), Some("pinch".to_string()), Some(rest));
    }

    let mut amount = None;

    if let Some(caps) = QUANTITY_RE.captures(&text) {
        let whole_part: f64 = caps
            .get(1)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0.0);
        let frac_or_num = caps[2].to_string();
        let match_end = caps
            .get(0)
            .map(|m| m.end())
            .unwrap_or(0);

        if let Some((num, den)) = frac_or_num.split_once('/') {
            let num: f64 = num.parse().unwrap_or(0.0);
            let den: f64 = den.parse().unwrap_or(1.0);
            let total = whole_part + if den != 0.0 { num / den } else { 0.0 };
            amount = Some(format_amount(total));
        } else if frac_or_num.contains('-') {
            amount = Some(frac_or_num.trim().to_string());
        } else {
            let total = whole_part + frac_or_num.parse::<f64>().unwrap_or(0.0);
            amount = Some(format_amount(total));
        }

        text = text[match_end..].trim().to_string();
    }

    let mut unit = None;

    if !text.is_empty() {
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if let Some(first) = words.first() {
            let first_word = first.to_lowercase();
            let first_word = first_word.trim_end_matches(['.', ',', ';']);

            if words.len() > 1 {
                let two_words = format!(
                    "{} {}",
                    words[0].to_lowercase(),
                    words[1].to_lowercase()
                );
                let two_words = two_words.trim_end_matches(['.', ',', ';']);

                if UNITS.contains(two_words) {
                    unit = Some(two_words.to_string());
                    text = words[2..].join(" ");
                } else if UNITS.contains(first_word) {
                    unit = Some(first_word.to_string());
                    text = words[1..].join(" ");
                }
            } else if UNITS.contains(first_word) {
                unit = Some(first_word.to_string());
                text = words[1..].join(" ");
            }
        }
    }

    let text = LEADING_OF_RE.replace(&text, "").trim().to_string();
    let name = if text.is_empty() { None } else { Some(text) };

    (amount, unit, name)
}

/// "2.5" for fractional totals, "2" when the total is whole.
fn format_amount(total: f64) -> String {
    if total.fract() == 0.0 {
        format!("{}", total as i64)
    } else {
        format!("{total}")
    }
}
