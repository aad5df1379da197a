use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::ParsedRecipe};

/// Outbound port for fetching web pages.
#[cfg_attr(test, mockall::automock)]
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe scraping.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn parse_recipe(&self, url: String) -> impl Future<Output = Result<ParsedRecipe, CoreError>> + Send;
}
