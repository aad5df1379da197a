use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ParseRecipeRequest {
    /// URL of the recipe webpage to parse.
    #[validate(url(message = "url must be a valid URL"))]
    pub url: String,
}
