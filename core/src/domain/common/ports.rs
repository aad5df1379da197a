use std::future::Future;

use crate::domain::common::{entities::app_errors::CoreError, value_objects::AccessToken};

/// LLM Client trait for calling AI models with structured JSON output.
///
/// The caller's OAuth token, when present, is forwarded as-is; `None` falls
/// back to whatever local-development credentials the adapter is configured
/// with.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        access_token: Option<AccessToken>,
        prompt: String,
        temperature: f32,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
