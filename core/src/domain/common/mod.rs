pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

/// Top-level configuration for the core service.
#[derive(Clone, Debug, Default)]
pub struct MealPlanAiConfig {
    pub llm: LLMConfig,
    pub fetcher: PageFetcherConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// Gemini model name, e.g. "gemini-flash-latest".
    pub gemini_model: String,
    /// Optional API key used when a request carries no OAuth token.
    /// Intended for local development only.
    pub fallback_api_key: Option<String>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_model: "gemini-flash-latest".to_string(),
            fallback_api_key: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PageFetcherConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for PageFetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            timeout_secs: 10,
        }
    }
}
