use crate::domain::common::{MealPlanAiConfig, services::Service};
use crate::infrastructure::{http::ReqwestPageFetcher, llm::GeminiLLMClient};

/// The fully wired service with its production adapters.
pub type MealPlanAiService = Service<GeminiLLMClient, ReqwestPageFetcher>;

pub fn create_service(config: MealPlanAiConfig) -> Result<MealPlanAiService, anyhow::Error> {
    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_model.clone(),
        config.llm.fallback_api_key.clone(),
    );
    let page_fetcher = ReqwestPageFetcher::new(&config.fetcher)?;

    Ok(Service::new(llm_client, page_fetcher, config))
}
