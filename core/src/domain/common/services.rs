use crate::domain::{
    common::{MealPlanAiConfig, ports::LLMClient},
    recipe::ports::PageFetcher,
};

/// Aggregate service implementing every domain service trait.
///
/// Generic over its two outbound ports so tests can substitute mocks for
/// the Gemini client and the page fetcher.
#[derive(Clone)]
pub struct Service<L, P>
where
    L: LLMClient,
    P: PageFetcher,
{
    pub(crate) llm_client: L,
    pub(crate) page_fetcher: P,
    #[allow(dead_code)]
    pub(crate) config: MealPlanAiConfig,
}

impl<L, P> Service<L, P>
where
    L: LLMClient,
    P: PageFetcher,
{
    pub fn new(llm_client: L, page_fetcher: P, config: MealPlanAiConfig) -> Self {
        Self {
            llm_client,
            page_fetcher,
            config,
        }
    }
}
