use clap::Parser;
use mealplan_core::domain::common::{LLMConfig, MealPlanAiConfig, PageFetcherConfig};

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    /// Address the HTTP server binds to.
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value = "8000")]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma-separated list of allowed CORS origins, or "*" for any.
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct LlmArgs {
    /// Gemini model used for all AI operations.
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-flash-latest")]
    pub gemini_model: String,

    /// API key used when a request carries no OAuth token. Local
    /// development only.
    #[arg(long, env = "GOOGLE_API_KEY")]
    pub google_api_key: Option<String>,

    /// Timeout for recipe page fetches, in seconds.
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value = "10")]
    pub fetch_timeout_secs: u64,
}

impl From<Args> for MealPlanAiConfig {
    fn from(args: Args) -> Self {
        MealPlanAiConfig {
            llm: LLMConfig {
                gemini_model: args.llm.gemini_model,
                fallback_api_key: args.llm.google_api_key,
            },
            fetcher: PageFetcherConfig {
                timeout_secs: args.llm.fetch_timeout_secs,
                ..PageFetcherConfig::default()
            },
        }
    }
}
