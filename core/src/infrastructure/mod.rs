pub mod http;
pub mod llm;
