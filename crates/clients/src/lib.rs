mod llm;
mod postgres;

pub use llm::{LlmClient, DEFAULT_OPENAI_BASE_URL};
pub use postgres::PostgresClient;
