use std::env;

use async_openai::{config::OpenAIConfig, Client};

use teddies_common::define_module_client;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

define_module_client! {
    (struct LlmClient, "llm")
    client_type: Client<OpenAIConfig>,
    env: ["OPENAI_API_KEY"],
    setup: async {
        let api_key = env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY is not set");
        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        let openai_config = OpenAIConfig::new()
            .with_api_base(base_url)
            .with_api_key(api_key);

        Client::build(
            reqwest::Client::new(),
            openai_config,
            Default::default()
        )
    }
}
