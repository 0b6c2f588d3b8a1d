use async_openai::error::OpenAIError;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};

use teddies_clients::LlmClient;
use teddies_common::ModuleClient;

use crate::error::GenerationError;

pub const STAGE_MODEL: &str = "gpt-4o";
pub const STAGE_MAX_TOKENS: u32 = 4096;

/// One creative-team member plus the task it is responsible for. Carried
/// as plain data; sequencing lives in [`crate::CreativeCrew`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageAgent {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
    pub task: &'static str,
    pub expected_output: &'static str,
}

pub const IMAGE_STAGE: StageAgent = StageAgent {
    role: "Image Generator",
    goal: "Generate stylized images for Terrible Teddies cards",
    backstory: "You are an AI artist specializing in creating stylized teddy bear illustrations",
    task: "Generate 40 unique, stylized teddy bear images for game cards based on the provided data",
    expected_output: "A list of 40 image URLs for the generated card images",
};

pub const CARD_DESIGN_STAGE: StageAgent = StageAgent {
    role: "Card Designer",
    goal: "Design balanced and interesting cards for the Terrible Teddies game",
    backstory: "You are a game designer with expertise in card game mechanics and balance",
    task: "Create 40 balanced cards with names, types, energy costs, and effects based on the provided teddy bear data",
    expected_output: "A JSON string containing an array of 40 card objects with properties: name, type, energy_cost, effect",
};

pub const RULES_STAGE: StageAgent = StageAgent {
    role: "Rule Writer",
    goal: "Create clear and engaging rules for the Terrible Teddies game",
    backstory: "You are an experienced technical writer specializing in game rule books",
    task: "Write comprehensive rules for the Terrible Teddies card game",
    expected_output: "A markdown formatted string containing the complete game rules",
};

pub const LORE_STAGE: StageAgent = StageAgent {
    role: "Lore Creator",
    goal: "Develop a rich, satirical backstory for the Terrible Teddies universe",
    backstory: "You are a creative writer skilled in crafting humorous and edgy lore for adult-themed games",
    task: "Develop a satirical and edgy backstory for the Terrible Teddies universe",
    expected_output: "A markdown formatted string containing the game's lore and backstory",
};

fn map_openai_err(err: OpenAIError) -> GenerationError {
    match err {
        OpenAIError::Reqwest(e) => GenerationError::Transport(e),
        other => GenerationError::Service(other.to_string()),
    }
}

impl StageAgent {
    fn system_prompt(&self) -> String {
        format!("You are the {}. {}. Your goal: {}.", self.role, self.backstory, self.goal)
    }

    fn user_prompt(&self) -> String {
        format!("{}\n\nExpected output: {}", self.task, self.expected_output)
    }

    /// Runs this stage to completion and returns the raw assistant text.
    pub async fn run(&self, llm: &LlmClient) -> Result<String, GenerationError> {
        tracing::info!("[StageAgent::run] Running stage: {}", self.role);

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.system_prompt())
                .build()
                .map_err(map_openai_err)?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(self.user_prompt())
                .build()
                .map_err(map_openai_err)?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(STAGE_MODEL)
            .messages(messages)
            .max_tokens(STAGE_MAX_TOKENS)
            .build()
            .map_err(map_openai_err)?;

        let response = llm
            .get_client()
            .chat()
            .create(request)
            .await
            .map_err(map_openai_err)?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(GenerationError::EmptyResult)?;
        choice
            .message
            .content
            .filter(|content| !content.is_empty())
            .ok_or(GenerationError::EmptyResult)
    }
}
