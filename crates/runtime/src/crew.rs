use std::io::Cursor;

use teddies_clients::LlmClient;

use crate::agents::{StageAgent, CARD_DESIGN_STAGE, IMAGE_STAGE, LORE_STAGE, RULES_STAGE};
use crate::card::CardDesign;
use crate::error::{GenerationError, PipelineError};
use crate::store::FsStore;

/// Raw text produced by the four creative stages, in stage order. All four
/// are collected before any processing starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutputs {
    pub card_images: String,
    pub card_designs: String,
    pub game_rules: String,
    pub game_lore: String,
}

/// The four-member creative team, run strictly in sequence.
pub struct CreativeCrew {
    llm: LlmClient,
}

impl CreativeCrew {
    pub const STAGES: [StageAgent; 4] = [IMAGE_STAGE, CARD_DESIGN_STAGE, RULES_STAGE, LORE_STAGE];

    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    pub async fn kickoff(&self) -> Result<StageOutputs, GenerationError> {
        let card_images = IMAGE_STAGE.run(&self.llm).await?;
        let card_designs = CARD_DESIGN_STAGE.run(&self.llm).await?;
        let game_rules = RULES_STAGE.run(&self.llm).await?;
        let game_lore = LORE_STAGE.run(&self.llm).await?;

        Ok(StageOutputs {
            card_images,
            card_designs,
            game_rules,
            game_lore,
        })
    }
}

/// What the processor managed to persist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub images_saved: usize,
    pub images_failed: usize,
    pub cards: usize,
}

/// Parses and dispatches the four stage outputs. The two structured
/// outputs are all-or-nothing: a malformed image list or card list aborts
/// the run before anything is written. Individual image downloads keep the
/// batch path's per-item isolation.
pub struct ResultProcessor {
    store: FsStore,
    http: reqwest::Client,
}

impl ResultProcessor {
    pub fn new(store: FsStore) -> Self {
        Self {
            store,
            http: reqwest::Client::new(),
        }
    }

    async fn save_image(&self, index: usize, url: &str) -> Result<(), PipelineError> {
        let response = self.http.get(url).send().await.map_err(GenerationError::from)?;
        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Service(format!("{}: image download rejected", status)).into());
        }
        let bytes = response.bytes().await.map_err(GenerationError::from)?;

        let decoded = image::load_from_memory(&bytes)?;
        let mut encoded = Vec::new();
        decoded.write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)?;

        self.store.save_card_image(index, &encoded)?;
        Ok(())
    }

    pub async fn process(&self, outputs: &StageOutputs) -> Result<ProcessSummary, PipelineError> {
        let image_urls: Vec<String> = serde_json::from_str(&outputs.card_images)?;
        let card_designs: Vec<CardDesign> = serde_json::from_str(&outputs.card_designs)?;

        let mut summary = ProcessSummary {
            cards: card_designs.len(),
            ..Default::default()
        };

        tracing::info!("[ResultProcessor::process] Saving {} card images", image_urls.len());
        for (i, url) in image_urls.iter().enumerate() {
            match self.save_image(i + 1, url).await {
                Ok(()) => {
                    summary.images_saved += 1;
                    tracing::info!("[ResultProcessor::process] Image saved: card_{}.png", i + 1);
                }
                Err(e) => {
                    summary.images_failed += 1;
                    tracing::warn!("[ResultProcessor::process] Skipping image {}: {}", i + 1, e);
                }
            }
        }

        let path = self.store.save_catalog(&card_designs)?;
        tracing::info!("[ResultProcessor::process] Card designs saved to {}", path.display());
        let path = self.store.save_rules(&outputs.game_rules)?;
        tracing::info!("[ResultProcessor::process] Game rules saved to {}", path.display());
        let path = self.store.save_lore(&outputs.game_lore)?;
        tracing::info!("[ResultProcessor::process] Game lore saved to {}", path.display());

        Ok(summary)
    }
}
