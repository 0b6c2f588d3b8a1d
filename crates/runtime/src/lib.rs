mod agents;
mod batch;
mod card;
mod crew;
mod error;
mod generation;
mod planner;
mod prompt;
mod store;

pub use agents::{StageAgent, CARD_DESIGN_STAGE, IMAGE_STAGE, LORE_STAGE, RULES_STAGE, STAGE_MODEL};
pub use batch::{BatchRunner, ItemFailure, RunReport};
pub use card::{CardDesign, CardRecord, CardSpec, CardType};
pub use crew::{CreativeCrew, ProcessSummary, ResultProcessor, StageOutputs};
pub use error::{GenerationError, PipelineError, StoreError};
pub use generation::{GenerationArtifact, ImageGenerator, OpenAiImageGenerator, IMAGE_MODEL};
pub use planner::{plan, CARDS_PER_TYPE, CARD_TYPES, MAX_ENERGY_COST, MIN_ENERGY_COST};
pub use prompt::{build_image_prompt, ImagePrompt, ResponseFormat, ART_STYLE, IMAGE_SIZE, MOODS};
pub use store::{CardSink, FsStore, TableStore, CARD_IMAGE_DIR, CARD_TABLE, DATA_DIR};
