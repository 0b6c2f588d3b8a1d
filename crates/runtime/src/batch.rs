use thiserror::Error;

use crate::card::{CardRecord, CardSpec};
use crate::error::{GenerationError, StoreError};
use crate::generation::ImageGenerator;
use crate::prompt::build_image_prompt;
use crate::store::CardSink;

/// Outcome of one full batch. Log-only; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub planned: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<ItemFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    /// 1-based position in planner order.
    pub index: usize,
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Error)]
enum ItemError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Drives the catalog end to end: prompt, generate, persist, one card at a
/// time. A failing card is recorded and skipped; the batch always attempts
/// every planned item.
pub struct BatchRunner<'a, G, S> {
    generator: &'a G,
    sink: &'a S,
}

impl<'a, G: ImageGenerator, S: CardSink> BatchRunner<'a, G, S> {
    pub fn new(generator: &'a G, sink: &'a S) -> Self {
        Self { generator, sink }
    }

    async fn run_item(&self, spec: &CardSpec) -> Result<(), ItemError> {
        let prompt = build_image_prompt(spec);
        let artifact = self.generator.generate(&prompt).await?;
        let record = CardRecord {
            name: spec.name.clone(),
            card_type: spec.card_type,
            energy_cost: spec.energy_cost,
            url: artifact.stored_ref(),
            prompt: prompt.text,
        };
        self.sink.store_card(&record).await?;
        Ok(())
    }

    pub async fn run(&self, specs: &[CardSpec]) -> RunReport {
        let mut report = RunReport {
            planned: specs.len(),
            ..Default::default()
        };

        if let Err(e) = self.sink.prepare().await {
            tracing::warn!(
                "[BatchRunner::run] Schema check failed, continuing anyway: {}",
                e
            );
        }

        for (i, spec) in specs.iter().enumerate() {
            match self.run_item(spec).await {
                Ok(()) => {
                    report.succeeded += 1;
                    tracing::info!("[BatchRunner::run] Generated and stored card: {}", spec.name);
                }
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!(
                        "[BatchRunner::run] Failed to generate or store {}: {}",
                        spec.name,
                        e
                    );
                    report.failures.push(ItemFailure {
                        index: i + 1,
                        name: spec.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "[BatchRunner::run] Batch complete: {} planned, {} stored, {} failed",
            report.planned,
            report.succeeded,
            report.failed
        );
        report
    }
}
