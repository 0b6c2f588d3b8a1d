use std::sync::Mutex;

use async_trait::async_trait;

use teddies_runtime::{
    plan, BatchRunner, CardRecord, CardSink, GenerationArtifact, GenerationError, ImageGenerator,
    ImagePrompt, StoreError,
};

/// Generator that succeeds with a fake URL, except on the scripted
/// (1-based) call indices.
#[derive(Default)]
struct ScriptedGenerator {
    calls: Mutex<usize>,
    fail_on: Vec<usize>,
}

#[async_trait]
impl ImageGenerator for ScriptedGenerator {
    async fn generate(&self, _prompt: &ImagePrompt) -> Result<GenerationArtifact, GenerationError> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if self.fail_on.contains(&*calls) {
            return Err(GenerationError::Service(format!(
                "scripted failure on call {}",
                *calls
            )));
        }
        Ok(GenerationArtifact::Url(format!(
            "https://img.example/{}.png",
            *calls
        )))
    }
}

#[derive(Default)]
struct RecordingSink {
    prepares: Mutex<usize>,
    fail_prepare: bool,
    stored: Mutex<Vec<CardRecord>>,
}

#[async_trait]
impl CardSink for RecordingSink {
    async fn prepare(&self) -> Result<(), StoreError> {
        *self.prepares.lock().unwrap() += 1;
        assert!(
            self.stored.lock().unwrap().is_empty(),
            "prepare must run before the first write"
        );
        if self.fail_prepare {
            return Err(StoreError::Io(std::io::Error::other(
                "scripted prepare failure",
            )));
        }
        Ok(())
    }

    async fn store_card(&self, record: &CardRecord) -> Result<(), StoreError> {
        self.stored.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[tokio::test]
async fn full_batch_stores_every_card() {
    let specs = plan();
    let generator = ScriptedGenerator::default();
    let sink = RecordingSink::default();

    let report = BatchRunner::new(&generator, &sink).run(&specs).await;

    assert_eq!(report.planned, 40);
    assert_eq!(report.succeeded, 40);
    assert_eq!(report.failed, 0);
    assert!(report.failures.is_empty());
    assert_eq!(*sink.prepares.lock().unwrap(), 1);

    let stored = sink.stored.lock().unwrap();
    assert_eq!(stored.len(), 40);
    // Records carry the spec and the originating prompt.
    assert_eq!(stored[0].name, specs[0].name);
    assert!(stored[0].prompt.contains(&specs[0].name));
    assert!(stored[0].url.starts_with("https://img.example/"));
}

#[tokio::test]
async fn failing_items_are_isolated() {
    let specs = plan();
    let generator = ScriptedGenerator {
        fail_on: vec![3, 17],
        ..Default::default()
    };
    let sink = RecordingSink::default();

    let report = BatchRunner::new(&generator, &sink).run(&specs).await;

    assert_eq!(report.planned, 40);
    assert_eq!(report.succeeded, 38);
    assert_eq!(report.failed, 2);

    let failed_indices: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
    assert_eq!(failed_indices, vec![3, 17]);
    assert_eq!(report.failures[0].name, specs[2].name);
    assert_eq!(report.failures[1].name, specs[16].name);

    let stored = sink.stored.lock().unwrap();
    assert_eq!(stored.len(), 38);
    let stored_names: Vec<&str> = stored.iter().map(|r| r.name.as_str()).collect();
    assert!(!stored_names.contains(&specs[2].name.as_str()));
    assert!(!stored_names.contains(&specs[16].name.as_str()));
    assert!(stored_names.contains(&specs[0].name.as_str()));
    assert!(stored_names.contains(&specs[39].name.as_str()));
}

#[tokio::test]
async fn failed_schema_check_does_not_gate_inserts() {
    let specs = plan();
    let generator = ScriptedGenerator::default();
    let sink = RecordingSink {
        fail_prepare: true,
        ..Default::default()
    };

    let report = BatchRunner::new(&generator, &sink).run(&specs).await;

    assert_eq!(*sink.prepares.lock().unwrap(), 1);
    assert_eq!(report.succeeded, 40);
    assert_eq!(sink.stored.lock().unwrap().len(), 40);
}
