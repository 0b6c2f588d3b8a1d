use anyhow::Result;
use colored::Colorize;

use teddies_clients::LlmClient;
use teddies_common::ModuleClient;
use teddies_runtime::{CreativeCrew, FsStore, ResultProcessor};

fn setup_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup_tracing();

    if !LlmClient::validate_env() {
        anyhow::bail!("OPENAI_API_KEY must be set before running the creative crew");
    }

    println!("{}", "Starting asset generation process...".yellow());

    let llm = LlmClient::setup_connection().await;
    let crew = CreativeCrew::new(llm);
    let outputs = crew.kickoff().await?;
    println!("{}", "Asset generation process completed.".green());

    let processor = ResultProcessor::new(FsStore::new("."));
    let summary = processor.process(&outputs).await?;

    println!(
        "{}",
        format!(
            "All assets have been processed and saved: {} images, {} cards.",
            summary.images_saved, summary.cards
        )
        .green()
    );

    Ok(())
}
