use anyhow::Result;
use colored::Colorize;

use teddies_clients::{LlmClient, PostgresClient};
use teddies_common::ModuleClient;
use teddies_runtime::{plan, BatchRunner, OpenAiImageGenerator, TableStore};

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
        anyhow::bail!("OPENAI_API_KEY must be set before generating assets");
    }
    if !PostgresClient::validate_env() {
        anyhow::bail!("DATABASE_URL must be set before generating assets");
    }

    println!("{}", "Starting asset generation for Terrible Teddies...".yellow());

    let llm = LlmClient::setup_connection().await;
    let db = PostgresClient::setup_connection().await;

    let generator = OpenAiImageGenerator::new(llm);
    let store = TableStore::new(db);

    let specs = plan();
    let report = BatchRunner::new(&generator, &store).run(&specs).await;

    if report.failed == 0 {
        println!(
            "{}",
            format!("Asset generation complete! {} cards stored.", report.succeeded).green()
        );
    } else {
        println!(
            "{}",
            format!(
                "Asset generation finished with failures: {} stored, {} failed.",
                report.succeeded, report.failed
            )
            .red()
        );
        for failure in &report.failures {
            println!(
                "{}",
                format!("  #{} {}: {}", failure.index, failure.name, failure.reason).red()
            );
        }
    }

    Ok(())
}
