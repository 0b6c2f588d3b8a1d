use anyhow::Result;

use teddies_clients::PostgresClient;
use teddies_common::ModuleClient;
use teddies_runtime::CARD_TABLE;

const CREATE_CARD_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS generated_images (
    id UUID DEFAULT gen_random_uuid() PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    type TEXT NOT NULL,
    energy_cost INT4 NOT NULL,
    url TEXT NOT NULL,
    prompt TEXT NOT NULL,
    created_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
);
"#;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let db = PostgresClient::setup_connection().await;
    sqlx::query(CREATE_CARD_TABLE_SQL).execute(db.get_client()).await?;

    println!("Card store initialized: {} table is ready", CARD_TABLE);
    Ok(())
}
