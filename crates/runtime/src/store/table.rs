use async_trait::async_trait;
use sqlx::Row;

use teddies_clients::PostgresClient;
use teddies_common::ModuleClient;

use crate::card::CardRecord;
use crate::error::StoreError;

pub const CARD_TABLE: &str = "generated_images";

/// Columns the insert path depends on, with the types the evolution check
/// adds when one is missing.
const REQUIRED_COLUMNS: [(&str, &str); 5] = [
    ("name", "TEXT"),
    ("type", "TEXT"),
    ("energy_cost", "INT4"),
    ("url", "TEXT"),
    ("prompt", "TEXT"),
];

/// Row-store sink: one `prepare` per run, then one write per card. Writes
/// are independent units of work; nothing is transactional across cards.
#[async_trait]
pub trait CardSink: Send + Sync {
    /// Schema check, called exactly once before the first write of a run.
    /// A failure here must not gate the run.
    async fn prepare(&self) -> Result<(), StoreError>;

    async fn store_card(&self, record: &CardRecord) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct TableStore {
    db: PostgresClient,
}

impl TableStore {
    pub fn new(db: PostgresClient) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CardSink for TableStore {
    async fn prepare(&self) -> Result<(), StoreError> {
        let pool = self.db.get_client();
        let rows = sqlx::query(
            "SELECT column_name FROM information_schema.columns WHERE table_name = $1",
        )
        .bind(CARD_TABLE)
        .fetch_all(pool)
        .await?;

        let existing: Vec<String> = rows
            .iter()
            .map(|row| row.get::<String, _>("column_name"))
            .collect();

        for (column, column_type) in REQUIRED_COLUMNS {
            if existing.iter().any(|c| c == column) {
                continue;
            }
            sqlx::query(&format!(
                "ALTER TABLE {} ADD COLUMN IF NOT EXISTS \"{}\" {}",
                CARD_TABLE, column, column_type
            ))
            .execute(pool)
            .await?;
            tracing::info!(
                "[TableStore::prepare] Added {} column to {} table",
                column,
                CARD_TABLE
            );
        }
        Ok(())
    }

    async fn store_card(&self, record: &CardRecord) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO generated_images (name, type, energy_cost, url, prompt) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (name) DO UPDATE SET \
             type = EXCLUDED.type, energy_cost = EXCLUDED.energy_cost, \
             url = EXCLUDED.url, prompt = EXCLUDED.prompt",
        )
        .bind(&record.name)
        .bind(record.card_type.as_str())
        .bind(record.energy_cost)
        .bind(&record.url)
        .bind(&record.prompt)
        .execute(self.db.get_client())
        .await?;
        Ok(())
    }
}
