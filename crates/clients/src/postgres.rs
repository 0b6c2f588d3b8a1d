use std::env;

use sqlx::PgPool;

use teddies_common::define_module_client;

define_module_client! {
    (struct PostgresClient, "postgres")
    client_type: PgPool,
    env: ["DATABASE_URL"],
    setup: async {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
        PgPool::connect(&database_url).await
            .expect("Failed to connect to the card store database")
    }
}
