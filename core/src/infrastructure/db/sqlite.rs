use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub struct SqliteConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Sqlite {
    db: DatabaseConnection,
}

impl Sqlite {
    /// Opens the pool and applies pending migrations.
    pub async fn new(config: SqliteConfig) -> Result<Self, anyhow::Error> {
        let in_memory = config.database_url.contains(":memory:");
        let mut options = ConnectOptions::new(config.database_url);
        options.sqlx_logging(false);

        // Every connection to `:memory:` is a separate database, so keep exactly one alive.
        if in_memory {
            options.max_connections(1).min_connections(1);
        }

        let db = Database::connect(options).await?;

        sqlx::migrate!("./migrations")
            .run(db.get_sqlite_connection_pool())
            .await?;

        info!("Database ready");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
