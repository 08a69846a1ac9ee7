use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

use super::entity::blog_post;

/// Location of the blog database. The file is created on first start.
pub const DATABASE_URL: &str = "sqlite://data.db?mode=rwc";

/// Configuration for the blog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Idle connections are closed after this long; `None` keeps them open.
    pub idle_timeout: Option<Duration>,
}

impl DatabaseConfig {
    /// Configuration for the on-disk database at [`DATABASE_URL`].
    pub fn new(max_connections: u32, min_connections: u32) -> Self {
        Self {
            url: DATABASE_URL.to_string(),
            max_connections,
            min_connections,
            idle_timeout: Some(Duration::from_secs(300)),
        }
    }

    /// A private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` opens a separate database, so the
    /// pool is pinned to one connection that is never reaped.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            idle_timeout: None,
        }
    }
}

/// Handle to the blog database.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Clone)]
pub struct DatabaseConnections {
    pub main: DbConn,
}

impl DatabaseConnections {
    /// Open the connection pool and create the schema if it does not exist yet.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let mut opts = ConnectOptions::new(&config.url);
        opts.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(true);
        if let Some(idle) = config.idle_timeout {
            opts.idle_timeout(idle);
        }

        let main = Database::connect(opts).await?;
        tracing::info!(
            "Database connected (pool: {})",
            config.max_connections
        );

        create_schema(&main).await?;

        Ok(Self { main })
    }

    /// Round-trip to the database to check that it is reachable.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.main.ping().await
    }
}

async fn create_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(blog_post::Entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    tracing::info!("Schema ready (table: blog_posts)");
    Ok(())
}
