#[cfg(feature = "mysql")]
use std::time::Duration;

#[cfg(feature = "mysql")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Connection settings for the MySQL database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            username: "root".to_string(),
            password: "password".to_string(),
            name: "test_db".to_string(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

impl DatabaseConfig {
    /// Connection URL for the configured server.
    ///
    /// Credentials are percent-encoded so reserved characters survive.
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.name
        )
    }
}

/// The shared connection pool.
#[cfg(feature = "mysql")]
pub struct DatabasePool {
    pub conn: DbConn,
}

#[cfg(feature = "mysql")]
impl DatabasePool {
    /// Open the pool and make sure the server answers.
    ///
    /// The schema is left untouched; it is owned by the migration tool.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            "Initializing database connection..."
        );

        let opts = ConnectOptions::new(config.url())
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        conn.ping().await?;

        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self { conn })
    }
}
