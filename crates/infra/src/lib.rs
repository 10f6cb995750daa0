mod config;
mod repos;

pub use config::Config;
pub use repos::{ICompanyRepo, Repos};
use sqlx::postgres::PgPoolOptions;
use tracing::warn;

const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

#[derive(Clone)]
pub struct CompaniesContext {
    pub repos: Repos,
    pub config: Config,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl CompaniesContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = Repos::create_postgres(&params.postgres_connection_string).await?;
        Ok(Self {
            repos,
            config: Config::new(),
        })
    }

    /// Context backed by inmemory repositories, useful for testing
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<CompaniesContext> {
    match get_psql_connection_string() {
        Some(postgres_connection_string) => {
            CompaniesContext::create(ContextParams {
                postgres_connection_string,
            })
            .await
        }
        None => {
            warn!(
                "Did not find {} environment variable. Companies will be stored in memory.",
                PSQL_CONNECTION_STRING
            );
            Ok(CompaniesContext::create_inmemory())
        }
    }
}

fn get_psql_connection_string() -> Option<String> {
    std::env::var(PSQL_CONNECTION_STRING).ok()
}

pub async fn run_migration() -> anyhow::Result<()> {
    let connection_string = get_psql_connection_string().ok_or_else(|| {
        anyhow::anyhow!("{} env var to be present.", PSQL_CONNECTION_STRING)
    })?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&connection_string)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    Ok(())
}
