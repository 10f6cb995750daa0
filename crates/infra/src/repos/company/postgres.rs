use super::ICompanyRepo;
use chrono::{DateTime, Utc};
use companies_domain::{Company, ID};
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresCompanyRepo {
    pool: PgPool,
}

impl PostgresCompanyRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRaw {
    company_id: i64,
    name: String,
    description: Option<String>,
    website: Option<String>,
    created: DateTime<Utc>,
}

impl From<CompanyRaw> for Company {
    fn from(e: CompanyRaw) -> Self {
        Self {
            id: e.company_id.into(),
            name: e.name,
            description: e.description,
            website: e.website,
            created: e.created,
        }
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for PostgresCompanyRepo {
    async fn insert(&self, company: &Company) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO companies(company_id, name, description, website, created)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(company.id.inner())
        .bind(&company.name)
        .bind(&company.description)
        .bind(&company.website)
        .bind(company.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert company: {:?}. DB returned error: {:?}",
                company, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, company_id: &ID) -> anyhow::Result<Option<Company>> {
        let company: Option<CompanyRaw> = sqlx::query_as(
            r#"
            SELECT * FROM companies AS c
            WHERE c.company_id = $1
            "#,
        )
        .bind(company_id.inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find company with id: {:?} failed. DB returned error: {:?}",
                company_id, e
            );
            e
        })?;
        Ok(company.map(|c| c.into()))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Company>> {
        let companies: Vec<CompanyRaw> = sqlx::query_as(
            r#"
            SELECT * FROM companies AS c
            ORDER BY c.company_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all companies failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(companies.into_iter().map(|c| c.into()).collect())
    }
}
