mod inmemory;
mod postgres;

use companies_domain::{Company, ID};
pub use inmemory::InMemoryCompanyRepo;
pub use postgres::PostgresCompanyRepo;

#[async_trait::async_trait]
pub trait ICompanyRepo: Send + Sync {
    /// Only used to seed storage, companies are never written through the api
    async fn insert(&self, company: &Company) -> anyhow::Result<()>;
    async fn find(&self, company_id: &ID) -> anyhow::Result<Option<Company>>;
    /// All companies ordered by id
    async fn find_all(&self) -> anyhow::Result<Vec<Company>>;
}
