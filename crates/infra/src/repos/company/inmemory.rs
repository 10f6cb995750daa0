use super::ICompanyRepo;
use crate::repos::shared::inmemory_repo::*;
use companies_domain::{Company, ID};

pub struct InMemoryCompanyRepo {
    companies: std::sync::Mutex<Vec<Company>>,
}

impl InMemoryCompanyRepo {
    pub fn new() -> Self {
        Self {
            companies: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for InMemoryCompanyRepo {
    async fn insert(&self, company: &Company) -> anyhow::Result<()> {
        insert(company, &self.companies);
        Ok(())
    }

    async fn find(&self, company_id: &ID) -> anyhow::Result<Option<Company>> {
        Ok(find(company_id, &self.companies))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Company>> {
        Ok(find_all(&self.companies))
    }
}
