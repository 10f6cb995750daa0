use crate::{APIResponse, BaseClient, ID};
use companies_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CompanyClient {
    base: Arc<BaseClient>,
}

impl CompanyClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self, company_id: ID) -> APIResponse<get_company::APIResponse> {
        self.base
            .get(format!("companies/{}/", company_id), StatusCode::OK)
            .await
    }

    pub async fn list(&self) -> APIResponse<Vec<dtos::CompanyDTO>> {
        self.base
            .get::<get_companies::APIResponse>("companies/".into(), StatusCode::OK)
            .await
            .map(|res| res.0)
    }
}
