mod base;
mod company;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use company::CompanyClient;
pub use companies_api_structs::dtos::*;
pub use companies_domain::ID;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use companies_api_structs::dtos::CompanyDTO as Company;

/// Companies Server SDK
///
/// The SDK contains methods for interacting with the Companies server
/// API.
#[derive(Clone)]
pub struct CompaniesSDK {
    pub company: CompanyClient,
    pub status: StatusClient,
}

impl CompaniesSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));
        let company = CompanyClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { company, status }
    }
}
