use chrono::{DateTime, Utc};
use companies_domain::{Company, ID};
use serde::{Deserialize, Serialize};

/// Public representation of a `Company`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDTO {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub created: DateTime<Utc>,
}

impl CompanyDTO {
    pub fn new(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            description: company.description,
            website: company.website,
            created: company.created,
        }
    }
}
