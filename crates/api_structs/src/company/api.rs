use crate::dtos::CompanyDTO;
use companies_domain::Company;
use serde::{Deserialize, Serialize};

pub mod get_company {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub company_id: String,
    }

    pub type APIResponse = CompanyDTO;
}

pub mod get_companies {
    use super::*;

    /// Serialized as a bare json array
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(transparent)]
    pub struct APIResponse(pub Vec<CompanyDTO>);

    impl APIResponse {
        pub fn new(companies: Vec<Company>) -> Self {
            Self(companies.into_iter().map(CompanyDTO::new).collect())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn it_serializes_as_array() {
            let res = APIResponse::new(vec![Company::new(1, "Acme"), Company::new(2, "Globex")]);
            let json = serde_json::to_value(&res).unwrap();
            let companies = json.as_array().expect("Expected json array");
            assert_eq!(companies.len(), 2);
            assert_eq!(companies[0]["name"], "Acme");
            assert_eq!(companies[1]["id"], 2);

            let empty = serde_json::to_string(&APIResponse::new(Vec::new())).unwrap();
            assert_eq!(empty, "[]");
        }
    }
}
