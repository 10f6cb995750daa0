use crate::error::CompaniesError;
use actix_web::{HttpRequest, HttpResponse};
use companies_domain::ID;

pub struct Guard {}

impl Guard {
    /// An id that can never match a stored entity is reported as not found
    pub fn against_malformed_id(val: String) -> Result<ID, CompaniesError> {
        val.parse()
            .map_err(|e| CompaniesError::NotFound(format!("{}", e)))
    }
}

/// Fallback for every method a read only resource does not route
pub async fn method_not_allowed(http_req: HttpRequest) -> Result<HttpResponse, CompaniesError> {
    Err(CompaniesError::MethodNotAllowed(http_req.method().to_string()))
}
