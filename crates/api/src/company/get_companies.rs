use crate::error::CompaniesError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use companies_api_structs::get_companies::*;
use companies_domain::Company;
use companies_infra::CompaniesContext;

pub async fn get_companies_controller(
    ctx: web::Data<CompaniesContext>,
) -> Result<HttpResponse, CompaniesError> {
    let usecase = GetCompaniesUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|companies| HttpResponse::Ok().json(APIResponse::new(companies)))
        .map_err(CompaniesError::from)
}

#[derive(Debug)]
struct GetCompaniesUseCase {}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for CompaniesError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCompaniesUseCase {
    type Response = Vec<Company>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCompanies";

    async fn execute(&mut self, ctx: &CompaniesContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .companies
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn it_lists_nothing_when_storage_is_empty() {
        let ctx = CompaniesContext::create_inmemory();
        let mut usecase = GetCompaniesUseCase {};
        assert_eq!(usecase.execute(&ctx).await, Ok(Vec::new()));
    }

    #[actix_web::main]
    #[test]
    async fn it_lists_every_stored_company() {
        let ctx = CompaniesContext::create_inmemory();
        let globex = Company::new(2, "Globex");
        let acme = Company::new(1, "Acme");
        ctx.repos.companies.insert(&globex).await.unwrap();
        ctx.repos.companies.insert(&acme).await.unwrap();

        let mut usecase = GetCompaniesUseCase {};
        assert_eq!(usecase.execute(&ctx).await, Ok(vec![acme, globex]));
    }
}
