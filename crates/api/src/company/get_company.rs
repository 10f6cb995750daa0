use crate::error::CompaniesError;
use crate::shared::{
    guard::Guard,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use companies_api_structs::get_company::*;
use companies_domain::{Company, ID};
use companies_infra::CompaniesContext;

pub async fn get_company_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<CompaniesContext>,
) -> Result<HttpResponse, CompaniesError> {
    let company_id = Guard::against_malformed_id(path.into_inner().company_id)?;

    let usecase = GetCompanyUseCase { company_id };

    execute(usecase, &ctx)
        .await
        .map(|company| HttpResponse::Ok().json(APIResponse::new(company)))
        .map_err(CompaniesError::from)
}

#[derive(Debug)]
struct GetCompanyUseCase {
    pub company_id: ID,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for CompaniesError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(company_id) => Self::NotFound(format!(
                "The company with id: {}, was not found.",
                company_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCompanyUseCase {
    type Response = Company;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCompany";

    async fn execute(&mut self, ctx: &CompaniesContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.companies.find(&self.company_id).await {
            Ok(Some(company)) => Ok(company),
            Ok(None) => Err(UseCaseError::NotFound(self.company_id)),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn it_finds_stored_company() {
        let ctx = CompaniesContext::create_inmemory();
        let company = Company::new(1, "Acme");
        ctx.repos.companies.insert(&company).await.unwrap();

        let mut usecase = GetCompanyUseCase {
            company_id: company.id,
        };
        let res = usecase.execute(&ctx).await;
        assert_eq!(res, Ok(company));
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_unknown_company() {
        let ctx = CompaniesContext::create_inmemory();
        ctx.repos
            .companies
            .insert(&Company::new(1, "Acme"))
            .await
            .unwrap();

        let mut usecase = GetCompanyUseCase {
            company_id: ID::new(2),
        };
        let res = usecase.execute(&ctx).await;
        assert_eq!(res, Err(UseCaseError::NotFound(ID::new(2))));
        assert_eq!(
            CompaniesError::from(UseCaseError::NotFound(ID::new(2))),
            CompaniesError::NotFound("The company with id: 2, was not found.".into())
        );
    }
}
