mod get_companies;
mod get_company;

use crate::shared::guard::method_not_allowed;
use actix_web::web;
use get_companies::get_companies_controller;
use get_company::get_company_controller;

/// Companies are read only, every other method is answered with `405`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/companies")
            .route(web::get().to(get_companies_controller))
            .default_service(web::to(method_not_allowed)),
    );
    cfg.service(
        web::resource("/companies/{company_id}")
            .route(web::get().to(get_company_controller))
            .default_service(web::to(method_not_allowed)),
    );
}

#[cfg(test)]
mod tests {
    use crate::configure_server_api;
    use actix_web::{
        http::{header, Method, StatusCode},
        middleware, test, web, App,
    };
    use companies_domain::Company;
    use companies_infra::CompaniesContext;
    use serde_json::{json, Value};

    macro_rules! init_app {
        ($ctx:expr) => {
            test::init_service(
                App::new()
                    .wrap(middleware::NormalizePath::trim())
                    .app_data(web::Data::new($ctx))
                    .service(web::scope("/api/v1").configure(configure_server_api)),
            )
            .await
        };
    }

    async fn seeded_context(companies: Vec<Company>) -> CompaniesContext {
        let ctx = CompaniesContext::create_inmemory();
        for company in &companies {
            ctx.repos
                .companies
                .insert(company)
                .await
                .expect("To insert company");
        }
        ctx
    }

    #[actix_web::test]
    async fn it_retrieves_stored_company() {
        let ctx =
            seeded_context(vec![Company::new(1, "Acme").with_website("https://acme.example")])
                .await;
        let app = init_app!(ctx);

        let req = test::TestRequest::get()
            .uri("/api/v1/companies/1/")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Acme");
        assert_eq!(body["website"], "https://acme.example");
        assert!(body["description"].is_null());
    }

    #[actix_web::test]
    async fn it_returns_not_found_for_unknown_and_malformed_ids() {
        let ctx = seeded_context(vec![Company::new(1, "Acme")]).await;
        let app = init_app!(ctx);

        for uri in &[
            "/api/v1/companies/2/",
            "/api/v1/companies/2",
            "/api/v1/companies/acme/",
            "/api/v1/companies/-1/",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "uri: {}", uri);
        }
    }

    #[actix_web::test]
    async fn it_lists_every_stored_company() {
        let ctx = seeded_context(vec![
            Company::new(2, "Globex"),
            Company::new(1, "Acme"),
            Company::new(3, "Initech"),
        ])
        .await;
        let stored = ctx.repos.companies.find_all().await.unwrap();
        let app = init_app!(ctx);

        for uri in &["/api/v1/companies/", "/api/v1/companies"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: Value = test::read_body_json(resp).await;
            let companies = body.as_array().expect("Expected json array");
            assert_eq!(companies.len(), stored.len());
            let ids = companies.iter().map(|c| c["id"].clone()).collect::<Vec<_>>();
            assert_eq!(ids, vec![json!(1), json!(2), json!(3)]);
        }
    }

    #[actix_web::test]
    async fn it_lists_empty_storage_as_empty_array() {
        let app = init_app!(CompaniesContext::create_inmemory());

        let req = test::TestRequest::get()
            .uri("/api/v1/companies/")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn it_rejects_write_methods() {
        let ctx = seeded_context(vec![Company::new(1, "Acme")]).await;
        let app = init_app!(ctx.clone());

        let methods = vec![Method::POST, Method::PUT, Method::PATCH, Method::DELETE];
        for method in methods {
            for uri in &[
                "/api/v1/companies/",
                "/api/v1/companies/1/",
                "/api/v1/companies/2/",
            ] {
                let req = test::TestRequest::default()
                    .method(method.clone())
                    .uri(uri)
                    .set_json(json!({ "id": 1, "name": "Changed" }))
                    .to_request();
                let resp = test::call_service(&app, req).await;
                assert_eq!(
                    resp.status(),
                    StatusCode::METHOD_NOT_ALLOWED,
                    "method: {}, uri: {}",
                    method,
                    uri
                );
                assert_eq!(
                    resp.headers().get(header::ALLOW).unwrap().to_str().unwrap(),
                    "GET"
                );
            }
        }

        let companies = ctx.repos.companies.find_all().await.unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name, "Acme");
    }

    #[actix_web::test]
    async fn it_reports_healthy_status() {
        let app = init_app!(CompaniesContext::create_inmemory());

        let req = test::TestRequest::get().uri("/api/v1/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
