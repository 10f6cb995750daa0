use companies_api::Application;
use companies_domain::Company;
use companies_infra::{CompaniesContext, Config};
use companies_sdk::CompaniesSDK;

pub struct TestApp {
    pub config: Config,
    pub ctx: CompaniesContext,
}

impl TestApp {
    pub async fn seed(&self, companies: &[Company]) {
        for company in companies {
            self.ctx
                .repos
                .companies
                .insert(company)
                .await
                .expect("Expected to seed company");
        }
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, CompaniesSDK, String) {
    let mut ctx = CompaniesContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.http_workers = 1;

    let config = ctx.config.clone();
    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config, ctx };
    let sdk = CompaniesSDK::new(address.clone());
    (app, sdk, address)
}
