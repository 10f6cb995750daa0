#[path = "../telemetry.rs"]
mod telemetry;

use companies_infra::run_migration;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("companies_migrate".into(), "info".into());
    init_subscriber(subscriber)?;

    info!("Running database migrations ...");
    run_migration().await?;
    info!("Running database migrations ... [done]");
    Ok(())
}
