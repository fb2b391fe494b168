use anyhow::Context;
use shoplist::{
    config::get_configuration, controllers::clear_items, store::SqliteItemRepository,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = get_configuration().context("Failed to read configuration")?;
    init_tracing(&settings).context("Failed to open log file")?;

    let pool = shoplist::connect(&settings.database_url)
        .await
        .context("Failed to open database")?;
    let repo = SqliteItemRepository::new(pool, settings.storage_key);

    if clear_items(&repo).await? {
        println!("Shopping list cleared.");
    } else {
        println!("Shopping list was already empty.");
    }

    Ok(())
}
