use anyhow::Result;

use recipe_search::{App, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings.validate().map_err(anyhow::Error::msg)?;

    // Logging is initialized in App::run() with buffer support
    App::new(settings).run().await?;

    Ok(())
}
