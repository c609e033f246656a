use rimagen::logger::{self, LoggerConfig};
use rimagen::{ApiConfig, GenerationParams, ModelScopeClient};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    logger::init_with_config(LoggerConfig::development())?;

    let api_key = match env::var("MODELSCOPE_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            log::error!("❌ Set MODELSCOPE_API_KEY before running this example");
            return Ok(());
        }
    };

    // Talk to a locally running relay (`cargo run`) rather than the
    // upstream API directly.
    let config = ApiConfig::new().with_base_url("http://127.0.0.1:3001/api");
    let client = ModelScopeClient::new(config, api_key)?;

    let params = GenerationParams {
        width: Some(1024),
        height: Some(1024),
        ..Default::default()
    };

    log::info!("🎨 Requesting image...");
    match client
        .image()
        .generate("an orange cat sitting on a windowsill in warm sunlight", params)
        .await
    {
        Ok(response) => match response.first_url() {
            Some(url) => log::info!("✅ Image ready: {}", url),
            None => log::warn!("⚠️  The provider returned no images"),
        },
        Err(e) => log::error!("❌ {}", e),
    }

    Ok(())
}
