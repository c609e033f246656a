use rimagen::config::RelayConfig;
use rimagen::logger::{self, LoggerConfig};
use rimagen::relay::{RelayServer, SERVICE_NAME};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(LoggerConfig::development())?;

    if env_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = RelayConfig::from_env();
    logger::log_config_info(&config);
    logger::log_startup_info(SERVICE_NAME, env!("CARGO_PKG_VERSION"), config.port);

    RelayServer::new(config).run().await?;

    Ok(())
}
