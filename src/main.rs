use crate::api::AppState;
use crate::app_config::AppConfig;
use tracing::info;

mod api;
mod app_config;
mod domain;
mod extensions;
mod geo_point_deserializer;
mod usgs;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        latitude = config.reference_point().latitude,
        longitude = config.reference_point().longitude,
        radius_km = config.alert().radius_km(),
        "✅  Loaded configuration"
    );

    let client = usgs::new_client(&config)?;
    info!("✅  Initialized feed client for {}", config.feed().url());

    api::run_server(AppState::new(client, config)).await?;

    Ok(())
}
