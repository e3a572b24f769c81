use crate::app_config::AppConfig;
use crate::domain::{EarthquakeRecord, FeedStatus};
use crate::usgs::domain::GeoJson;
use crate::usgs::map_features::map_features;
use crate::usgs::query::FeedQuery;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

#[derive(Debug)]
pub struct FeedReport {
    pub earthquakes: Vec<EarthquakeRecord>,
    pub status: FeedStatus,
}

/// Fetches the earthquakes near the reference point as of now.
/// Any feed failure is logged and reported as an empty list with [`FeedStatus::Unavailable`].
pub async fn nearby_earthquakes(client: &Client, config: &AppConfig) -> FeedReport {
    match fetch_nearby(client, config, Utc::now()).await {
        Ok(earthquakes) => FeedReport {
            earthquakes,
            status: FeedStatus::Ok,
        },
        Err(e) => {
            error!("❌ Error fetching earthquake data: {}", e);
            FeedReport {
                earthquakes: Vec::new(),
                status: FeedStatus::Unavailable,
            }
        }
    }
}

#[instrument(skip(client, config))]
pub async fn fetch_nearby(client: &Client, config: &AppConfig, now: DateTime<Utc>) -> Result<Vec<EarthquakeRecord>, FeedError> {
    info!("Retrieving earthquakes...");

    let query = FeedQuery::new(config, now);
    debug!(url = config.feed().url(), "Querying feed with {:?}", query);

    let response = client.get(config.feed().url()).query(&query.params()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::UnexpectedStatus(status));
    }

    let body = response.bytes().await?;
    let GeoJson::FeatureCollection { features } = serde_json::from_slice::<GeoJson>(&body)?;
    let received = features.len();

    let earthquakes = map_features(features, config);
    info!(
        "Retrieving earthquakes... OK, {} of {} within {} km",
        earthquakes.len(),
        received,
        config.alert().radius_km()
    );

    Ok(earthquakes)
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("feed request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    #[error("feed request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("feed responded with status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("malformed feed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FeedError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FeedError::Timeout(error)
        } else {
            FeedError::Request(error)
        }
    }
}
