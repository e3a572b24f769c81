use crate::domain::GeoPoint;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    server: Server,
    feed: Feed,
    alert: Alert,
    location: GeoPoint,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("QUAKEWATCH").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn alert(&self) -> &Alert {
        &self.alert
    }

    /// The point distances are measured from.
    pub fn reference_point(&self) -> &GeoPoint {
        &self.location
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    bind: String,
}

impl Server {
    pub fn bind(&self) -> &str {
        &self.bind
    }
}

#[derive(Debug, Deserialize)]
pub struct Feed {
    url: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    #[serde(with = "humantime_serde")]
    lookback: Duration,
    min_magnitude: f64,
    bounding_box_degrees: f64,
}

impl Feed {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn lookback(&self) -> Duration {
        self.lookback
    }

    pub fn min_magnitude(&self) -> f64 {
        self.min_magnitude
    }

    /// Half-width of the box sent to the feed to pre-filter events, in degrees.
    pub fn bounding_box_degrees(&self) -> f64 {
        self.bounding_box_degrees
    }
}

#[derive(Debug, Deserialize)]
pub struct Alert {
    radius_km: f64,
}

impl Alert {
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                server: Server {
                    bind: "127.0.0.1:0".to_string(),
                },
                feed: Feed {
                    url: "https://earthquake.url/query".to_string(),
                    timeout: Duration::from_secs(10),
                    lookback: Duration::from_secs(24 * 60 * 60),
                    min_magnitude: 2.0,
                    bounding_box_degrees: 2.0,
                },
                alert: Alert { radius_km: 200.0 },
                location: GeoPoint::new(37.7749, -122.4194),
            },
        }
    }

    pub fn feed_url(mut self, url: String) -> Self {
        self.config.feed.url = url;
        self
    }

    pub fn feed_timeout(mut self, timeout: Duration) -> Self {
        self.config.feed.timeout = timeout;
        self
    }

    pub fn radius_km(mut self, radius_km: f64) -> Self {
        self.config.alert.radius_km = radius_km;
        self
    }

    pub fn reference_point(mut self, location: GeoPoint) -> Self {
        self.config.location = location;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
