use crate::domain::GeoPoint;
use crate::extensions::date_time_ext::UtcFormat;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A seismic event near the reference point. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EarthquakeRecord {
    magnitude: Option<f64>,
    place: Option<String>,
    time: String,
    distance_km: f64,
    depth_km: f64,
    url: Option<String>,
    alert: Option<String>,
    felt: Option<u64>,
    tsunami: Option<u8>,
    #[serde(skip)]
    occurred_at: DateTime<Utc>,
    #[serde(skip)]
    location: GeoPoint,
}

impl EarthquakeRecord {
    pub fn builder(occurred_at: DateTime<Utc>, location: GeoPoint, depth_km: f64, distance_km: f64) -> EarthquakeRecordBuilder {
        EarthquakeRecordBuilder {
            record: EarthquakeRecord {
                magnitude: None,
                place: None,
                time: occurred_at.to_display_time(),
                distance_km,
                depth_km,
                url: None,
                alert: None,
                felt: None,
                tsunami: None,
                occurred_at,
                location,
            },
        }
    }

    pub fn magnitude(&self) -> Option<f64> {
        self.magnitude
    }

    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    pub fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }

    pub fn location(&self) -> &GeoPoint {
        &self.location
    }

    pub fn depth_km(&self) -> f64 {
        self.depth_km
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

pub struct EarthquakeRecordBuilder {
    record: EarthquakeRecord,
}

impl EarthquakeRecordBuilder {
    pub fn magnitude(mut self, magnitude: Option<f64>) -> Self {
        self.record.magnitude = magnitude;
        self
    }

    pub fn place(mut self, place: Option<String>) -> Self {
        self.record.place = place;
        self
    }

    pub fn detail_url(mut self, url: Option<String>) -> Self {
        self.record.url = url;
        self
    }

    pub fn alert_level(mut self, alert: Option<String>) -> Self {
        self.record.alert = alert;
        self
    }

    pub fn felt_reports(mut self, felt: Option<u64>) -> Self {
        self.record.felt = felt;
        self
    }

    pub fn tsunami_flag(mut self, tsunami: Option<u8>) -> Self {
        self.record.tsunami = tsunami;
        self
    }

    pub fn build(self) -> EarthquakeRecord {
        self.record
    }
}
