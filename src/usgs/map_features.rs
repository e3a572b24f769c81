use crate::app_config::AppConfig;
use crate::domain::{EarthquakeRecord, GeoPoint};
use crate::extensions::float_ext::RoundDecimals;
use crate::usgs::domain::Feature;
use chrono::DateTime;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Turns raw feed features into records within the alert radius, strongest first.
/// Features that cannot be mapped are skipped and logged, the rest are still returned.
pub fn map_features(features: Vec<serde_json::Value>, config: &AppConfig) -> Vec<EarthquakeRecord> {
    let reference = config.reference_point();
    let radius_km = config.alert().radius_km();

    let mut records: Vec<EarthquakeRecord> = features
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match map_feature(value, reference, radius_km) {
            Ok(record) => record,
            Err(e) => {
                warn!(index, "⚠️ Skipping feature: {}", e);
                None
            }
        })
        .collect();

    // Stable, so events of equal magnitude keep the feed order
    records.sort_by_key(|record| Reverse(OrderedFloat(record.magnitude().unwrap_or(0.0))));
    records
}

fn map_feature(value: serde_json::Value, reference: &GeoPoint, radius_km: f64) -> Result<Option<EarthquakeRecord>, MapFeatureError> {
    let feature: Feature = serde_json::from_value(value)?;
    let id = feature.id.unwrap_or_else(|| "unknown".to_string());

    let coordinates = feature.geometry.ok_or_else(|| MapFeatureError::MissingGeometry { id: id.clone() })?.coordinates;
    let &[longitude, latitude, depth_km, ..] = coordinates.as_slice() else {
        return Err(MapFeatureError::IncompleteCoordinates { id, found: coordinates.len() });
    };

    let location = GeoPoint::new(latitude, longitude);
    // Compared as stored so no returned record shows a distance beyond the radius
    let distance_km = reference.distance_to(&location).round_decimals(1);
    if distance_km > radius_km {
        trace!(id = %id, distance_km, "Feature outside of the alert radius");
        return Ok(None);
    }

    let properties = feature.properties;
    let millis = properties.time.ok_or_else(|| MapFeatureError::MissingTime { id: id.clone() })?;
    let occurred_at = DateTime::from_timestamp_millis(millis).ok_or_else(|| MapFeatureError::InvalidTime { id: id.clone(), millis })?;

    let record = EarthquakeRecord::builder(occurred_at, location, depth_km.round_decimals(1), distance_km)
        .magnitude(properties.mag)
        .place(properties.place)
        .detail_url(properties.url)
        .alert_level(properties.alert)
        .felt_reports(properties.felt)
        .tsunami_flag(properties.tsunami)
        .build();

    debug!(
        id = %id,
        magnitude = ?record.magnitude(),
        place = ?record.place(),
        occurred_at = %record.occurred_at(),
        latitude = record.location().latitude,
        longitude = record.location().longitude,
        depth_km = record.depth_km(),
        distance_km = record.distance_km(),
        "Feature within the alert radius"
    );

    Ok(Some(record))
}

#[derive(Error, Debug)]
pub enum MapFeatureError {
    #[error("undecodable feature: {0}")]
    Undecodable(#[from] serde_json::Error),
    #[error("feature '{id}' has no geometry")]
    MissingGeometry { id: String },
    #[error("feature '{id}' has {found} coordinates, expected longitude, latitude and depth")]
    IncompleteCoordinates { id: String, found: usize },
    #[error("feature '{id}' has no time")]
    MissingTime { id: String },
    #[error("feature '{id}' has an out of range time: {millis}")]
    InvalidTime { id: String, millis: i64 },
}
