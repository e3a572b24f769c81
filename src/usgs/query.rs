use crate::app_config::AppConfig;
use crate::extensions::date_time_ext::UtcFormat;
use chrono::{DateTime, TimeDelta, Utc};

/// Parameters of a single FDSN event query: a time window ending now and a box around the reference point.
#[derive(Debug, PartialEq)]
pub struct FeedQuery {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
    min_magnitude: f64,
}

impl FeedQuery {
    pub fn new(config: &AppConfig, now: DateTime<Utc>) -> Self {
        let lookback = TimeDelta::from_std(config.feed().lookback()).unwrap_or(TimeDelta::MAX);
        let start = now.checked_sub_signed(lookback).unwrap_or(DateTime::<Utc>::MIN_UTC);

        let reference = config.reference_point();
        let half_width = config.feed().bounding_box_degrees();

        FeedQuery {
            start,
            end: now,
            min_latitude: (reference.latitude - half_width).max(-90.0),
            max_latitude: (reference.latitude + half_width).min(90.0),
            min_longitude: reference.longitude - half_width,
            max_longitude: reference.longitude + half_width,
            min_magnitude: config.feed().min_magnitude(),
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("format", "geojson".to_string()),
            ("starttime", self.start.to_query_time()),
            ("endtime", self.end.to_query_time()),
            ("minlatitude", format!("{:.4}", self.min_latitude)),
            ("maxlatitude", format!("{:.4}", self.max_latitude)),
            ("minlongitude", format!("{:.4}", self.min_longitude)),
            ("maxlongitude", format!("{:.4}", self.max_longitude)),
            ("minmagnitude", format!("{:.1}", self.min_magnitude)),
        ]
    }
}
