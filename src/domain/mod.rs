mod earthquake;
mod feed_status;
mod geo_point;

pub use earthquake::EarthquakeRecord;
pub use feed_status::FeedStatus;
pub use geo_point::GeoPoint;
