mod client;
mod domain;
mod fetcher;
mod map_features;
mod query;

pub use client::new_client;
pub use fetcher::nearby_earthquakes;
