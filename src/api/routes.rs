use crate::api::server::AppState;
use crate::domain::{EarthquakeRecord, FeedStatus};
use crate::extensions::date_time_ext::UtcFormat;
use crate::usgs::nearby_earthquakes;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, Json};
use actix_web::HttpResponse;
use chrono::Utc;
use serde::Serialize;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize, Debug)]
pub struct EarthquakesResponse {
    pub count: usize,
    pub earthquakes: Vec<EarthquakeRecord>,
    pub last_updated: String,
    pub feed_status: FeedStatus,
}

#[derive(Serialize, Debug)]
pub struct Status {
    pub version: String,
    pub feed_url: String,
    pub status: String,
}

pub async fn index() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(INDEX_HTML)
}

/// Never fails: an unreachable feed yields an empty list flagged with `feed_status: "unavailable"`.
pub async fn earthquakes(state: Data<AppState>) -> Json<EarthquakesResponse> {
    let report = nearby_earthquakes(state.client(), state.config()).await;

    Json(EarthquakesResponse {
        count: report.earthquakes.len(),
        earthquakes: report.earthquakes,
        last_updated: Utc::now().to_display_time(),
        feed_status: report.status,
    })
}

pub async fn status(state: Data<AppState>) -> Json<Status> {
    Json(Status {
        version: VERSION.to_string(),
        feed_url: state.config().feed().url().to_string(),
        status: "good".to_string(),
    })
}
