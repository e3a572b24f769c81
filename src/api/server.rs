use crate::api::api_error::ApiError;
use crate::api::routes::{earthquakes, index, status};
use crate::app_config::AppConfig;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, middleware, web};
use reqwest::Client;
use tracing::info;

/// Shared by all workers, requests only read from it.
pub struct AppState {
    client: Client,
    config: AppConfig,
}

impl AppState {
    pub fn new(client: Client, config: AppConfig) -> Self {
        AppState { client, config }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

pub async fn default_404(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::RouteNotFound(req.path().to_string()))
}

pub fn configure_server(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").name("index").route(web::get().to(index)))
        .service(web::resource("/api/earthquakes").name("earthquakes").route(web::get().to(earthquakes)))
        .service(web::resource("/status").name("status").route(web::get().to(status)));
}

pub async fn run_server(state: AppState) -> std::io::Result<()> {
    let bind = state.config().server().bind().to_owned();
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure_server)
            .default_service(web::to(default_404))
    })
    .bind(&bind)?;

    info!("🔥 {} is up and running on {}", env!("CARGO_PKG_NAME"), bind);
    server.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::usgs::new_client;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::{NaiveDateTime, Utc};
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::time::Duration;

    async fn call(config: AppConfig, uri: &str) -> (StatusCode, Value) {
        let client = new_client(&config).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(client, config)))
                .configure(configure_server)
                .default_service(web::to(default_404)),
        )
        .await;

        let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = response.status();
        (status, test::read_body_json(response).await)
    }

    fn assert_recent(last_updated: &Value) {
        let parsed = NaiveDateTime::parse_from_str(last_updated.as_str().unwrap(), "%Y-%m-%d %H:%M:%S UTC").unwrap();
        let age = Utc::now().naive_utc() - parsed;
        assert!(age.num_seconds().abs() <= 5, "last_updated is not current: {}", last_updated);
    }

    #[actix_web::test]
    async fn earthquakes_returns_the_nearby_earthquakes() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/query")
            .match_query(Matcher::UrlEncoded("format".into(), "geojson".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/usgs_feed_response.json"))
            .create_async()
            .await;
        let config = AppConfigBuilder::new().feed_url(format!("{}/query", server.url())).build();

        let (status, body) = call(config, "/api/earthquakes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], json!(4));
        assert_eq!(body["feed_status"], json!("ok"));
        assert_eq!(
            body["earthquakes"][0],
            json!({
                "magnitude": 3.6,
                "place": "6 km NW of San Juan Bautista, CA",
                "time": "2024-02-29 20:53:21 UTC",
                "distance_km": 123.9,
                "depth_km": 6.1,
                "url": "https://earthquake.usgs.gov/earthquakes/eventpage/nc73981098",
                "alert": "green",
                "felt": 57,
                "tsunami": 0
            })
        );
        assert_eq!(body["earthquakes"][3]["magnitude"], json!(null));
        assert_recent(&body["last_updated"]);
    }

    #[actix_web::test]
    async fn earthquakes_returns_an_empty_list_when_the_feed_fails() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("GET", "/query").match_query(Matcher::Any).with_status(500).create_async().await;
        let config = AppConfigBuilder::new().feed_url(format!("{}/query", server.url())).build();

        let (status, body) = call(config, "/api/earthquakes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], json!(0));
        assert_eq!(body["earthquakes"], json!([]));
        assert_eq!(body["feed_status"], json!("unavailable"));
        assert_recent(&body["last_updated"]);
    }

    #[actix_web::test]
    async fn earthquakes_reports_an_unavailable_feed_for_an_error_payload() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/query")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "error": "bad request" }"#)
            .create_async()
            .await;
        let config = AppConfigBuilder::new().feed_url(format!("{}/query", server.url())).build();

        let (status, body) = call(config, "/api/earthquakes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], json!(0));
        assert_eq!(body["earthquakes"], json!([]));
        assert_eq!(body["feed_status"], json!("unavailable"));
    }

    #[actix_web::test]
    async fn earthquakes_returns_an_empty_list_when_the_feed_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        actix_web::rt::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });
        let config = AppConfigBuilder::new()
            .feed_url(format!("http://{}/query", address))
            .feed_timeout(Duration::from_millis(200))
            .build();

        let (status, body) = call(config, "/api/earthquakes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], json!(0));
        assert_eq!(body["earthquakes"], json!([]));
        assert_eq!(body["feed_status"], json!("unavailable"));
    }

    #[actix_web::test]
    async fn index_serves_the_html_page() {
        let config = AppConfigBuilder::new().build();
        let client = new_client(&config).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(client, config)))
                .configure(configure_server),
        )
        .await;

        let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("content-type").unwrap(), "text/html; charset=utf-8");
        let body = test::read_body(response).await;
        let page = String::from_utf8_lossy(&body);
        assert!(page.contains("/api/earthquakes"));
        assert!(page.contains(r#"quake.url.startsWith("https://")"#));
    }

    #[actix_web::test]
    async fn status_reports_the_version_and_feed() {
        let config = AppConfigBuilder::new().build();

        let (status, body) = call(config, "/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "version": env!("CARGO_PKG_VERSION"),
                "feed_url": "https://earthquake.url/query",
                "status": "good"
            })
        );
    }

    #[actix_web::test]
    async fn unknown_routes_return_a_json_404() {
        let config = AppConfigBuilder::new().build();

        let (status, body) = call(config, "/api/volcanoes").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({
                "short": "route not found",
                "long": "route not found: /api/volcanoes"
            })
        );
    }
}
