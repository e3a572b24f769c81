use crate::app_config::AppConfig;
use reqwest::Client;
use thiserror::Error;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the client used for every feed request. The configured timeout bounds the whole request, body included.
pub fn new_client(config: &AppConfig) -> Result<Client, FeedClientError> {
    let client = Client::builder().timeout(config.feed().timeout()).user_agent(USER_AGENT).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum FeedClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
