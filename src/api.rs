//! Typed client for the backend.
//!
//! One file per endpoint group. Every call is fire-and-wait: no retries,
//! no timeout, no de-duplication.

use log::debug;
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::{config::Config, error::ApiError};

mod analyze;
mod messages;
mod preferences;
mod sessions;

pub use analyze::{Photo, UPLOAD_FAILED};
pub use sessions::LoginResponse;

#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    api_url: String,
    chat_url: String,
}

impl Client {
    pub fn new(config: &Config) -> Result<Client, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("nutrilens/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Client {
            http,
            api_url: config.api_url.clone(),
            chat_url: config.chat_url.clone(),
        })
    }

    fn api(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    fn chat(&self, path: &str) -> String {
        format!("{}{}", self.chat_url, path)
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Turn a non-success response into an error, preferring the server's own
/// `error` message over `fallback`.
async fn error_from(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let message = match response.bytes().await {
        Ok(body) => serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.is_empty()),
        Err(err) => {
            debug!("Failed to read error body: {}", err);
            None
        }
    };

    ApiError::Status {
        status,
        message: message.unwrap_or_else(|| fallback.to_owned()),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(ApiError::Decode)
}
