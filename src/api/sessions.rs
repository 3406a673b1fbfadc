use log::debug;

use super::{decode, error_from, Client};
use crate::{error::ApiError, model::user};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

// No Debug: it would print the password.
#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    phone_number: &'a str,
    password: &'a str,
}

#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub id: user::Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    /// Checked for emptiness when the session is built.
    #[serde(default)]
    pub token: Option<String>,
}

impl Client {
    pub async fn login(&self, phone_number: &str, password: &str) -> Result<LoginResponse, ApiError> {
        debug!("Sending login request for {}", phone_number);

        let response = self
            .http
            .post(self.api("/login"))
            .json(&LoginRequest {
                phone_number,
                password,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            debug!("Login rejected with status {}", response.status());
            return Err(error_from(response, INVALID_CREDENTIALS).await);
        }

        decode(response).await
    }
}
