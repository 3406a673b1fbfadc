use log::debug;

use super::{error_from, Client};
use crate::{
    error::ApiError,
    model::{Preferences, Token},
};

const NOT_SAVED: &str = "Failed to save your information.";

impl Client {
    pub async fn save_preferences(
        &self,
        token: &Token,
        preferences: &Preferences,
    ) -> Result<(), ApiError> {
        debug!("Saving preferences");

        let response = self
            .http
            .post(self.api("/preferences"))
            .bearer_auth(token.expose())
            .json(preferences)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from(response, NOT_SAVED).await);
        }

        Ok(())
    }
}
