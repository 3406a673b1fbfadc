use log::debug;

use super::{decode, error_from, Client};
use crate::error::ApiError;

const NO_REPLY: &str = "The bot did not reply";

#[derive(serde::Serialize)]
struct SendMessage<'a> {
    message: &'a str,
}

#[derive(serde::Deserialize)]
struct BotReply {
    #[serde(rename = "botReply")]
    bot_reply: String,
}

impl Client {
    /// Send one chat line and wait for the bot's answer.
    pub async fn send_message(&self, message: &str) -> Result<String, ApiError> {
        debug!("Sending chat message ({} bytes)", message.len());

        let response = self
            .http
            .post(self.chat("/send-message"))
            .json(&SendMessage { message })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from(response, NO_REPLY).await);
        }

        let reply: BotReply = decode(response).await?;
        Ok(reply.bot_reply)
    }
}
