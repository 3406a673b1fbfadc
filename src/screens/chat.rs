use log::error;

use crate::{api::Client, model::Message};

pub const NO_REPLY: &str = "Failed to get a response. Please try again later.";

/// The chat tab: a transcript and the line being typed.
#[derive(Clone, Debug, Default)]
pub struct ChatScreen {
    pub input: String,
    messages: Vec<Message>,
}

impl ChatScreen {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Send the current input and append the bot's answer.
    ///
    /// Blank input does nothing. A failed request shows up as a bot
    /// message rather than an error.
    pub async fn send(&mut self, client: &Client) {
        if self.input.trim().is_empty() {
            return;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(Message::user(text.clone()));

        let reply = match client.send_message(&text).await {
            Ok(reply) => reply,
            Err(err) => {
                error!("Error sending message: {}", err);
                NO_REPLY.to_owned()
            }
        };
        self.messages.push(Message::bot(reply));
    }
}
