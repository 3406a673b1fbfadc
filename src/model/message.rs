/// One bubble in the chat transcript.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub text: String,
    pub is_bot: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Message {
        Message {
            text: text.into(),
            is_bot: false,
        }
    }

    pub fn bot(text: impl Into<String>) -> Message {
        Message {
            text: text.into(),
            is_bot: true,
        }
    }
}
