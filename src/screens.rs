//! State behind each screen, minus the pixels.
//!
//! A UI shell renders these and forwards user input; failures come back as
//! an [`Alert`] or an inline message instead of an error, the way the app
//! shows them.

pub mod about_you;
pub mod chat;
pub mod community;
pub mod display;
pub mod login;
pub mod results;
pub mod settings;
pub mod upload;

/// A modal message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Alert {
        Alert {
            title: title.into(),
            message: message.into(),
        }
    }
}
