use std::fmt::{Debug, Formatter};

use super::user;

/// Bearer token issued by the backend on login.
///
/// Never empty, and never printed: `Debug` redacts it so sessions can be
/// logged freely.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

#[derive(Debug, thiserror::Error)]
#[error("session token is empty")]
pub struct EmptyToken;

impl Token {
    pub fn new(raw: impl Into<String>) -> Result<Token, EmptyToken> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(EmptyToken);
        }
        Ok(Token(raw))
    }

    /// The raw token, for building the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Token {
    type Error = EmptyToken;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Token::new(value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// The signed-in user, as persisted between launches.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub id: user::Id,
    pub name: String,
    pub phone_number: String,
    pub token: Token,
}

impl Session {
    pub fn new(id: user::Id, name: String, phone_number: String, token: Token) -> Session {
        Session {
            id,
            name,
            phone_number,
            token,
        }
    }
}
