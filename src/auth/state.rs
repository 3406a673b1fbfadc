use crate::model::Session;

/// Everything observers can see about authentication.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub user: Option<Session>,
    /// A login request is in flight.
    pub is_loading: bool,
    /// Message from the last failed login.
    pub error: Option<String>,
}

impl AuthSnapshot {
    pub fn state(&self) -> AuthState {
        match self.user {
            Some(_) => AuthState::Authenticated,
            None => AuthState::Unauthenticated,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}
