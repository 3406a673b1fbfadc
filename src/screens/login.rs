use log::debug;

use super::Alert;
use crate::auth::SessionManager;

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub phone_number: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(phone_number: impl Into<String>, password: impl Into<String>) -> LoginForm {
        LoginForm {
            phone_number: phone_number.into(),
            password: password.into(),
        }
    }

    /// Whether the submit button should show a spinner.
    pub fn is_loading(&self, auth: &SessionManager) -> bool {
        auth.snapshot().is_loading
    }

    /// Try to log in. The gateway takes care of leaving the screen.
    pub async fn submit(&self, auth: &SessionManager) -> Result<(), Alert> {
        debug!("Submitting login form");
        auth.login(&self.phone_number, &self.password)
            .await
            .map(|_| ())
            .map_err(|_| Alert::new("Login Failed", "Invalid phone number or password."))
    }
}
