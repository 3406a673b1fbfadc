use crate::{
    auth::SessionManager,
    routes::{Navigator, Route},
};

use super::Alert;

/// Answer to the logout confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutChoice {
    Cancel,
    Logout,
}

pub fn open_about_you(navigator: &Navigator) {
    navigator.push(Route::AboutYou);
}

/// The prompt shown before logging out.
pub fn logout_prompt() -> Alert {
    Alert::new("Logout", "Are you sure you want to log out?")
}

/// Act on the user's answer to [`logout_prompt`].
pub async fn logout(choice: LogoutChoice, auth: &SessionManager, navigator: &Navigator) {
    if choice == LogoutChoice::Cancel {
        return;
    }
    auth.logout().await;
    // The tabs aren't protected, so the guard won't move us; do it here.
    navigator.replace(Route::Login);
}
