use log::{debug, error, info, warn};
use tokio::sync::{watch, Mutex};

use super::{AuthSnapshot, AuthState};
use crate::{
    api::{Client, LoginResponse},
    error::{AuthError, StoreError},
    model::{Session, Store, Token},
};

/// Owns the signed-in user.
///
/// Created once at startup with [`SessionManager::init`], which restores any
/// session persisted by a previous run. Login and logout are the only
/// writers; everyone else reads a snapshot or subscribes to changes.
pub struct SessionManager {
    store: Mutex<Store>,
    client: Client,
    state: watch::Sender<AuthSnapshot>,
}

impl SessionManager {
    pub fn init(store: Store, client: Client) -> SessionManager {
        let user = restore(&store);
        match &user {
            Some(session) => info!("Restored session for user {}", session.id),
            None => info!("Starting signed out"),
        }

        let (state, _rx) = watch::channel(AuthSnapshot {
            user,
            ..AuthSnapshot::default()
        });

        SessionManager {
            store: Mutex::new(store),
            client,
            state,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn current(&self) -> Option<Session> {
        self.state.borrow().user.clone()
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        self.state.borrow().clone()
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().state()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.state.subscribe()
    }

    /// Log in against the backend and persist the resulting session.
    ///
    /// The failure message is also published as the snapshot's `error`.
    pub async fn login(&self, phone_number: &str, password: &str) -> Result<Session, AuthError> {
        debug!("Logging in {}", phone_number);
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });

        match self.try_login(phone_number, password).await {
            Ok(session) => {
                info!("Logged in as user {}", session.id);
                let user = session.clone();
                self.state.send_modify(|state| {
                    state.user = Some(user);
                    state.is_loading = false;
                });
                Ok(session)
            }
            Err(err) => {
                warn!("Login failed for {}: {}", phone_number, err);
                let message = err.to_string();
                self.state.send_modify(|state| {
                    state.error = Some(message);
                    state.is_loading = false;
                });
                Err(err)
            }
        }
    }

    async fn try_login(&self, phone_number: &str, password: &str) -> Result<Session, AuthError> {
        let response = self.client.login(phone_number, password).await?;
        let session = session_from(response)?;

        // Losing persistence only costs the user a login on next launch.
        if let Err(err) = self.store.lock().await.save_session(&session) {
            error!("Failed to persist session: {}", err);
        }

        Ok(session)
    }

    /// Forget the session, locally and on disk. Always ends signed out.
    pub async fn logout(&self) {
        debug!("Logging out");

        if let Err(err) = self.store.lock().await.clear_session() {
            error!("Failed to clear stored session: {}", err);
        }

        self.state.send_modify(|state| {
            state.user = None;
            state.error = None;
        });

        info!("Logged out");
    }
}

fn session_from(response: LoginResponse) -> Result<Session, AuthError> {
    let token = response
        .token
        .ok_or(AuthError::MissingToken)
        .and_then(|token| Token::new(token).map_err(|_| AuthError::MissingToken))?;

    Ok(Session::new(
        response.id,
        response.name,
        response.phone_number,
        token,
    ))
}

/// Read the persisted session. Any failure means "signed out".
fn restore(store: &Store) -> Option<Session> {
    match store.load_session() {
        Ok(session) => session,
        Err(StoreError::Malformed(err)) => {
            warn!("Discarding unreadable stored session: {}", err);
            if let Err(err) = store.clear_session() {
                error!("Failed to clear stored session: {}", err);
            }
            None
        }
        Err(err) => {
            error!("Failed to read stored session: {}", err);
            None
        }
    }
}
