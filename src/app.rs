use std::sync::Arc;

use log::{error, info, warn};
use tokio::{sync::watch, task::JoinHandle};

use crate::{
    api::Client,
    auth::SessionManager,
    config::Config,
    error::AppError,
    model::Store,
    routes::{gateway, Decision, Gateway, Navigator, Route},
};

/// Everything a running client needs, wired together.
///
/// [`App::start`] restores the session, lands on the right first screen and
/// starts the gateway; [`App::shutdown`] stops it again.
pub struct App {
    pub config: Config,
    pub auth: Arc<SessionManager>,
    pub navigator: Navigator,
    shutdown: watch::Sender<bool>,
    gateway: JoinHandle<()>,
}

impl App {
    /// Must be called from inside a Tokio runtime; the gateway runs as a task.
    pub fn start(config: Config) -> Result<App, AppError> {
        info!("Starting nutrilens against {}", config.api_url);

        let store = match Store::open(&config.store_path) {
            Ok(store) => store,
            Err(err) => {
                error!(
                    "Failed to open store at {}: {}",
                    config.store_path.display(),
                    err
                );
                warn!("Sessions will not survive a restart");
                Store::open_in_memory()?
            }
        };

        let client = Client::new(&config)?;
        let auth = Arc::new(SessionManager::init(store, client));
        let navigator = Navigator::new(Route::Root);

        let mut gateway = Gateway::new(auth.subscribe(), navigator.clone());
        gateway.enforce();

        let (shutdown, shutdown_rx) = watch::channel(false);
        let gateway = gateway.spawn(shutdown_rx);

        Ok(App {
            config,
            auth,
            navigator,
            shutdown,
            gateway,
        })
    }

    pub fn client(&self) -> &Client {
        self.auth.client()
    }

    /// Navigate to `route` and apply the guard right away, without waiting
    /// for the gateway task to notice.
    pub fn open(&self, route: Route) -> Route {
        self.navigator.push(route.clone());
        if let Decision::Redirect(target) =
            gateway::apply(&self.navigator, self.auth.current().as_ref(), &route)
        {
            return target;
        }
        route
    }

    pub async fn shutdown(self) {
        self.shutdown.send_replace(true);
        if let Err(err) = self.gateway.await {
            error!("Gateway task failed: {}", err);
        }
        info!("Stopped");
    }
}
