use log::{debug, info, trace};
use tokio::{sync::watch, task::JoinHandle};

use super::{guard, Decision, NavState, Navigator, Route};
use crate::{auth::AuthSnapshot, model::Session};

/// Keeps the navigator in line with the guard.
///
/// Watches both the auth state and the back stack and re-runs the guard
/// whenever either changes, replacing the current route on a redirect.
pub struct Gateway {
    auth: watch::Receiver<AuthSnapshot>,
    routes: watch::Receiver<NavState>,
    navigator: Navigator,
}

impl Gateway {
    pub fn new(auth: watch::Receiver<AuthSnapshot>, navigator: Navigator) -> Gateway {
        let routes = navigator.subscribe();
        Gateway {
            auth,
            routes,
            navigator,
        }
    }

    /// Run the guard once against the latest session and route.
    pub fn enforce(&mut self) -> Decision {
        // Both borrows must end before `apply` publishes a redirect.
        let session = self.auth.borrow_and_update().user.clone();
        let route = self.routes.borrow_and_update().current().clone();
        apply(&self.navigator, session.as_ref(), &route)
    }

    /// Re-run the guard on every change until `shutdown` flips to `true`
    /// or either side goes away.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        trace!("Gateway started");

        loop {
            if *shutdown.borrow_and_update() {
                break;
            }

            self.enforce();

            tokio::select! {
                changed = self.auth.changed() => {
                    if changed.is_err() {
                        debug!("Session manager dropped, stopping gateway");
                        break;
                    }
                }
                changed = self.routes.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        trace!("Gateway stopped");
    }

    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }
}

/// Evaluate the guard for `route` and carry out any redirect on `navigator`.
pub fn apply(navigator: &Navigator, session: Option<&Session>, route: &Route) -> Decision {
    let decision = guard::evaluate(session, route);
    if let Decision::Redirect(target) = &decision {
        info!("Redirecting {} to {}", route, target);
        navigator.replace(target.clone());
    }
    decision
}
