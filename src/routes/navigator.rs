use log::debug;
use std::sync::Arc;
use tokio::sync::watch;

use super::Route;

/// The back stack. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    stack: Vec<Route>,
}

impl NavState {
    fn new(initial: Route) -> NavState {
        NavState {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> &Route {
        // The constructor seeds one entry and `back` never pops the last.
        &self.stack[self.stack.len() - 1]
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }
}

/// Shared handle to the back stack.
///
/// Clones all drive the same stack; observers get every change through
/// [`Navigator::subscribe`].
#[derive(Clone, Debug)]
pub struct Navigator {
    tx: Arc<watch::Sender<NavState>>,
}

impl Navigator {
    pub fn new(initial: Route) -> Navigator {
        let (tx, _rx) = watch::channel(NavState::new(initial));
        Navigator { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Route {
        self.tx.borrow().current().clone()
    }

    pub fn stack(&self) -> Vec<Route> {
        self.tx.borrow().stack().to_vec()
    }

    pub fn subscribe(&self) -> watch::Receiver<NavState> {
        self.tx.subscribe()
    }

    pub fn push(&self, route: Route) {
        debug!("Navigating to {}", route);
        self.tx.send_modify(|state| state.stack.push(route));
    }

    /// Swap the top of the stack, leaving no back entry behind.
    pub fn replace(&self, route: Route) {
        debug!("Replacing current route with {}", route);
        self.tx.send_modify(|state| {
            if let Some(top) = state.stack.last_mut() {
                *top = route;
            }
        });
    }

    /// Pop the top route. Returns `false` when already at the bottom.
    pub fn back(&self) -> bool {
        self.tx.send_if_modified(|state| {
            if state.stack.len() <= 1 {
                return false;
            }
            state.stack.pop();
            debug!("Went back to {}", state.current());
            true
        })
    }
}
