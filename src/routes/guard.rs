use super::Route;
use crate::model::Session;

/// What the guard wants done with a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Replace the current route with this one.
    Redirect(Route),
}

/// Decide whether `route` may be shown given the current session.
///
/// The root sends everyone somewhere: home when signed in, login otherwise.
/// Protected routes send signed-out users to login. Everything else goes
/// through untouched. Redirect targets always evaluate to `Allow`, so
/// re-running the guard after a redirect settles.
pub fn evaluate(session: Option<&Session>, route: &Route) -> Decision {
    match (session, route) {
        (Some(_), Route::Root) => Decision::Redirect(Route::HOME),
        (None, Route::Root) => Decision::Redirect(Route::Login),
        (None, route) if route.is_protected() => Decision::Redirect(Route::Login),
        _ => Decision::Allow,
    }
}
