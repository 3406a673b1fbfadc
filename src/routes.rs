//! Navigation: the routes the app knows about, the back stack, and the
//! auth guard that keeps signed-out users away from protected screens.

use std::fmt::{Display, Formatter};

pub mod gateway;
pub mod guard;
mod navigator;

pub use gateway::Gateway;
pub use guard::Decision;
pub use navigator::{NavState, Navigator};

/// Name of the route group holding the tab screens.
const TABS_GROUP: &str = "(tabs)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Photo capture and upload.
    Home,
    Chat,
    Community,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Chat, Tab::Community, Tab::Settings];

    fn segment(self) -> Option<&'static str> {
        match self {
            Tab::Home => None,
            Tab::Chat => Some("chat"),
            Tab::Community => Some("community"),
            Tab::Settings => Some("settings"),
        }
    }

    fn from_segment(segment: &str) -> Option<Tab> {
        match segment {
            "index" => Some(Tab::Home),
            "chat" => Some(Tab::Chat),
            "community" => Some(Tab::Community),
            "settings" => Some(Tab::Settings),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Nothing requested yet: first load.
    Root,
    Tabs(Tab),
    Login,
    AboutYou,
    /// `generate/:id`. The id is whatever followed the first segment.
    Generate(String),
    Display,
    Results,
    Unknown(Vec<String>),
}

impl Route {
    pub const HOME: Route = Route::Tabs(Tab::Home);

    /// Parse a path like `/generate/42` or `(tabs)/chat`.
    pub fn parse(path: &str) -> Route {
        Route::from_segments(path.split('/'))
    }

    /// Build a route from path segments. Empty segments are ignored, so `[]`
    /// and `[""]` are both the root.
    pub fn from_segments<I, S>(segments: I) -> Route
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<String> = segments
            .into_iter()
            .map(|segment| segment.as_ref().trim().to_owned())
            .filter(|segment| !segment.is_empty())
            .collect();

        let Some((first, rest)) = segments.split_first() else {
            return Route::Root;
        };

        match (first.as_str(), rest) {
            (TABS_GROUP, []) => Route::HOME,
            (TABS_GROUP, [tab]) => match Tab::from_segment(tab) {
                Some(tab) => Route::Tabs(tab),
                None => Route::Unknown(segments),
            },
            ("generate", rest) => Route::Generate(rest.join("/")),
            ("display", _) => Route::Display,
            ("login", []) => Route::Login,
            ("aboutyou", []) => Route::AboutYou,
            ("results", []) => Route::Results,
            (tab, []) => match Tab::from_segment(tab) {
                Some(tab) if tab != Tab::Home => Route::Tabs(tab),
                _ => Route::Unknown(segments),
            },
            _ => Route::Unknown(segments),
        }
    }

    /// Screens that need a signed-in user.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Generate(_) | Route::Display)
    }

    pub fn segments(&self) -> Vec<String> {
        match self {
            Route::Root => Vec::new(),
            Route::Tabs(tab) => std::iter::once(TABS_GROUP)
                .chain(tab.segment())
                .map(str::to_owned)
                .collect(),
            Route::Login => vec!["login".to_owned()],
            Route::AboutYou => vec!["aboutyou".to_owned()],
            Route::Generate(id) if id.is_empty() => vec!["generate".to_owned()],
            Route::Generate(id) => vec!["generate".to_owned(), id.clone()],
            Route::Display => vec!["display".to_owned()],
            Route::Results => vec!["results".to_owned()],
            Route::Unknown(segments) => segments.clone(),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.segments().join("/"))
    }
}
