use std::{
    env,
    fmt::{Debug, Display},
    path::PathBuf,
    str::FromStr,
};

use log::{info, warn, LevelFilter};

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_STORE_PATH: &str = "./nutrilens.sqlite3";

#[derive(Clone, Debug)]
pub struct Config {
    /// Base url for login, analysis and preferences.
    pub api_url: String,
    /// Base url for the chat bot. Falls back to `api_url`.
    pub chat_url: String,
    pub store_path: PathBuf,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn load() -> Self {
        let api_url = try_load("NUTRILENS_API_URL", DEFAULT_API_URL.to_owned());
        let chat_url = try_load("NUTRILENS_CHAT_URL", api_url.clone());

        Self {
            api_url: trim_base(api_url),
            chat_url: trim_base(chat_url),
            store_path: try_load("NUTRILENS_STORE_PATH", PathBuf::from(DEFAULT_STORE_PATH)),
            log_level: try_load("NUTRILENS_LOG", LevelFilter::Info),
        }
    }

    /// Config pointing every endpoint at one base url. Handy for tests.
    pub fn with_base_url(base_url: &str, store_path: impl Into<PathBuf>) -> Self {
        Self {
            api_url: trim_base(base_url.to_owned()),
            chat_url: trim_base(base_url.to_owned()),
            store_path: store_path.into(),
            log_level: LevelFilter::Info,
        }
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_owned()
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Debug,
    T::Err: Display,
{
    let Some(raw) = var(key) else {
        info!("{key} not set, using default: {default:?}");
        return default;
    };

    match raw.parse() {
        Ok(value) => value,
        Err(err) => {
            warn!("Invalid {key} value {raw:?}: {err}, using default: {default:?}");
            default
        }
    }
}
