use std::path::Path;

use log::{debug, info, trace};
use rusqlite::{Connection, OptionalExtension};

use super::Session;
use crate::error::StoreError;

type Result<T> = std::result::Result<T, StoreError>;

/// Key the signed-in user is stored under.
pub const SESSION_KEY: &str = "authUser";

/// String key-value storage that outlives the process.
pub struct Store {
    conn: Connection,
}

/// Build the store.
impl Store {
    pub fn open(path: impl AsRef<Path>) -> Result<Store> {
        let conn = Connection::open(path.as_ref())?;
        trace!("Opened store at {}", path.as_ref().display());
        Store::init(conn)
    }

    /// A store that forgets everything when dropped.
    pub fn open_in_memory() -> Result<Store> {
        let conn = Connection::open_in_memory()?;
        trace!("Opened in-memory store");
        Store::init(conn)
    }

    fn init(conn: Connection) -> Result<Store> {
        trace!("Initializing store...");

        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            (),
        )?;

        info!("Finished initializing store");

        Ok(Store { conn })
    }
}

/// Key-value stuff
impl Store {
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        trace!("Getting item {}", key);
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", (key,), |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        trace!("Setting item {}", key);
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            (key, value),
        )?;
        Ok(())
    }

    /// Removing a key that isn't there is fine.
    pub fn remove_item(&self, key: &str) -> Result<()> {
        trace!("Removing item {}", key);
        self.conn.execute("DELETE FROM kv WHERE key=?1", (key,))?;
        Ok(())
    }
}

/// Session stuff
impl Store {
    pub fn load_session(&self) -> Result<Option<Session>> {
        let Some(raw) = self.get_item(SESSION_KEY)? else {
            debug!("No stored session");
            return Ok(None);
        };

        let session: Session = serde_json::from_str(&raw)?;
        debug!("Loaded stored session for user {}", session.id);
        Ok(Some(session))
    }

    pub fn save_session(&self, session: &Session) -> Result<()> {
        debug!("Storing session for user {}", session.id);
        let raw = serde_json::to_string(session)?;
        self.set_item(SESSION_KEY, &raw)
    }

    pub fn clear_session(&self) -> Result<()> {
        debug!("Clearing stored session");
        self.remove_item(SESSION_KEY)
    }
}
