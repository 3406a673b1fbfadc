pub mod analysis;
mod database;
pub mod message;
pub mod post;
pub mod preferences;
pub mod session;
pub mod user;

pub use analysis::AnalysisResponse;
pub use database::{Store, SESSION_KEY};
pub use message::Message;
pub use post::Post;
pub use preferences::Preferences;
pub use session::{Session, Token};
