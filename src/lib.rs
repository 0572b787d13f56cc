//! Elidune Session Guard
//!
//! Client-side session handling for the Elidune library front-end: decides
//! from persisted session entries whether a visitor is signed in, which role
//! they hold, and where each page load has to go.

pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod navigation;
pub mod store;
pub mod token;

pub use config::AppConfig;
pub use error::{AppError, AppResult, TokenError};
pub use guard::SessionGuard;
pub use models::{LoginResponse, Role, SessionInfo, StorageKey};
pub use navigation::{Navigation, Route};
pub use store::{FileStore, MemoryStore, SessionStore};
