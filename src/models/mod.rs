//! Data models for the Elidune session guard

pub mod login;
pub mod role;
pub mod session;

// Re-export commonly used types
pub use login::{ApiError, LoginRequest, LoginResponse};
pub use role::Role;
pub use session::{SessionInfo, StorageKey};
