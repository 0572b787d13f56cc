//! Persisted session layout

use serde::Serialize;

use super::Role;

/// Keys of the four entries that make up a stored session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Token,
    Role,
    UserName,
    UserId,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::Token,
        StorageKey::Role,
        StorageKey::UserName,
        StorageKey::UserId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Token => "jwt",
            StorageKey::Role => "userRole",
            StorageKey::UserName => "userName",
            StorageKey::UserId => "userId",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of an authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub role: Role,
    pub user_name: Option<String>,
    pub user_id: Option<i64>,
}
