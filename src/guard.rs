//! Session guard
//!
//! Decides, from the persisted session entries, whether the visitor is signed
//! in and where a page load has to go. State is recomputed from the store on
//! every call; nothing is cached between calls.
//!
//! Navigation is never performed here. Every decision comes back as a
//! [`Navigation`] which the calling page (or shell) acts upon.

use chrono::Utc;

use crate::{
    models::{LoginResponse, Role, SessionInfo, StorageKey},
    navigation::{Navigation, Route},
    store::SessionStore,
    token::{self, TokenClaims},
};

pub struct SessionGuard<S> {
    store: S,
}

impl<S: SessionStore> SessionGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Whether the stored token exists and has not expired yet
    pub fn is_token_valid(&self) -> bool {
        self.is_token_valid_at(Utc::now().timestamp())
    }

    /// Same as [`is_token_valid`](Self::is_token_valid) against an explicit
    /// clock value (Unix seconds)
    pub fn is_token_valid_at(&self, now: i64) -> bool {
        let Some(jwt) = self.store.get(StorageKey::Token.as_str()) else {
            return false;
        };

        match token::decode_claims(&jwt) {
            Ok(claims) => claims.is_valid_at(now),
            Err(e) => {
                tracing::warn!("Invalid JWT format: {}", e);
                false
            }
        }
    }

    /// Claims of the stored token, `None` when absent or undecodable
    pub fn token_claims(&self) -> Option<TokenClaims> {
        let jwt = self.store.get(StorageKey::Token.as_str())?;
        token::decode_claims(&jwt).ok()
    }

    /// Stored role. An empty string counts as no role.
    pub fn role(&self) -> Option<Role> {
        self.store
            .get(StorageKey::Role.as_str())
            .filter(|role| !role.is_empty())
            .map(Role::from)
    }

    /// Stored user id, when present and numeric
    pub fn user_id(&self) -> Option<i64> {
        self.store
            .get(StorageKey::UserId.as_str())
            .and_then(|id| id.trim().parse().ok())
    }

    /// Valid token and a role, both required
    pub fn is_authenticated(&self) -> bool {
        self.authenticated_role().is_some()
    }

    fn authenticated_role(&self) -> Option<Role> {
        if !self.is_token_valid() {
            return None;
        }
        self.role()
    }

    /// Remove every session entry. Safe to call on an empty store.
    pub fn clear_session(&mut self) {
        for key in StorageKey::ALL {
            self.store.remove(key.as_str());
        }
    }

    /// Send an already signed-in visitor to their landing page (used by the
    /// login and signup pages)
    pub fn redirect_if_authenticated(&self) -> Navigation {
        match self.authenticated_role() {
            Some(role) => Navigation::Redirect(Route::landing_for(&role)),
            None => Navigation::Stay,
        }
    }

    /// Gate a page load.
    ///
    /// Unauthenticated visitors lose whatever stale entries are left and go
    /// to the login page. Authenticated visitors holding the wrong role are
    /// sent to their own landing page with the session untouched. An empty
    /// required role requires nothing.
    pub fn protect_route(&mut self, required: Option<&Role>) -> Navigation {
        let Some(role) = self.authenticated_role() else {
            tracing::debug!("No valid session, redirecting to login");
            self.clear_session();
            return Navigation::Redirect(Route::Login);
        };

        match required {
            Some(required) if !required.as_str().is_empty() && *required != role => {
                tracing::debug!("Role {} cannot access a {} page", role, required);
                Navigation::Redirect(Route::landing_for(&role))
            }
            _ => Navigation::Stay,
        }
    }

    pub fn protect_admin_route(&mut self) -> Navigation {
        self.protect_route(Some(&Role::Admin))
    }

    pub fn protect_user_route(&mut self) -> Navigation {
        self.protect_route(Some(&Role::User))
    }

    /// Clear the session and go to the login page, whatever the prior state
    pub fn logout(&mut self) -> Navigation {
        self.clear_session();
        tracing::info!("Logged out");
        Navigation::Redirect(Route::Login)
    }

    /// Record a successful login and return the role's landing page.
    ///
    /// A response without a token still records the user, but any token left
    /// over from a previous session is dropped so it cannot be paired with
    /// the new role.
    pub fn establish_session(&mut self, response: &LoginResponse) -> Navigation {
        match response.jwt.as_deref() {
            Some(jwt) => self.store.set(StorageKey::Token.as_str(), jwt),
            None => self.store.remove(StorageKey::Token.as_str()),
        }
        self.store.set(StorageKey::Role.as_str(), &response.role);
        self.store.set(StorageKey::UserName.as_str(), &response.username);
        self.store.set(StorageKey::UserId.as_str(), &response.user_id);

        let role = Role::from(response.role.as_str());
        tracing::info!("Session established for {} ({})", response.username, role);

        Navigation::Redirect(Route::landing_for(&role))
    }

    /// Snapshot of the signed-in session, `None` when not authenticated
    pub fn session_info(&self) -> Option<SessionInfo> {
        let role = self.authenticated_role()?;
        Some(SessionInfo {
            role,
            user_name: self.store.get(StorageKey::UserName.as_str()),
            user_id: self.user_id(),
        })
    }
}
