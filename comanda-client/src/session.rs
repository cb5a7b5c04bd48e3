//! Session and role gate
//!
//! Holds the authenticated identity for one device and answers the
//! capability question once at the boundary: "may this session reach
//! that view". Unauthenticated table sessions act as Customer. The
//! session is persisted locally and restored at startup, so a reload
//! keeps staff logged in without a server round trip.

use crate::storage::BlobStorage;
use shared::client::Backend;
use shared::models::{Role, User, View};
use shared::ServiceResult;
use std::sync::Arc;

const SESSION_KEY: &str = "session";

/// One device's authenticated session
pub struct Session {
    backend: Arc<dyn Backend>,
    storage: Arc<dyn BlobStorage>,
    user: Option<User>,
}

impl Session {
    /// Start a session, restoring a persisted identity if present
    pub fn restore(backend: Arc<dyn Backend>, storage: Arc<dyn BlobStorage>) -> Self {
        let user = match storage.load(SESSION_KEY) {
            None => None,
            Some(blob) => match serde_json::from_str::<User>(&blob) {
                Ok(user) => {
                    tracing::debug!(email = %user.email, "Session restored");
                    Some(user)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Corrupt session blob, starting logged out");
                    storage.remove(SESSION_KEY);
                    None
                }
            },
        };
        Self {
            backend,
            storage,
            user,
        }
    }

    /// Authenticate and persist the identity
    pub async fn login(&mut self, email: &str, password: &str) -> ServiceResult<User> {
        let user = self.backend.login(email, password).await?;
        match serde_json::to_string(&user) {
            Ok(blob) => self.storage.store(SESSION_KEY, &blob),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize session"),
        }
        tracing::info!(email = %user.email, role = ?user.role, "Logged in");
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Clear the identity and its persisted blob
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(email = %user.email, "Logged out");
        }
        self.storage.remove(SESSION_KEY);
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Effective role; unauthenticated sessions are Customer
    pub fn role(&self) -> Role {
        self.user.as_ref().map(|u| u.role).unwrap_or(Role::Customer)
    }

    /// Capability check, performed once at the view boundary
    pub fn can_access(&self, view: View) -> bool {
        self.role().can_access(view)
    }
}
