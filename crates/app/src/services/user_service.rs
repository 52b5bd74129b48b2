//! User service — the user directory behind a reachability check.

use hydroview_domain::error::BackendError;
use hydroview_domain::user::UserDirectory;

use crate::ports::BackendGateway;

/// Application service for the users page.
pub struct UserService<B> {
    gateway: B,
}

impl<B: BackendGateway> UserService<B> {
    /// Create a new service backed by the given gateway.
    pub fn new(gateway: B) -> Self {
        Self { gateway }
    }

    /// Fetch the user directory.
    ///
    /// Runs the short health probe first so an unreachable backend fails
    /// fast instead of waiting out the full request deadline.
    ///
    /// # Errors
    ///
    /// Returns the probe's [`BackendError`] when the backend is not
    /// reachable, or any failure from the users endpoint itself.
    pub async fn directory(&self) -> Result<UserDirectory, BackendError> {
        self.gateway.health().await?;
        self.gateway.users().await
    }
}
