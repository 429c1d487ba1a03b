//! Session gating
//!
//! The cart is only fetched on startup for signed-in users.

use tracing::debug;

use crate::{
    api::{CartApi, CartApiError},
    controller::{CartController, CartView},
};

/// Authentication state of the current user.
pub trait Session {
    /// Bearer token for the current user, if signed in.
    fn token(&self) -> Option<String>;

    /// Whether the current user is signed in.
    fn is_logged_in(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }
}

/// Session backed by a token known up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSession {
    token: Option<String>,
}

impl StaticSession {
    /// Session for a signed-in user.
    pub fn signed_in(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Session for an anonymous user.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl Session for StaticSession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// Load the cart when the session is signed in; otherwise do nothing.
///
/// # Errors
///
/// Returns the API error from the initial load, after it has been shown.
pub async fn bootstrap<A, V, S>(
    controller: &CartController<A, V>,
    session: &S,
) -> Result<(), CartApiError>
where
    A: CartApi,
    V: CartView,
    S: Session + ?Sized,
{
    if !session.is_logged_in() {
        debug!("anonymous session, skipping initial cart load");

        return Ok(());
    }

    controller.load_cart().await
}
