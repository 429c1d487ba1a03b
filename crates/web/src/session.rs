//! Browser session backed by `localStorage`.

use trolley::session::Session;

/// Reads the signed-in user's token from `localStorage`.
#[derive(Debug, Clone)]
pub(crate) struct LocalStorageSession {
    key: String,
}

impl LocalStorageSession {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Session for LocalStorageSession {
    fn token(&self) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()??
            .get_item(&self.key)
            .ok()?
    }
}
