use std::collections::HashMap;
use std::sync::Arc;

use http::StatusCode;
use parking_lot::RwLock;

use crate::guard::Guard;

/// Registry of default rejection messages, keyed by status code.
///
/// Created once per application, typically at wiring time. Cloning the
/// registry clones a handle to the same message table, and guards keep such a
/// handle: lookup happens at rejection time, so `set_default_message` calls
/// made after a guard was created are still reflected in its rejections.
///
/// The table sits behind a lock, so mutating it while traffic is in flight
/// is defined, if unusual. The expected pattern is to configure messages
/// during application setup.
#[derive(Debug, Clone)]
pub struct Permissions {
    default_messages: Arc<RwLock<HashMap<StatusCode, String>>>,
}

impl Permissions {
    /// New registry seeded with the built-in defaults:
    /// 403 "Forbidden" and 404 "Not Found".
    pub fn new() -> Self {
        let mut default_messages = HashMap::new();
        default_messages.insert(StatusCode::FORBIDDEN, "Forbidden".to_string());
        default_messages.insert(StatusCode::NOT_FOUND, "Not Found".to_string());

        Self {
            default_messages: Arc::new(RwLock::new(default_messages)),
        }
    }

    /// Sets (or overwrites) the default rejection message for `status_code`.
    ///
    /// Any status code is accepted, including ones no guard currently uses.
    /// Later writes to the same code win.
    pub fn set_default_message(&self, status_code: StatusCode, message: impl Into<String>) {
        self.default_messages
            .write()
            .insert(status_code, message.into());
    }

    pub(crate) fn default_message(&self, status_code: StatusCode) -> Option<String> {
        self.default_messages.read().get(&status_code).cloned()
    }

    /// Binds `predicate` into a [`Guard`] rejecting with status 403 and no
    /// explicit message. Use the `with_*` methods on the returned guard to
    /// change either before wiring it into a route.
    ///
    /// The predicate's signature is not validated here; the host pipeline
    /// resolves and invokes it, the guard only inspects its boolean result.
    pub fn guard<P>(&self, predicate: P) -> Guard<P> {
        Guard::new(self.clone(), predicate)
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a fresh permission registry.
pub fn permission() -> Permissions {
    Permissions::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_defaults_are_seeded() {
        let permissions = permission();

        assert_eq!(
            permissions.default_message(StatusCode::FORBIDDEN),
            Some("Forbidden".to_string())
        );
        assert_eq!(
            permissions.default_message(StatusCode::NOT_FOUND),
            Some("Not Found".to_string())
        );
        assert_eq!(permissions.default_message(StatusCode::IM_A_TEAPOT), None);
    }

    #[test]
    fn later_writes_overwrite_earlier_ones() {
        let permissions = Permissions::new();

        permissions.set_default_message(StatusCode::FORBIDDEN, "first");
        permissions.set_default_message(StatusCode::FORBIDDEN, "second");

        assert_eq!(
            permissions.default_message(StatusCode::FORBIDDEN),
            Some("second".to_string())
        );
    }

    #[test]
    fn clones_share_the_message_table() {
        let permissions = Permissions::new();
        let clone = permissions.clone();

        clone.set_default_message(StatusCode::IM_A_TEAPOT, "Only tea may be brewed");

        assert_eq!(
            permissions.default_message(StatusCode::IM_A_TEAPOT),
            Some("Only tea may be brewed".to_string())
        );
    }
}
