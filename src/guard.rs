use http::StatusCode;

use crate::errors::{Error, Result};
use crate::permissions::Permissions;
use crate::predicate::Predicate;
use crate::rejection::Rejection;

/// A predicate bound to a rejection status code and an optional explicit
/// message, inserted into a route's pre-execution check sequence.
///
/// Guards are created once at wiring time via [`Permissions::guard`] and
/// evaluated once per matching request. Status code and message are fixed at
/// construction; only the default-message table, consulted at rejection time,
/// can change afterwards.
#[derive(Debug)]
pub struct Guard<P> {
    permissions: Permissions,
    predicate: P,
    message: Option<String>,
    status_code: StatusCode,
}

impl<P> Guard<P> {
    pub(crate) fn new(permissions: Permissions, predicate: P) -> Self {
        Self {
            permissions,
            predicate,
            message: None,
            status_code: StatusCode::FORBIDDEN,
        }
    }

    /// Overrides the rejection message for this guard.
    ///
    /// An explicit message always wins over the registry defaults. That
    /// includes the empty string: unlike the registry fallback chain, "set
    /// but empty" is a valid literal message here.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Overrides the rejection status code. Guards reject with 403 unless
    /// told otherwise.
    pub fn with_status_code(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Checks an already-resolved predicate outcome.
    ///
    /// `true` is a no-op and request processing continues. `false` resolves
    /// the rejection message (explicit message, else the registry's current
    /// default for the status code, else the literal `"Error"`) and returns
    /// the [`Rejection`] the host must translate into a response.
    pub fn check(&self, permitted: bool) -> std::result::Result<(), Rejection> {
        if permitted {
            return Ok(());
        }

        let message = match &self.message {
            Some(message) => message.clone(),
            None => self
                .permissions
                .default_message(self.status_code)
                .unwrap_or_else(|| "Error".to_string()),
        };

        Err(Rejection::new(self.status_code, message))
    }

    /// Resolves the predicate against `request`, then checks the outcome.
    ///
    /// A denial becomes [`Error::Rejected`]. A failure inside the predicate
    /// becomes [`Error::Predicate`] with the source intact; nothing is
    /// swallowed or retried here.
    pub async fn evaluate<R>(&self, request: &R) -> Result<()>
    where
        P: Predicate<R>,
        R: Sync,
    {
        let permitted = self
            .predicate
            .check(request)
            .await
            .map_err(Error::Predicate)?;

        self.check(permitted).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use test_case::test_case;

    use crate::errors::BoxError;
    use crate::permissions::permission;

    #[test]
    fn permitted_outcome_is_a_no_op() {
        let permissions = permission();
        let guard = permissions.guard(|_: &()| true);

        assert_matches!(guard.check(true), Ok(()));
    }

    #[test_case(None, StatusCode::FORBIDDEN => "Forbidden".to_string(); "built in forbidden default")]
    #[test_case(None, StatusCode::NOT_FOUND => "Not Found".to_string(); "built in not found default")]
    #[test_case(None, StatusCode::PAYMENT_REQUIRED => "Error".to_string(); "literal fallback without default")]
    #[test_case(Some("This is not allowed"), StatusCode::FORBIDDEN => "This is not allowed".to_string(); "explicit message wins")]
    #[test_case(Some(""), StatusCode::FORBIDDEN => String::new(); "empty explicit message is literal")]
    fn message_resolution(message: Option<&str>, status_code: StatusCode) -> String {
        let permissions = permission();

        let mut guard = permissions
            .guard(|_: &()| false)
            .with_status_code(status_code);
        if let Some(message) = message {
            guard = guard.with_message(message);
        }

        let rejection = guard.check(false).unwrap_err();
        assert_eq!(rejection.status_code(), status_code);
        rejection.message().to_string()
    }

    #[test]
    fn defaults_set_after_guard_creation_are_picked_up() {
        let permissions = permission();
        let guard = permissions
            .guard(|_: &()| false)
            .with_status_code(StatusCode::IM_A_TEAPOT);

        permissions.set_default_message(StatusCode::IM_A_TEAPOT, "Only tea may be brewed");

        let rejection = guard.check(false).unwrap_err();
        assert_eq!(rejection.message(), "Only tea may be brewed");
    }

    #[tokio::test]
    async fn evaluate_feeds_the_resolved_boolean_to_check() {
        let permissions = permission();

        let allow = permissions.guard(|flag: &bool| *flag);
        assert_matches!(allow.evaluate(&true).await, Ok(()));

        assert_matches!(
            allow.evaluate(&false).await,
            Err(Error::Rejected(rejection)) => {
                assert_eq!(rejection.status_code(), StatusCode::FORBIDDEN);
                assert_eq!(rejection.message(), "Forbidden");
            }
        );
    }

    #[tokio::test]
    async fn predicate_failures_pass_through_unchanged() {
        struct Broken;

        #[async_trait::async_trait]
        impl Predicate<()> for Broken {
            async fn check(&self, _request: &()) -> std::result::Result<bool, BoxError> {
                Err(Box::new(Rejection::new(
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized",
                )))
            }
        }

        let permissions = permission();
        let guard = permissions.guard(Broken);

        assert_matches!(guard.evaluate(&()).await, Err(Error::Predicate(source)) => {
            let rejection = source.downcast::<Rejection>().unwrap();
            assert_eq!(rejection.status_code(), StatusCode::UNAUTHORIZED);
        });
    }

    proptest! {
        #[test]
        fn explicit_message_wins_for_any_status_code(
            code in 100_u16..1000,
            default_message in ".{0,24}",
            explicit in ".{0,24}",
        ) {
            let status_code = StatusCode::from_u16(code).unwrap();

            let permissions = permission();
            permissions.set_default_message(status_code, default_message);

            let guard = permissions
                .guard(|_: &()| false)
                .with_status_code(status_code)
                .with_message(explicit.clone());

            let rejection = guard.check(false).unwrap_err();
            prop_assert_eq!(rejection.status_code(), status_code);
            prop_assert_eq!(rejection.message(), explicit.as_str());
        }
    }
}
