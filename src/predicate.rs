use std::fmt;

use async_trait::async_trait;

use crate::errors::BoxError;

/// Boolean authorization decision over the host pipeline's request context.
///
/// The host resolves `R` (query and path parameters, injected user objects)
/// before the predicate runs; the guard only ever sees the resolved boolean.
/// Synchronous checks are plain `Fn(&R) -> bool` closures. Suspending checks
/// implement the trait directly and may await inside `check`.
#[async_trait]
pub trait Predicate<R>: Send + Sync {
    /// Produces the authorization decision for `request`.
    ///
    /// An `Err` is an upstream failure (e.g. a missing user), not a denial.
    /// It passes through the guard untouched.
    async fn check(&self, request: &R) -> Result<bool, BoxError>;
}

#[async_trait]
impl<R, F> Predicate<R> for F
where
    R: Sync,
    F: Fn(&R) -> bool + Send + Sync,
{
    async fn check(&self, request: &R) -> Result<bool, BoxError> {
        Ok(self(request))
    }
}

/// Type-erased predicate, for routes that hold mixed predicates in one
/// guard list.
pub struct BoxPredicate<R>(Box<dyn Predicate<R>>);

impl<R> BoxPredicate<R> {
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<R> + 'static,
    {
        BoxPredicate(Box::new(predicate))
    }
}

#[async_trait]
impl<R> Predicate<R> for BoxPredicate<R>
where
    R: Sync,
{
    async fn check(&self, request: &R) -> Result<bool, BoxError> {
        self.0.check(request).await
    }
}

impl<R> fmt::Debug for BoxPredicate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxPredicate")
    }
}
