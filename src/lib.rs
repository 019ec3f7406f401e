#![deny(rust_2018_idioms, warnings)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::similar_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

//! Generic permission checks for request pipelines.
//!
//! A [`Permissions`] registry manufactures [`Guard`]s, each wrapping a single
//! boolean [`Predicate`]. The host pipeline resolves the predicate against its
//! own request context; the guard turns a `false` outcome into a [`Rejection`]
//! carrying a configurable status code and message.
//!
//! ```
//! use permit_me::{permission, StatusCode};
//!
//! let permissions = permission();
//! permissions.set_default_message(StatusCode::IM_A_TEAPOT, "Only tea may be brewed");
//!
//! let guard = permissions
//!     .guard(|_: &()| false)
//!     .with_status_code(StatusCode::IM_A_TEAPOT);
//!
//! let rejection = guard.check(false).unwrap_err();
//! assert_eq!(rejection.status_code(), StatusCode::IM_A_TEAPOT);
//! assert_eq!(rejection.message(), "Only tea may be brewed");
//! ```

mod errors;
mod guard;
mod permissions;
mod predicate;
mod rejection;

pub use errors::{BoxError, Error, Result};
pub use guard::Guard;
pub use permissions::{permission, Permissions};
pub use predicate::{BoxPredicate, Predicate};
pub use rejection::{Detail, Rejection};

pub use http::StatusCode;
