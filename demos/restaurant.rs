//! Restaurant demo: only cooks may cook, and users may only view their own
//! details. Viewing hides whether the requested user exists at all, so the
//! guard rejects with 404 instead of 403.
//!
//! Run with: cargo run --example restaurant

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use permit_me::{permission, BoxError, Error, Guard, Predicate, Rejection};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Role {
    Waiter,
    Cook,
}

#[derive(Debug, Clone)]
struct User {
    user_id: u32,
    role: Role,
}

struct Request {
    params: HashMap<String, String>,
}

impl Request {
    fn new(params: &[(&str, &str)]) -> Self {
        Request {
            params: params
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
        }
    }

    fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

fn users() -> HashMap<u32, User> {
    let mut users = HashMap::new();
    users.insert(
        1,
        User {
            user_id: 1,
            role: Role::Waiter,
        },
    );
    users.insert(
        2,
        User {
            user_id: 2,
            role: Role::Cook,
        },
    );
    users
}

/// Resolves the `user_id` query parameter to a known user. Unknown users
/// fail with a 401 before any permission check runs.
async fn current_user(request: &Request) -> Result<User, BoxError> {
    // pretend to wait for a database query to finish
    tokio::time::sleep(Duration::from_millis(10)).await;

    request
        .param("user_id")
        .and_then(|id| id.parse().ok())
        .and_then(|id| users().get(&id).cloned())
        .ok_or_else(|| {
            Box::new(Rejection::new(StatusCode::UNAUTHORIZED, "Unauthorized")) as BoxError
        })
}

/// Only cooks may cook.
struct MayCook;

#[async_trait]
impl Predicate<Request> for MayCook {
    async fn check(&self, request: &Request) -> Result<bool, BoxError> {
        let user = current_user(request).await?;

        // pretend to wait for a database query to finish
        tokio::time::sleep(Duration::from_millis(10)).await;

        Ok(user.role == Role::Cook)
    }
}

/// A user may only view their own details.
struct MayViewUser;

#[async_trait]
impl Predicate<Request> for MayViewUser {
    async fn check(&self, request: &Request) -> Result<bool, BoxError> {
        let user = current_user(request).await?;

        let viewed: Option<u32> = request
            .param("viewed_user_id")
            .and_then(|id| id.parse().ok());

        Ok(viewed == Some(user.user_id))
    }
}

async fn show<P>(name: &str, guard: &Guard<P>, request: &Request)
where
    P: Predicate<Request>,
{
    match guard.evaluate(request).await {
        Ok(()) => println!("{}: allowed", name),
        Err(Error::Rejected(rejection)) => println!(
            "{}: {} with detail {:?}",
            name,
            rejection.status_code(),
            rejection.message()
        ),
        Err(Error::Predicate(source)) => println!("{}: lookup failed with {}", name, source),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let permissions = permission();
    permissions.set_default_message(StatusCode::FORBIDDEN, "You are not allowed to do this");

    let cook = permissions.guard(MayCook);
    let view = permissions
        .guard(MayViewUser)
        .with_status_code(StatusCode::NOT_FOUND)
        .with_message("No such user");

    show("cook as a cook", &cook, &Request::new(&[("user_id", "2")])).await;
    show("cook as a waiter", &cook, &Request::new(&[("user_id", "1")])).await;
    show(
        "view own details",
        &view,
        &Request::new(&[("user_id", "1"), ("viewed_user_id", "1")]),
    )
    .await;
    show(
        "view someone else's details",
        &view,
        &Request::new(&[("user_id", "2"), ("viewed_user_id", "1")]),
    )
    .await;
    show("unknown user", &cook, &Request::new(&[("user_id", "9")])).await;
}
