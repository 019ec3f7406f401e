//! Default rejection messages: built-ins, configured overrides, and the
//! literal fallback for status codes with no default at all.
//!
//! Run with: cargo run --example messages

use http::StatusCode;
use permit_me::permission;

fn main() {
    let permissions = permission();

    let forbidden = permissions.guard(|_: &()| false);
    let teapot = permissions
        .guard(|_: &()| false)
        .with_status_code(StatusCode::IM_A_TEAPOT);

    if let Err(rejection) = forbidden.check(false) {
        println!("built-in default:      {}", rejection);
    }

    if let Err(rejection) = teapot.check(false) {
        // 418 has no default yet, so the literal fallback applies.
        println!("no default configured: {}", rejection);
    }

    permissions.set_default_message(StatusCode::IM_A_TEAPOT, "Only tea may be brewed");

    if let Err(rejection) = teapot.check(false) {
        // The same guard picks the new default up: the message table is
        // shared and consulted at rejection time.
        println!("configured default:    {}", rejection);
    }
}
