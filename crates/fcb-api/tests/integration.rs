//! HTTP tests against a real PostgreSQL database.
//!
//! Set `TEST_DATABASE_URL` to point at a scratch database; migrations are
//! applied on first use. Tests create their own rows and only delete those.

mod common;
mod deck_tests;
mod router_tests;
