//! Integration tests for the bunnynet client.
//!
//! These tests drive the public API end to end against a local
//! [`wiremock`] server standing in for `api.bunny.net`. No network access
//! or credentials are needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With request logging
//! RUST_LOG=bunnynet=debug cargo test --test integration -- --nocapture
//! ```

mod cancellation_tests;
mod common;
mod error_tests;
mod pagination_tests;
