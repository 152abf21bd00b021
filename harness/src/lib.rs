//! Integration-test harness for the locations and services API.
//!
//! A thin configuration and HTTP-client layer used by the tests in
//! `tests/`. The tests exercise a deployed API: authentication, search,
//! filtering, geo queries, TLS behavior, and response shape. Nothing in
//! this crate talks to the network until a test asks it to.
//!
//! Configuration comes from a JSON file (`configuration.json` by default,
//! `HARNESS_CONFIG` to override) and is constructed once per test run and
//! passed by reference; there is no ambient global.

pub mod client;
pub mod config;
pub mod error;
pub mod geo;

pub use client::{ApiClient, MAX_PAGE_SIZE};
pub use config::Config;
pub use error::Error;
