//! # hbnb-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api/v1`
//!   (`/amenities`, `/states/{id}/cities`, `/places/{id}/reviews`, `/stats`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! Every collection is served by the same generic handlers in
//! [`api::resources`], instantiated once per record type.
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for the storage port and services) and `hbnb-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
