//! # hbnb-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage port** adapters must implement (driven/outbound):
//!   `Storage`: typed get/list/insert/update/delete plus counts
//! - Define **driving/inbound** use-case structs:
//!   - `ResourceService`: the generic list/get/create/update/delete flow
//!   - `StatsService`: per-collection record counts
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (`InMemoryStorage`)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `hbnb-domain` only (plus `tokio::sync` for locking).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod memory_storage;
pub mod ports;
pub mod services;
