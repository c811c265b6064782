//! # hbnb-domain
//!
//! Pure domain model for the hbnb rental listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the six **records**: amenities, states, cities, users, places,
//!   reviews
//! - Define the **record traits** the generic resource handler is written
//!   against (identity, creation contract, update allow-list, parent link)
//! - Parse and validate request **payloads**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod kind;
pub mod payload;
pub mod record;
pub mod time;

pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod user;
