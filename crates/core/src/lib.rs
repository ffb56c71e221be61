//! Domain logic shared by the database and API layers.
//!
//! This crate has zero internal dependencies so the scheduling logic can be
//! used from the API, repositories, and any future CLI tooling alike.

pub mod error;
pub mod overlap;
pub mod roles;
pub mod status;
pub mod types;
