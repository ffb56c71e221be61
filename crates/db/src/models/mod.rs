//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO for writes
//!
//! All wire-facing structs serialize to camelCase.

pub mod booking;
pub mod client;
pub mod contact;
pub mod item;
pub mod kit_template;
pub mod lookup;
pub mod project;
pub mod project_role;
pub mod session;
pub mod team_member;
pub mod user;
