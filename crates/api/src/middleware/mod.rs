//! Request extractors for authentication and access scoping.

pub mod access;
pub mod auth;
