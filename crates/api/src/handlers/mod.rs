//! HTTP handlers, one module per resource.

pub mod auth;
pub mod bookings;
pub mod clients;
pub mod contacts;
pub mod items;
pub mod kit_templates;
pub mod lookups;
pub mod project_roles;
pub mod projects;
pub mod team;
pub mod users;
