//! Well-known role name constants.
//!
//! These must match the seed data in `20260115000002_create_roles_table.sql`.
//! `admin` and `manager` see every project; `staff` only see projects they
//! hold a team assignment on.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_STAFF: &str = "staff";
