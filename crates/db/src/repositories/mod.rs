//! Repository structs: one per table, static async methods over `&PgPool`.

mod booking_repo;
mod client_repo;
mod contact_repo;
mod item_repo;
mod kit_template_repo;
mod lookup_repo;
mod project_repo;
mod project_role_repo;
mod role_repo;
mod session_repo;
mod team_member_repo;
mod user_repo;

pub use booking_repo::BookingRepo;
pub use client_repo::ClientRepo;
pub use contact_repo::ContactRepo;
pub use item_repo::ItemRepo;
pub use kit_template_repo::KitTemplateRepo;
pub use lookup_repo::{CategoryRepo, ConditionRepo, LocationRepo};
pub use project_repo::ProjectRepo;
pub use project_role_repo::ProjectRoleRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use team_member_repo::{TeamMemberRepo, TeamWriteError};
pub use user_repo::UserRepo;
