//! Kit template models and DTOs.
//!
//! A kit template is a named, reusable bundle of inventory items with
//! quantities, used as a checklist when provisioning a project.

use gearbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `kit_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KitTemplate {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A template line joined with the item name.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KitTemplateLine {
    pub id: DbId,
    pub item_id: DbId,
    pub item_name: String,
    pub quantity: i32,
}

/// A template with its item lines, as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KitTemplateWithItems {
    #[serde(flatten)]
    pub template: KitTemplate,
    pub items: Vec<KitTemplateLine>,
}

/// One item line in a create/update request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitItemInput {
    pub item_id: DbId,
    pub quantity: i32,
}

/// Input body for kit-template create and update. The item list fully
/// replaces any existing lines; the write is transactional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitTemplateInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<KitItemInput>,
}
