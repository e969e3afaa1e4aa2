//! Vehicle entity model and DTOs.

use holocron_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A vehicle row from the `vehicles` table.
#[derive(Debug, Clone, FromRow)]
pub struct Vehicle {
    pub id: DbId,
    pub name: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    /// Kept as text: source data uses values like "34.37" and "unknown".
    pub length: String,
    pub passengers: i64,
    pub description: String,
    pub image_url: Option<String>,
    pub pilot_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Vehicle with its pilot's name resolved via LEFT JOIN.
///
/// `pilot_id` stays the numeric foreign key; the resolved display name
/// lives in `pilot_name` (`None` when unset or dangling).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VehicleDetail {
    pub id: DbId,
    pub name: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub length: String,
    pub passengers: i64,
    pub description: String,
    pub image_url: Option<String>,
    pub pilot_id: Option<DbId>,
    pub pilot_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a vehicle. PUT takes the same payload: updates
/// overwrite every column.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVehicle {
    pub name: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub length: String,
    pub passengers: i64,
    pub description: String,
    pub image_url: Option<String>,
    pub pilot_id: Option<DbId>,
}
