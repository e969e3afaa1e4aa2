//! Planet entity model and DTOs.

use holocron_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Planet climate, stored as CHECK-constrained TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Climate {
    Arid,
    Temperate,
    Tropical,
    Frozen,
    Murky,
}

/// A planet row from the `planets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    pub terrain: String,
    pub climate: Climate,
    /// Kept as text: source data mixes digits with values like "unknown".
    pub population: String,
    pub orbital_period: i64,
    pub rotation_period: i64,
    pub diameter: i64,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a planet. PUT takes the same payload: updates
/// overwrite every column, so all non-nullable fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanet {
    pub name: String,
    pub terrain: String,
    pub climate: Climate,
    pub population: String,
    pub orbital_period: i64,
    pub rotation_period: i64,
    pub diameter: i64,
    pub description: String,
    pub image_url: Option<String>,
}
