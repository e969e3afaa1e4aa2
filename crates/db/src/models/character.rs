//! Character entity model and DTOs.

use holocron_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Character gender, stored as CHECK-constrained TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
    #[serde(rename = "n/a")]
    #[sqlx(rename = "n/a")]
    NotApplicable,
}

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub gender: Gender,
    pub birth_year: String,
    pub height: i64,
    pub hair_color: String,
    pub eye_color: String,
    pub description: String,
    pub image_url: Option<String>,
    pub planet_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Character with its homeworld name resolved via LEFT JOIN.
///
/// `homeworld` is `None` when `planet_id` is unset or dangling (the
/// planet was deleted; there is no cascade).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CharacterDetail {
    pub id: DbId,
    pub name: String,
    pub gender: Gender,
    pub birth_year: String,
    pub height: i64,
    pub hair_color: String,
    pub eye_color: String,
    pub description: String,
    pub image_url: Option<String>,
    pub planet_id: Option<DbId>,
    pub homeworld: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a character. PUT takes the same payload: updates
/// overwrite every column.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub gender: Gender,
    pub birth_year: String,
    pub height: i64,
    pub hair_color: String,
    pub eye_color: String,
    pub description: String,
    pub image_url: Option<String>,
    pub planet_id: Option<DbId>,
}
