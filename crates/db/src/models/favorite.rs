//! Favorites entity model, DTOs, and the per-user aggregation shape.

use holocron_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A favorites row from the `favorites` table.
///
/// One row may reference up to one character, one planet, and one
/// vehicle at the same time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub character_id: Option<DbId>,
    pub planet_id: Option<DbId>,
    pub vehicle_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /favorites/user/{id}`. Referent existence is not
/// checked and duplicate rows are allowed, matching the write model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFavorite {
    pub character_id: Option<DbId>,
    pub planet_id: Option<DbId>,
    pub vehicle_id: Option<DbId>,
}

/// Aggregated favorites for one user: three lists of display names in
/// favorites-row insertion order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserFavorites {
    pub favorite_characters: Vec<String>,
    pub favorite_planets: Vec<String>,
    pub favorite_vehicles: Vec<String>,
}

/// Which foreign key a favorite-delete request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    Character,
    Planet,
    Vehicle,
}

impl FavoriteKind {
    /// Parse the `{type}` path segment. Returns `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "character" => Some(Self::Character),
            "planet" => Some(Self::Planet),
            "vehicle" => Some(Self::Vehicle),
            _ => None,
        }
    }

    /// The `favorites` column holding this kind of reference.
    pub fn column(self) -> &'static str {
        match self {
            Self::Character => "character_id",
            Self::Planet => "planet_id",
            Self::Vehicle => "vehicle_id",
        }
    }
}
