//! Repository for the `characters` table.

use holocron_core::types::DbId;

use crate::models::character::{CharacterDetail, CreateCharacter};
use crate::DbPool;

/// Detail column list: character columns plus the homeworld name
/// resolved through a LEFT JOIN, so dangling `planet_id` values come
/// back as NULL instead of failing.
const DETAIL_COLUMNS: &str = "c.id, c.name, c.gender, c.birth_year, c.height, \
                              c.hair_color, c.eye_color, c.description, c.image_url, \
                              c.planet_id, p.name AS homeworld, \
                              c.created_at, c.updated_at";

const DETAIL_FROM: &str = "FROM characters c LEFT JOIN planets p ON p.id = c.planet_id";

/// CRUD operations for characters, always returning the joined detail
/// shape the API serializes.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row with its
    /// homeworld resolved.
    pub async fn create(
        pool: &DbPool,
        input: &CreateCharacter,
    ) -> Result<CharacterDetail, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO characters (name, gender, birth_year, height, hair_color,
                                     eye_color, description, image_url, planet_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.gender)
        .bind(&input.birth_year)
        .bind(input.height)
        .bind(&input.hair_color)
        .bind(&input.eye_color)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.planet_id)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<CharacterDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} WHERE c.id = ?");
        sqlx::query_as::<_, CharacterDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<CharacterDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} ORDER BY c.id");
        sqlx::query_as::<_, CharacterDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every column of a character from `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &CreateCharacter,
    ) -> Result<Option<CharacterDetail>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE characters SET
                name = ?, gender = ?, birth_year = ?, height = ?,
                hair_color = ?, eye_color = ?, description = ?,
                image_url = ?, planet_id = ?,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?",
        )
        .bind(&input.name)
        .bind(input.gender)
        .bind(&input.birth_year)
        .bind(input.height)
        .bind(&input.hair_color)
        .bind(&input.eye_color)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.planet_id)
        .bind(id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    /// Hard-delete a character by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
