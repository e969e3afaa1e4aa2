//! Repository for the `favorites` table, including the per-user
//! aggregation the favorites endpoint serves.

use holocron_core::types::DbId;

use crate::models::favorite::{CreateFavorite, Favorite, FavoriteKind, UserFavorites};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, character_id, planet_id, vehicle_id, created_at, updated_at";

/// Write and aggregation operations for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a new favorites row for `user_id`, returning the created
    /// row. Referenced ids are stored verbatim; no existence check and
    /// no deduplication.
    pub async fn create(
        pool: &DbPool,
        user_id: DbId,
        input: &CreateFavorite,
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (user_id, character_id, planet_id, vehicle_id)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(input.character_id)
            .bind(input.planet_id)
            .bind(input.vehicle_id)
            .fetch_one(pool)
            .await
    }

    /// List a user's favorites rows in insertion order.
    pub async fn list_by_user(pool: &DbPool, user_id: DbId) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE user_id = ? ORDER BY id");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Collect the display names of one user's favorite characters,
    /// planets, and vehicles, each list in favorites-row insertion
    /// order. A row with several references set contributes to several
    /// lists; references whose entity was deleted contribute nothing
    /// (inner join).
    pub async fn aggregate_for_user(
        pool: &DbPool,
        user_id: DbId,
    ) -> Result<UserFavorites, sqlx::Error> {
        let favorite_characters = sqlx::query_scalar::<_, String>(
            "SELECT c.name FROM favorites f
             JOIN characters c ON c.id = f.character_id
             WHERE f.user_id = ?
             ORDER BY f.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        let favorite_planets = sqlx::query_scalar::<_, String>(
            "SELECT p.name FROM favorites f
             JOIN planets p ON p.id = f.planet_id
             WHERE f.user_id = ?
             ORDER BY f.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        let favorite_vehicles = sqlx::query_scalar::<_, String>(
            "SELECT v.name FROM favorites f
             JOIN vehicles v ON v.id = f.vehicle_id
             WHERE f.user_id = ?
             ORDER BY f.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(UserFavorites {
            favorite_characters,
            favorite_planets,
            favorite_vehicles,
        })
    }

    /// Delete the earliest favorites row of `user_id` whose column for
    /// `kind` equals `target_id`. Returns `true` if a row was removed.
    pub async fn delete_by_kind(
        pool: &DbPool,
        user_id: DbId,
        kind: FavoriteKind,
        target_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let column = kind.column();
        let query = format!(
            "DELETE FROM favorites WHERE id = (
                SELECT id FROM favorites
                WHERE user_id = ? AND {column} = ?
                ORDER BY id LIMIT 1
             )"
        );
        let result = sqlx::query(&query)
            .bind(user_id)
            .bind(target_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
