//! Repository for the `planets` table.

use holocron_core::types::DbId;

use crate::models::planet::{CreatePlanet, Planet};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, terrain, climate, population, orbital_period, \
                       rotation_period, diameter, description, image_url, \
                       created_at, updated_at";

/// CRUD operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a new planet, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!(
            "INSERT INTO planets (name, terrain, climate, population, orbital_period,
                                  rotation_period, diameter, description, image_url)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(&input.terrain)
            .bind(input.climate)
            .bind(&input.population)
            .bind(input.orbital_period)
            .bind(input.rotation_period)
            .bind(input.diameter)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a planet by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = ?");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all planets in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    /// Overwrite every column of a planet from `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &CreatePlanet,
    ) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!(
            "UPDATE planets SET
                name = ?, terrain = ?, climate = ?, population = ?,
                orbital_period = ?, rotation_period = ?, diameter = ?,
                description = ?, image_url = ?,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(&input.terrain)
            .bind(input.climate)
            .bind(&input.population)
            .bind(input.orbital_period)
            .bind(input.rotation_period)
            .bind(input.diameter)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a planet by ID. Returns `true` if a row was removed.
    ///
    /// Characters still pointing at the planet keep their `planet_id`;
    /// their homeworld simply resolves to null afterwards.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM planets WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
