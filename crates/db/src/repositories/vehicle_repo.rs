//! Repository for the `vehicles` table.

use holocron_core::types::DbId;

use crate::models::vehicle::{CreateVehicle, VehicleDetail};
use crate::DbPool;

/// Detail column list: vehicle columns plus the pilot's name resolved
/// through a LEFT JOIN.
const DETAIL_COLUMNS: &str = "v.id, v.name, v.model, v.vehicle_class, v.manufacturer, \
                              v.length, v.passengers, v.description, v.image_url, \
                              v.pilot_id, c.name AS pilot_name, \
                              v.created_at, v.updated_at";

const DETAIL_FROM: &str = "FROM vehicles v LEFT JOIN characters c ON c.id = v.pilot_id";

/// CRUD operations for vehicles, always returning the joined detail
/// shape the API serializes.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row with its pilot
    /// name resolved.
    pub async fn create(
        pool: &DbPool,
        input: &CreateVehicle,
    ) -> Result<VehicleDetail, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO vehicles (name, model, vehicle_class, manufacturer, length,
                                   passengers, description, image_url, pilot_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.model)
        .bind(&input.vehicle_class)
        .bind(&input.manufacturer)
        .bind(&input.length)
        .bind(input.passengers)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.pilot_id)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a vehicle by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<VehicleDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} WHERE v.id = ?");
        sqlx::query_as::<_, VehicleDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all vehicles in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<VehicleDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} ORDER BY v.id");
        sqlx::query_as::<_, VehicleDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every column of a vehicle from `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &CreateVehicle,
    ) -> Result<Option<VehicleDetail>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE vehicles SET
                name = ?, model = ?, vehicle_class = ?, manufacturer = ?,
                length = ?, passengers = ?, description = ?,
                image_url = ?, pilot_id = ?,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.model)
        .bind(&input.vehicle_class)
        .bind(&input.manufacturer)
        .bind(&input.length)
        .bind(input.passengers)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.pilot_id)
        .bind(id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    /// Hard-delete a vehicle by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
