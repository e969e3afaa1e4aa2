//! Repository layer: one struct of static async CRUD methods per table.
//!
//! Handlers receive the pool through `AppState` and pass it down here;
//! no repository holds a connection of its own.

mod character_repo;
mod favorite_repo;
mod planet_repo;
mod user_repo;
mod vehicle_repo;

pub use character_repo::CharacterRepo;
pub use favorite_repo::FavoriteRepo;
pub use planet_repo::PlanetRepo;
pub use user_repo::UserRepo;
pub use vehicle_repo::VehicleRepo;
