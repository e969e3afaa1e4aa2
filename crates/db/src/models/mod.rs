//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (PUT reuses it: updates are
//!   full overwrites, so the payload shape is identical)
//! - Where the API resolves a related display name, a `*Detail` struct
//!   produced by a LEFT JOIN in the repository

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
