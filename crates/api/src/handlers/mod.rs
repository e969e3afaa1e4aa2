//! HTTP request handlers, one module per resource.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
