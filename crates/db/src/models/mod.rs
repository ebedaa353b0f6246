//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Create/update DTOs where the entity is writable from this module

pub mod category;
pub mod movie;
