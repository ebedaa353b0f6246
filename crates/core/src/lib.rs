//! Domain types and rules shared by the persistence and HTTP layers.

pub mod covers;
pub mod error;
pub mod movies;
pub mod types;
