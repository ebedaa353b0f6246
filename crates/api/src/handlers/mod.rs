pub mod categories;
pub mod movies;
