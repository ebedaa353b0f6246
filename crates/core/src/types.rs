/// Generated database primary keys are PostgreSQL BIGSERIAL.
/// Movie identifiers are caller-supplied strings and use plain `String`.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
