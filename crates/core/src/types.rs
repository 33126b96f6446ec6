/// All database primary keys are PostgreSQL SERIAL.
pub type DbId = i32;

/// Timestamps are stored as `TIMESTAMP` (no time zone) and serialized
/// as ISO-8601 without an offset, matching the historical API output.
pub type Timestamp = chrono::NaiveDateTime;
