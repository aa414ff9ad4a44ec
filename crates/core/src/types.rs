/// Person primary keys are UUIDs generated by the service, never by the database.
pub type PersonId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
