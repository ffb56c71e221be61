/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All row timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Schedule dates (project start/end, assignment ranges, bookings) are
/// compared at day granularity, so they carry no time-of-day component.
pub type ScheduleDate = chrono::NaiveDate;
