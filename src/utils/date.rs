use chrono::{NaiveDate, Utc};
use chrono_tz::America::New_York;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Current calendar date in America/New_York.
///
/// Archive snapshots are partitioned by the operator's day in that fixed
/// zone, independent of where the process happens to run.
pub fn today_eastern() -> NaiveDate {
    Utc::now().with_timezone(&New_York).date_naive()
}
