//! KST date helpers.
//!
//! Snapshot and history dates are calendar dates in Korea Standard Time
//! (UTC+9), while stored timestamps are UTC.

use chrono::{DateTime, Duration, NaiveDate, Utc};

const KST_OFFSET_HOURS: i64 = 9;

/// The KST calendar date of a UTC instant.
pub fn kst_date(at: DateTime<Utc>) -> NaiveDate {
    (at + Duration::hours(KST_OFFSET_HOURS)).date_naive()
}

/// Today's date in KST.
pub fn kst_today() -> NaiveDate {
    kst_date(Utc::now())
}
