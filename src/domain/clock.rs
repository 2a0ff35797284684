//! Domain clock
//!
//! Timestamps are truncated to microseconds so values read back from
//! PostgreSQL compare equal to the ones written.

use chrono::{DateTime, SubsecRound, Utc};

/// Current instant at microsecond precision.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
