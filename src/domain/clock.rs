//! Time sources for date validation.

use chrono::{DateTime, Utc};

/// Supplies the instant that "now" means during validation.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a chosen instant.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use record_services::domain::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2030, 1, 1, 9, 0, 0).unwrap();
/// assert_eq!(FixedClock(instant).now(), instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
