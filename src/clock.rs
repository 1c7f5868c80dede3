//! Time source for line timestamps.
//!
//! Tests need reproducible output, so the clock is an injectable value rather than a
//! direct call to `Local::now()` inside the logger.

use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::sync::Arc;

/// Second-precision layout used for line timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone)]
pub struct Clock {
    now: Arc<dyn Fn() -> NaiveDateTime + Send + Sync>,
}

impl Clock {
    /// Local wall-clock time.
    #[must_use]
    pub fn system() -> Self {
        Self::from_fn(|| Local::now().naive_local())
    }

    /// Always reports `at`.
    #[must_use]
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self::from_fn(move || at)
    }

    #[must_use]
    pub fn from_fn(now: impl Fn() -> NaiveDateTime + Send + Sync + 'static) -> Self {
        Self { now: Arc::new(now) }
    }

    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        (self.now)()
    }

    /// Current time as `YYYY-MM-DD HH:MM:SS`; sub-second digits are dropped.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clock").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamp_truncates_to_seconds() {
        let at = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_milli_opt(12, 0, 0, 999)
            .unwrap();
        assert_eq!(Clock::fixed(at).timestamp(), "2023-01-01 12:00:00");
    }

    #[test]
    fn from_fn_is_called_on_every_read() {
        use std::sync::atomic::{AtomicU32, Ordering};

        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let clock = Clock::from_fn(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            NaiveDateTime::default()
        });

        let _ = clock.timestamp();
        let _ = clock.timestamp();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
