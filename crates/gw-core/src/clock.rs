//! Wall-clock capability.
//!
//! Pricing depends on the local hour (peak vs. off-peak) and stamps every
//! record with the current epoch time.  Both reads go through [`Clock`] so the
//! calculator stays a pure function of its inputs plus one injected value:
//!
//! - [`SystemClock`] reads the host clock in the host's local timezone.
//! - [`FixedClock`] always returns the same instant; tests use it to pin the
//!   hour and the timestamp.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Timelike};

/// UTC+8, the offset the compiled-in bank and currency data belong to.
const DEFAULT_FIXED_OFFSET_SECS: i32 = 8 * 3_600;

/// Source of "now".
pub trait Clock {
    /// The current instant, carrying its local UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Local hour of day, `0..=23`.
    #[inline]
    fn local_hour(&self) -> u32 {
        self.now().hour()
    }

    /// Seconds since the Unix epoch.
    #[inline]
    fn unix_secs(&self) -> i64 {
        self.now().timestamp()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

// ── SystemClock ───────────────────────────────────────────────────────────────

/// The host clock, in the host's local timezone.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

// ── FixedClock ────────────────────────────────────────────────────────────────

/// A clock frozen at one instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        FixedClock(at)
    }

    /// 2024-01-01 at `hour`:00 in UTC+8.  `None` if `hour` is not a valid
    /// hour of day.
    pub fn at_local_hour(hour: u32) -> Option<Self> {
        let offset = FixedOffset::east_opt(DEFAULT_FIXED_OFFSET_SECS)?;
        offset
            .with_ymd_and_hms(2024, 1, 1, hour, 0, 0)
            .single()
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
