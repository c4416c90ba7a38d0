//! The countdown clock that stamps and ages cache entries.
//!
//! The counter starts at `limit` and drops by one per [`age`] call. A stamp
//! taken "now" equals the counter, so the relative age of a stamp is
//! `stamp - counter` and grows by one per tick. When the counter would reach
//! zero it snaps back to `limit`; owners of stamps add the returned amount
//! to every stamp they hold so that ages are preserved.
//!
//! [`age`]: TimeReferenceManager::age

use hexdrift_core::{Stamped, Timestamp};
use tracing::debug;

use crate::error::StoreError;
use crate::frame::RebasingFrame;

/// Countdown logical clock with an expiration horizon.
#[derive(Clone, Debug)]
pub struct TimeReferenceManager {
    frame: RebasingFrame<Timestamp>,
    expire: Timestamp,
}

impl TimeReferenceManager {
    /// A clock counting down from `limit`, expiring stamps older than `expire`.
    pub fn new(limit: Timestamp, expire: Timestamp) -> Result<Self, StoreError> {
        if limit < 1 {
            return Err(StoreError::InvalidTimeLimit { value: limit });
        }
        if expire < 2 {
            return Err(StoreError::InvalidExpire { value: expire });
        }
        Ok(Self {
            frame: RebasingFrame::new(limit, limit as u64),
            expire,
        })
    }

    /// Current counter value; a stamp taken now carries this value.
    pub fn counter(&self) -> Timestamp {
        self.frame.current()
    }

    /// Value the counter rebases to.
    pub fn limit(&self) -> Timestamp {
        self.frame.base()
    }

    /// Expiration horizon, in ticks.
    pub fn expire(&self) -> Timestamp {
        self.expire
    }

    /// Advance one tick.
    ///
    /// Returns `Some(limit)` when the clock rebased; the caller must add it
    /// to every stamp it owns.
    pub fn age(&mut self) -> Option<Timestamp> {
        let shift = self.frame.advance(-1, |_| true).map(|d| -d);
        if let Some(shift) = shift {
            debug!(shift, "time reference rebased");
        }
        shift
    }

    /// Relative age of an absolute timestamp.
    pub fn to_relative(&self, stamp: Timestamp) -> Timestamp {
        self.frame.to_relative(stamp)
    }

    /// Absolute timestamp for a relative age.
    pub fn to_absolute(&self, age: Timestamp) -> Timestamp {
        self.frame.to_absolute(age)
    }

    /// Relative age of a stamped value.
    pub fn age_of<T>(&self, stamped: &Stamped<T>) -> Timestamp {
        self.to_relative(stamped.stamp)
    }

    /// The same value re-expressed with its stamp as a relative age.
    pub fn stamped_to_relative<T>(&self, stamped: Stamped<T>) -> Stamped<T> {
        let stamp = self.to_relative(stamped.stamp);
        stamped.restamped(stamp)
    }

    /// The same value re-expressed with its relative age as an absolute stamp.
    pub fn stamped_to_absolute<T>(&self, stamped: Stamped<T>) -> Stamped<T> {
        let stamp = self.to_absolute(stamped.stamp);
        stamped.restamped(stamp)
    }

    /// Stamp `value` with the current time.
    pub fn stamp_now<T>(&self, value: T) -> Stamped<T> {
        Stamped::new(self.counter(), value)
    }

    /// Stamp `value` as if it were `age` ticks old.
    pub fn stamp_at<T>(&self, value: T, age: Timestamp) -> Stamped<T> {
        Stamped::new(self.to_absolute(age), value)
    }

    /// Whether a stamp has reached the expiration horizon.
    pub fn is_stamp_expired(&self, stamp: Timestamp) -> bool {
        stamp >= self.expire + self.counter()
    }

    /// Whether `stamped` has expired. A missing value counts as expired.
    pub fn is_expired<T>(&self, stamped: Option<&Stamped<T>>) -> bool {
        stamped.is_none_or(|s| self.is_stamp_expired(s.stamp))
    }

    /// Return the counter to `limit`.
    pub fn reset(&mut self) {
        self.frame.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_parameters() {
        assert_eq!(
            TimeReferenceManager::new(0, 10).unwrap_err(),
            StoreError::InvalidTimeLimit { value: 0 }
        );
        assert_eq!(
            TimeReferenceManager::new(10, 1).unwrap_err(),
            StoreError::InvalidExpire { value: 1 }
        );
    }

    #[test]
    fn counts_down_and_rebases_at_zero() {
        let mut t = TimeReferenceManager::new(3, 10).unwrap();
        assert_eq!(t.counter(), 3);
        assert_eq!(t.age(), None);
        assert_eq!(t.age(), None);
        assert_eq!(t.counter(), 1);
        assert_eq!(t.age(), Some(3));
        assert_eq!(t.counter(), 3);
    }

    #[test]
    fn ages_survive_a_rebase() {
        let mut t = TimeReferenceManager::new(4, 100).unwrap();
        let mut s = t.stamp_now('x');
        for tick in 1..=10 {
            if let Some(shift) = t.age() {
                s.stamp += shift;
            }
            assert_eq!(t.age_of(&s), tick);
        }
    }

    #[test]
    fn stamp_at_is_relative_to_now() {
        let mut t = TimeReferenceManager::new(50, 10).unwrap();
        t.age();
        let s = t.stamp_at((), 7);
        assert_eq!(t.age_of(&s), 7);
        assert_eq!(t.stamped_to_relative(s).stamp, 7);
        assert_eq!(t.stamped_to_absolute(t.stamped_to_relative(s)), s);
    }

    #[test]
    fn expires_at_the_horizon() {
        let mut t = TimeReferenceManager::new(1000, 3).unwrap();
        let s = t.stamp_now(());
        assert!(!t.is_expired(Some(&s)));
        t.age();
        t.age();
        assert!(!t.is_expired(Some(&s)));
        t.age();
        assert!(t.is_expired(Some(&s)));
        assert!(t.is_expired::<()>(None));
    }
}
