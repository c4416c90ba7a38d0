//! A bounded local reference frame that snaps back to its base.

use std::ops::{Add, Sub};

/// An accumulator that periodically rebases to a fixed base value.
///
/// Each [`advance`](Self::advance) adds a delta to the current value and
/// counts one step. Once the step count reaches its limit, or the tentative
/// value leaves the caller's range, the frame returns to `base` and reports
/// the displacement `tentative - base`. Holders of values expressed in the
/// old frame re-express them as `x - displacement`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RebasingFrame<T> {
    base: T,
    current: T,
    steps: u64,
    step_limit: u64,
}

impl<T> RebasingFrame<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T>,
{
    /// A frame sitting at `base` that rebases after `step_limit` steps.
    pub fn new(base: T, step_limit: u64) -> Self {
        Self {
            base,
            current: base,
            steps: 0,
            step_limit,
        }
    }

    /// Current value of the frame.
    pub fn current(&self) -> T {
        self.current
    }

    /// Value the frame returns to on rebase.
    pub fn base(&self) -> T {
        self.base
    }

    /// Steps taken since the last rebase.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Steps allowed before a forced rebase.
    pub fn step_limit(&self) -> u64 {
        self.step_limit
    }

    /// Take one step of `delta`.
    ///
    /// Returns `Some(displacement)` if the frame rebased, `None` if the
    /// tentative value was committed.
    pub fn advance(&mut self, delta: T, in_range: impl FnOnce(T) -> bool) -> Option<T> {
        self.steps += 1;
        let tentative = self.current + delta;
        if self.steps >= self.step_limit || !in_range(tentative) {
            self.current = self.base;
            self.steps = 0;
            Some(tentative - self.base)
        } else {
            self.current = tentative;
            None
        }
    }

    /// Return to the base without reporting a displacement.
    pub fn reset(&mut self) {
        self.current = self.base;
        self.steps = 0;
    }

    /// `x + current`.
    pub fn to_absolute(&self, x: T) -> T {
        x + self.current
    }

    /// `x - current`.
    pub fn to_relative(&self, x: T) -> T {
        x - self.current
    }
}
