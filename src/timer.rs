//! Repeating timers advanced by an explicit clock.
//!
//! The clock never runs on its own: the owner feeds it elapsed time and
//! pulls due firings one at a time, so every callback runs to completion
//! before the next one is produced.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Interval {
    handle: TimerHandle,
    period: Duration,
    due: Option<Duration>, // None once the next firing overflows the clock
}

#[derive(Debug, Default)]
pub struct IntervalClock {
    now: Duration,
    next_id: u64,
    intervals: Vec<Interval>,
}

impl IntervalClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers still scheduled.
    pub fn live_count(&self) -> usize {
        self.intervals.len()
    }

    /// Schedule a timer firing every `period`, first at `now + period`.
    /// `period` must be non-zero.
    pub fn set_interval(&mut self, period: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.intervals.push(Interval {
            handle,
            period,
            due: self.now.checked_add(period),
        });
        handle
    }

    pub fn clear_interval(&mut self, handle: TimerHandle) {
        self.intervals.retain(|i| i.handle != handle);
    }

    /// Pop the earliest firing due at or before `deadline`.
    ///
    /// Moves `now` up to the firing time and reschedules the timer one period
    /// later. Ties fire in scheduling order.
    pub fn poll(&mut self, deadline: Duration) -> Option<TimerHandle> {
        let interval = self
            .intervals
            .iter_mut()
            .filter_map(|i| i.due.filter(|due| *due <= deadline).map(|due| (due, i)))
            .min_by_key(|(due, i)| (*due, i.handle.0))
            .map(|(due, i)| {
                i.due = due.checked_add(i.period);
                (due, i.handle)
            })?;

        self.now = self.now.max(interval.0);
        Some(interval.1)
    }

    /// Move `now` forward to `deadline` once every due firing was polled.
    pub fn settle(&mut self, deadline: Duration) {
        if deadline > self.now {
            self.now = deadline;
        }
    }
}
