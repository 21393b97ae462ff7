//! # Virtual-Clock Scheduler
//!
//! `setTimeout`/`setInterval` semantics without wall-clock time.
//!
//! ## Design
//!
//! - Tasks are ordered by `(due_at, insertion order)`
//! - Popping a task moves the clock to its due time, so work scheduled by
//!   the handler is relative to when the task actually fired
//! - Intervals re-arm under the same [`TimerId`] before the handler runs,
//!   so a handler can cancel its own interval
//! - The caller drives the loop; the scheduler never calls back into it

use crate::error::SchedulerError;

/// Handle for cancelling a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Scheduled<T> {
    id: TimerId,
    due_at: u64,
    order: u64,
    interval_ms: Option<u64>,
    task: T,
}

/// Public view of a queued task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    /// Timer handle.
    pub id: TimerId,
    /// Virtual time the task fires at.
    pub due_at: u64,
    /// Period for repeating timers.
    pub interval_ms: Option<u64>,
}

/// A task popped from the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    /// Timer that fired.
    pub id: TimerId,
    /// The task payload.
    pub task: T,
}

/// Timer queue over task payloads of type `T`.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    queue: Vec<Scheduled<T>>,
    now_ms: u64,
    next_id: u64,
    next_order: u64,
    step_limit: usize,
}

impl<T: Clone> Scheduler<T> {
    /// Maximum tasks a single advance may run before it is considered runaway.
    pub const DEFAULT_STEP_LIMIT: usize = 100_000;

    /// Creates an empty scheduler at t=0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            now_ms: 0,
            next_id: 1,
            next_order: 0,
            step_limit: Self::DEFAULT_STEP_LIMIT,
        }
    }

    /// Overrides the runaway guard.
    #[must_use]
    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = step_limit.max(1);
        self
    }

    /// Returns the current virtual time.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Returns the runaway guard.
    #[must_use]
    pub const fn step_limit(&self) -> usize {
        self.step_limit
    }

    /// Schedules a one-shot task `delay_ms` from now.
    pub fn set_timeout(&mut self, delay_ms: u64, task: T) -> TimerId {
        self.push(delay_ms, None, task)
    }

    /// Schedules a repeating task. A zero period is treated as 1 ms.
    pub fn set_interval(&mut self, period_ms: u64, task: T) -> TimerId {
        let period_ms = period_ms.max(1);
        self.push(period_ms, Some(period_ms), task)
    }

    /// Cancels a task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|t| t.id != id);
        self.queue.len() != before
    }

    /// Returns true if the timer is still queued.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.queue.iter().any(|t| t.id == id)
    }

    /// Returns the number of queued tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the queued tasks sorted by firing order.
    #[must_use]
    pub fn pending(&self) -> Vec<PendingTimer> {
        let mut timers: Vec<_> = self.queue.iter().collect();
        timers.sort_by_key(|t| (t.due_at, t.order));
        timers
            .into_iter()
            .map(|t| PendingTimer {
                id: t.id,
                due_at: t.due_at,
                interval_ms: t.interval_ms,
            })
            .collect()
    }

    /// Returns true if a task is due at or before `horizon_ms`.
    #[must_use]
    pub fn has_due(&self, horizon_ms: u64) -> bool {
        self.queue.iter().any(|t| t.due_at <= horizon_ms)
    }

    /// Pops the next task due at or before `horizon_ms`, moving the clock to
    /// its due time. Intervals are re-armed before returning.
    pub fn pop_due(&mut self, horizon_ms: u64) -> Option<Fired<T>> {
        let idx = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_at <= horizon_ms)
            .min_by_key(|(_, t)| (t.due_at, t.order))
            .map(|(idx, _)| idx)?;

        let mut entry = self.queue.remove(idx);
        self.now_ms = self.now_ms.max(entry.due_at);

        let fired = Fired {
            id: entry.id,
            task: entry.task.clone(),
        };
        if let Some(period) = entry.interval_ms {
            entry.due_at += period;
            entry.order = self.bump_order();
            self.queue.push(entry);
        }
        tracing::trace!(timer = fired.id.0, now_ms = self.now_ms, "timer fired");
        Some(fired)
    }

    /// Moves the clock forward to `ms` once every due task has been drained.
    pub fn settle(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }

    /// Builds the runaway error for the current state.
    #[must_use]
    pub fn step_limit_error(&self) -> SchedulerError {
        SchedulerError::StepLimitExceeded {
            limit: self.step_limit,
            now_ms: self.now_ms,
            pending: self.queue.len(),
        }
    }

    fn push(&mut self, delay_ms: u64, interval_ms: Option<u64>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let order = self.bump_order();
        self.queue.push(Scheduled {
            id,
            due_at: self.now_ms.saturating_add(delay_ms),
            order,
            interval_ms,
            task,
        });
        id
    }

    fn bump_order(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(s: &mut Scheduler<&'static str>, horizon: u64) -> Vec<(u64, &'static str)> {
        let mut out = Vec::new();
        while let Some(fired) = s.pop_due(horizon) {
            out.push((s.now_ms(), fired.task));
        }
        s.settle(horizon);
        out
    }

    #[test]
    fn test_timeouts_fire_in_due_order() {
        let mut s = Scheduler::new();
        s.set_timeout(30, "late");
        s.set_timeout(10, "early");
        s.set_timeout(10, "early-second");

        assert_eq!(
            drain(&mut s, 100),
            vec![(10, "early"), (10, "early-second"), (30, "late")]
        );
        assert_eq!(s.now_ms(), 100);
        assert!(s.is_empty());
    }

    #[test]
    fn test_interval_rearms_until_cancelled() {
        let mut s = Scheduler::new();
        let id = s.set_interval(5000, "tick");

        assert_eq!(drain(&mut s, 12_000), vec![(5000, "tick"), (10_000, "tick")]);
        assert!(s.is_pending(id));
        assert_eq!(s.pending()[0].due_at, 15_000);

        assert!(s.cancel(id));
        assert!(drain(&mut s, 20_000).is_empty());
    }

    #[test]
    fn test_task_scheduled_while_firing_is_relative_to_fire_time() {
        let mut s = Scheduler::new();
        s.set_timeout(20, "step");

        let fired = s.pop_due(1000).unwrap();
        assert_eq!(fired.task, "step");
        s.set_timeout(20, "step");

        assert_eq!(s.pending()[0].due_at, 40);
    }

    #[test]
    fn test_nothing_fires_before_due() {
        let mut s = Scheduler::new();
        s.set_timeout(1000, "grace");
        assert!(!s.has_due(999));
        assert!(s.pop_due(999).is_none());
        assert!(s.has_due(1000));
        assert!(s.pop_due(1000).is_some());
        assert!(!s.has_due(u64::MAX));
    }
}
