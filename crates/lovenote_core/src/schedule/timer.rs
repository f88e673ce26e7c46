//! Deadline-ordered timer queue.
//!
//! # Responsibility
//! - Hold pending one-shot tasks keyed by `(deadline, task id)`.
//! - Yield due tasks in deadline order when the host advances time.
//!
//! # Invariants
//! - Task ids are unique per queue and never reused.
//! - Tasks sharing a deadline fire in scheduling order.
//! - `cancel` and `pop_due` remove a task exactly once.

use crate::clock::EpochMillis;
use std::collections::{BTreeMap, HashMap};

/// Handle to one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Pending one-shot tasks ordered by deadline.
#[derive(Debug)]
pub struct TimerQueue<T> {
    pending: BTreeMap<(EpochMillis, TaskId), T>,
    deadlines: HashMap<TaskId, EpochMillis>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `payload` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: EpochMillis, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.insert((deadline, id), payload);
        self.deadlines.insert(id, deadline);
        id
    }

    /// Schedules `payload` to become due `delay_ms` after `now`.
    pub fn schedule_after(&mut self, now: EpochMillis, delay_ms: u64, payload: T) -> TaskId {
        let delay = i64::try_from(delay_ms).unwrap_or(i64::MAX);
        self.schedule(now.saturating_add(delay), payload)
    }

    /// Cancels a pending task.
    ///
    /// Returns `true` when the task was still pending. Cancelling a task that
    /// already fired or was cancelled is a no-op.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => self.pending.remove(&(deadline, id)).is_some(),
            None => false,
        }
    }

    /// Removes and returns the earliest task whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: EpochMillis) -> Option<(TaskId, T)> {
        let (&(deadline, id), _) = self.pending.first_key_value()?;
        if deadline > now {
            return None;
        }
        self.deadlines.remove(&id);
        self.pending
            .remove(&(deadline, id))
            .map(|payload| (id, payload))
    }

    /// Cancels every pending task and returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        self.deadlines.clear();
        cancelled
    }

    /// Returns the earliest pending deadline.
    pub fn next_deadline(&self) -> Option<EpochMillis> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Returns whether `id` is still pending.
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.deadlines.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::TimerQueue;

    #[test]
    fn pop_due_respects_deadline_then_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(200, "late");
        queue.schedule(100, "first");
        queue.schedule(100, "second");

        assert_eq!(queue.pop_due(99), None);
        assert_eq!(queue.pop_due(150).map(|(_, p)| p), Some("first"));
        assert_eq!(queue.pop_due(150).map(|(_, p)| p), Some("second"));
        assert_eq!(queue.pop_due(150), None);
        assert_eq!(queue.next_deadline(), Some(200));
        assert_eq!(queue.pop_due(200).map(|(_, p)| p), Some("late"));
        assert!(queue.is_empty());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(10, ());

        assert!(queue.is_pending(id));
        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert!(!queue.is_pending(id));
        assert_eq!(queue.pop_due(1_000), None);
    }

    #[test]
    fn fired_task_cannot_be_cancelled() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_after(0, 5, 'x');

        assert_eq!(queue.pop_due(5), Some((id, 'x')));
        assert!(!queue.cancel(id));
    }

    #[test]
    fn clear_drops_everything() {
        let mut queue = TimerQueue::new();
        queue.schedule(1, 1);
        queue.schedule(2, 2);

        assert_eq!(queue.clear(), 2);
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn schedule_after_saturates() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(i64::MAX - 1, u64::MAX, ());
        assert_eq!(queue.next_deadline(), Some(i64::MAX));
    }
}
