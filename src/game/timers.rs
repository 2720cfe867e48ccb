//! One-shot timers tagged with the puzzle generation they belong to
//!
//! Firing a timer from an older generation is a no-op for the caller, which
//! drops it; this keeps a reset mid-animation from being undone by stale callbacks.

/// What should happen when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Splash has faded out; show the board
    RevealBoard,
    /// Outer letters have faded out; reorder and fade them back in
    ShuffleMidpoint,
    /// Start fading out the feedback banner with this sequence number
    HideFeedback(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    pub due: f64,
    pub generation: u64,
    pub kind: TimerKind,
}

/// Pending timers ordered by due time
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<Timer>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire `delay` after `now`
    pub fn schedule(&mut self, now: f64, delay: f64, generation: u64, kind: TimerKind) {
        let timer = Timer {
            due: now + delay,
            generation,
            kind,
        };
        let idx = self.pending.partition_point(|t| t.due <= timer.due);
        self.pending.insert(idx, timer);
    }

    /// Remove and return every timer due at or before `now`, earliest first
    pub fn take_due(&mut self, now: f64) -> Vec<Timer> {
        let split = self.pending.partition_point(|t| t.due <= now);
        self.pending.drain(..split).collect()
    }

    /// Earliest pending due time, if any
    #[must_use]
    pub fn next_due(&self) -> Option<f64> {
        self.pending.first().map(|t| t.due)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(0.0, 1.0, 0, TimerKind::HideFeedback(1));
        timers.schedule(0.0, 0.3, 0, TimerKind::ShuffleMidpoint);
        timers.schedule(0.0, 0.4, 0, TimerKind::RevealBoard);

        assert_eq!(timers.next_due(), Some(0.3));
        assert!(timers.take_due(0.2).is_empty());

        let due: Vec<TimerKind> = timers.take_due(0.5).iter().map(|t| t.kind).collect();
        assert_eq!(due, vec![TimerKind::ShuffleMidpoint, TimerKind::RevealBoard]);
        assert_eq!(timers.len(), 1);

        let due = timers.take_due(1.0);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].kind, TimerKind::HideFeedback(1));
        assert!(timers.is_empty());
    }

    #[test]
    fn equal_due_times_keep_schedule_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(0.0, 0.5, 0, TimerKind::HideFeedback(1));
        timers.schedule(0.0, 0.5, 0, TimerKind::HideFeedback(2));
        let due: Vec<TimerKind> = timers.take_due(0.5).iter().map(|t| t.kind).collect();
        assert_eq!(
            due,
            vec![TimerKind::HideFeedback(1), TimerKind::HideFeedback(2)]
        );
    }

    #[test]
    fn keeps_generation() {
        let mut timers = TimerQueue::new();
        timers.schedule(1.0, 0.4, 7, TimerKind::RevealBoard);
        let due = timers.take_due(2.0);
        assert_eq!(due[0].generation, 7);
        assert!((due[0].due - 1.4).abs() < 1e-9);
    }
}
