use std::time::{Duration, Instant};

/// Trailing-edge debouncer as an explicit state object: each trigger
/// pushes the deadline out, and the action runs once the burst has been
/// quiet for the whole window. Time comes from the caller.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True exactly once per settled burst.
    pub fn fire(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.deadline
            && now >= deadline
        {
            self.deadline = None;
            return true;
        }
        false
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}
