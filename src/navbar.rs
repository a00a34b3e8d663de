use std::time::{Duration, Instant};

pub const REVEAL_DELAY: Duration = Duration::from_millis(400);

/// Scroll-linked navbar state: the bar ducks away when the reader heads
/// down the page past the first screen, and the back-to-top affordance
/// fades in after a short beat. The last-offset tracker lives here, not
/// in a module global, and time always comes from the caller.
#[derive(Debug, Clone)]
pub struct NavbarState {
    last_offset: f64,
    reveal_delay: Duration,
    armed_at: Option<Instant>,
    backtop_visible: bool,
}

/// What the view should reflect after a scroll sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOutcome {
    pub bar_hidden: bool,
    pub backtop_visible: bool,
}

impl NavbarState {
    pub fn new(reveal_delay: Duration) -> Self {
        Self {
            last_offset: 0.0,
            reveal_delay,
            armed_at: None,
            backtop_visible: false,
        }
    }

    /// Feed one scroll sample from the host loop.
    pub fn on_scroll(&mut self, now: Instant, offset: f64, viewport_height: f64) -> ScrollOutcome {
        let heading_down = offset > self.last_offset;
        let past_fold = offset > viewport_height;
        self.last_offset = offset;

        if past_fold {
            // armed once; a pending reveal keeps its original deadline
            if !self.backtop_visible && self.armed_at.is_none() {
                self.armed_at = Some(now + self.reveal_delay);
            }
        } else {
            self.armed_at = None;
            self.backtop_visible = false;
        }

        ScrollOutcome {
            bar_hidden: heading_down && past_fold,
            backtop_visible: self.backtop_visible,
        }
    }

    /// Promote a pending reveal whose delay has elapsed. True when the
    /// affordance just became visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.armed_at
            && now >= deadline
        {
            self.armed_at = None;
            self.backtop_visible = true;
            return true;
        }
        false
    }

    /// The affordance hides itself again once used.
    pub fn on_backtop_click(&mut self) {
        self.armed_at = None;
        self.backtop_visible = false;
    }

    pub fn backtop_visible(&self) -> bool {
        self.backtop_visible
    }
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new(REVEAL_DELAY)
    }
}
