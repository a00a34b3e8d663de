use std::time::Instant;

use crate::chronology::{self, ChronologyError, EraSpan, Marker};
use crate::config::SiteConfig;
use crate::debounce::Debouncer;
use crate::events::ViewEvent;
use crate::geom::{OffsetRect, Size};
use crate::navbar::NavbarState;

/// One measured chronology card: where it sits on the page and the year
/// it is anchored to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    pub rect: OffsetRect,
    pub year: i32,
}

/// Snapshot of the page geometry the controller works from. Rects are
/// page-absolute; the scroll offset converts them back to viewport
/// space where needed.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub cards: Vec<Card>,
    pub badge: OffsetRect,
    pub eras: Vec<EraSpan>,
    pub viewport: Size,
    pub scroll: f64,
}

/// Measurement adapter: whatever owns the live document implements this,
/// and the interpolation core never touches the document itself.
pub trait SceneSource {
    fn measure(&self) -> Scene;
}

/// Instructions back to the view. Only changes are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Year(i32),
    CardRevealed(usize, bool),
    BarHidden(bool),
    BacktopVisible(bool),
}

pub struct Controller {
    navbar: NavbarState,
    resize_debounce: Debouncer,
    year: Option<i32>,
    revealed: Vec<bool>,
    bar_hidden: bool,
    backtop_visible: bool,
}

impl Controller {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            navbar: NavbarState::new(config.navbar.reveal_delay()),
            resize_debounce: Debouncer::new(config.debounce.timeline()),
            year: None,
            revealed: Vec::new(),
            bar_hidden: false,
            backtop_visible: false,
        }
    }

    /// Routes one host event. `now` comes from the host loop so state
    /// transitions stay deterministic under test.
    pub fn handle(
        &mut self,
        event: ViewEvent,
        now: Instant,
        page: &impl SceneSource,
    ) -> Vec<Effect> {
        match event {
            ViewEvent::Scrolled { .. } => {
                let scene = page.measure();
                let mut effects = self.relayout(&scene);
                self.sample_navbar(now, &scene, &mut effects);
                effects
            }
            ViewEvent::Resized { .. } => {
                // let the geometry settle before remeasuring
                self.resize_debounce.trigger(now);
                Vec::new()
            }
            ViewEvent::BacktopClicked => {
                self.navbar.on_backtop_click();
                let mut effects = Vec::new();
                self.sync_backtop(&mut effects);
                effects
            }
            ViewEvent::Tick => {
                let mut effects = Vec::new();
                if self.resize_debounce.fire(now) {
                    effects = self.relayout(&page.measure());
                }
                if self.navbar.tick(now) {
                    self.sync_backtop(&mut effects);
                }
                effects
            }
        }
    }

    /// Recomputes card reveals and the year readout against a fresh
    /// scene. Markers are derived here on every pass; nothing geometric
    /// is cached across layout changes.
    fn relayout(&mut self, scene: &Scene) -> Vec<Effect> {
        let mut effects = Vec::new();

        self.revealed.resize(scene.cards.len(), false);
        for (i, card) in scene.cards.iter().enumerate() {
            let top = card.rect.top - scene.scroll;
            let bottom = card.rect.bottom - scene.scroll;
            let visible = chronology::card_in_view(top, bottom, scene.viewport.height);
            if self.revealed[i] != visible {
                self.revealed[i] = visible;
                effects.push(Effect::CardRevealed(i, visible));
            }
        }

        match Self::current_year(scene) {
            Ok(year) => {
                if self.year != Some(year) {
                    self.year = Some(year);
                    effects.push(Effect::Year(year));
                }
            }
            // a page without cards keeps whatever the readout last said
            Err(e) => log::debug!("year readout skipped: {}", e),
        }

        effects
    }

    fn current_year(scene: &Scene) -> Result<i32, ChronologyError> {
        let mut order: Vec<&Card> = scene.cards.iter().collect();
        order.sort_by(|a, b| a.rect.top.total_cmp(&b.rect.top));

        let Some(last) = order.last() else {
            return Err(ChronologyError::NoMarkers);
        };

        let markers: Vec<Marker> = order
            .iter()
            .map(|c| Marker::new(c.rect.top, c.year))
            .collect();
        let era = chronology::era_bounds(&scene.eras, &markers)?;

        chronology::interpolate_year(&markers, last.rect.bottom, era, scene.badge.center_y())
    }

    fn sample_navbar(&mut self, now: Instant, scene: &Scene, effects: &mut Vec<Effect>) {
        let outcome = self
            .navbar
            .on_scroll(now, scene.scroll, scene.viewport.height);

        if outcome.bar_hidden != self.bar_hidden {
            self.bar_hidden = outcome.bar_hidden;
            effects.push(Effect::BarHidden(self.bar_hidden));
        }
        if outcome.backtop_visible != self.backtop_visible {
            self.backtop_visible = outcome.backtop_visible;
            effects.push(Effect::BacktopVisible(self.backtop_visible));
        }
    }

    fn sync_backtop(&mut self, effects: &mut Vec<Effect>) {
        let visible = self.navbar.backtop_visible();
        if visible != self.backtop_visible {
            self.backtop_visible = visible;
            effects.push(Effect::BacktopVisible(visible));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Duration;

    /// A stand-in page: four cards down a tall document, a sticky badge
    /// parked mid-viewport, one era plaque spanning the whole run.
    struct FakePage {
        scroll: RefCell<f64>,
    }

    impl FakePage {
        fn new() -> Self {
            Self {
                scroll: RefCell::new(0.0),
            }
        }

        fn scroll_to(&self, offset: f64) {
            *self.scroll.borrow_mut() = offset;
        }
    }

    impl SceneSource for FakePage {
        fn measure(&self) -> Scene {
            let scroll = *self.scroll.borrow();
            let card = |top: f64, year: i32| Card {
                rect: OffsetRect::new(100.0, top, 500.0, top + 200.0),
                year,
            };

            Scene {
                cards: vec![
                    card(600.0, 1000),
                    card(1400.0, 1200),
                    card(2200.0, 1400),
                    card(3000.0, 1600),
                ],
                // sticky badge rides the viewport center
                badge: OffsetRect::new(20.0, scroll + 430.0, 80.0, scroll + 470.0),
                eras: vec![EraSpan {
                    start_year: 900,
                    end_year: 2000,
                }],
                viewport: Size::new(1280.0, 900.0),
                scroll,
            }
        }
    }

    fn controller() -> Controller {
        Controller::new(&SiteConfig::default())
    }

    #[test]
    fn initial_scroll_reports_year_and_reveals() {
        let page = FakePage::new();
        let mut c = controller();

        let effects = c.handle(ViewEvent::Scrolled { offset: 0.0 }, Instant::now(), &page);

        // badge center (450) sits above the first card: opening year
        assert!(effects.contains(&Effect::Year(900)));
        assert!(effects.contains(&Effect::CardRevealed(0, true)));
    }

    #[test]
    fn quiet_scroll_emits_nothing_twice() {
        let page = FakePage::new();
        let mut c = controller();
        let t = Instant::now();

        let first = c.handle(ViewEvent::Scrolled { offset: 0.0 }, t, &page);
        assert!(!first.is_empty());

        let second = c.handle(ViewEvent::Scrolled { offset: 0.0 }, t, &page);
        assert!(second.is_empty());
    }

    #[test]
    fn year_blends_between_cards() {
        let page = FakePage::new();
        let mut c = controller();

        // badge center lands at 1000, midway between card tops 600 and 1400
        page.scroll_to(550.0);
        let effects = c.handle(ViewEvent::Scrolled { offset: 550.0 }, Instant::now(), &page);
        assert!(effects.contains(&Effect::Year(1100)));
    }

    #[test]
    fn resize_waits_for_the_debounce_window() {
        let page = FakePage::new();
        let mut c = controller();
        let t = Instant::now();

        let effects = c.handle(
            ViewEvent::Resized {
                width: 1280.0,
                height: 900.0,
            },
            t,
            &page,
        );
        assert!(effects.is_empty());

        // too early, the window has not settled
        assert!(c.handle(ViewEvent::Tick, t + Duration::from_millis(50), &page).is_empty());

        let effects = c.handle(ViewEvent::Tick, t + Duration::from_millis(150), &page);
        assert!(effects.contains(&Effect::Year(900)));
    }

    #[test]
    fn backtop_appears_after_its_delay_and_click_hides_it() {
        let page = FakePage::new();
        let mut c = controller();
        let t = Instant::now();

        page.scroll_to(1000.0);
        c.handle(ViewEvent::Scrolled { offset: 1000.0 }, t, &page);

        let effects = c.handle(ViewEvent::Tick, t + Duration::from_millis(500), &page);
        assert!(effects.contains(&Effect::BacktopVisible(true)));

        let effects = c.handle(ViewEvent::BacktopClicked, t + Duration::from_millis(600), &page);
        assert!(effects.contains(&Effect::BacktopVisible(false)));
    }

    #[test]
    fn bar_ducks_when_heading_down_past_the_fold() {
        let page = FakePage::new();
        let mut c = controller();
        let t = Instant::now();

        c.handle(ViewEvent::Scrolled { offset: 0.0 }, t, &page);

        page.scroll_to(1000.0);
        let effects = c.handle(ViewEvent::Scrolled { offset: 1000.0 }, t, &page);
        assert!(effects.contains(&Effect::BarHidden(true)));

        page.scroll_to(950.0);
        let effects = c.handle(ViewEvent::Scrolled { offset: 950.0 }, t, &page);
        assert!(effects.contains(&Effect::BarHidden(false)));
    }
}
