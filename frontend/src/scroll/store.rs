use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use super::chrome::{chrome_visibility, scroll_progress, ChromeInputs, ChromeVisibility, Viewport};
use super::motion::{NavigationGuard, ScrollTracker};
use super::section::{resolve_active, SectionBounds, SectionId};
use crate::config;

/// One reading of the window taken by the page-wide scroll/resize listener.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub now: f64,
    pub viewport: Viewport,
    pub sections: Vec<SectionBounds>,
}

pub enum ScrollAction {
    /// A scroll event.
    Scrolled(ScrollSample),
    /// A resize or layout change; does not count as travel.
    Measured(ScrollSample),
    NavigationStarted { target: SectionId, now: f64 },
    NavigationFinished { target: SectionId },
    HeroRatio(f64),
}

/// The single scroll publisher every consumer subscribes to through
/// `use_scroll_store`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollStore {
    pub tracker: ScrollTracker,
    pub viewport: Viewport,
    pub sections: Vec<SectionBounds>,
    pub active: SectionId,
    pub hero_ratio: f64,
    pub guard: NavigationGuard,
    /// Target of the latest navigation that has not finished yet.
    pub navigating_to: Option<SectionId>,
}

impl ScrollStore {
    pub fn scroll_y(&self) -> f64 {
        self.tracker.scroll_y
    }

    pub fn chrome(&self) -> ChromeVisibility {
        chrome_visibility(&ChromeInputs {
            scroll_y: self.tracker.scroll_y,
            last_step: self.tracker.last_step,
            viewport: self.viewport,
            hero_ratio: self.hero_ratio,
        })
    }

    pub fn progress(&self) -> f64 {
        scroll_progress(self.tracker.scroll_y, self.viewport)
    }

    fn relocate(&mut self, now: f64) {
        if self.guard.is_navigating(now) {
            debug!("navigation in progress, keeping {}", self.active);
            return;
        }
        self.active = resolve_active(
            &self.sections,
            self.tracker.scroll_y,
            config::ACTIVE_SECTION_PROBE,
            config::TOP_OF_PAGE,
            self.active,
        );
    }
}

impl Reducible for ScrollStore {
    type Action = ScrollAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ScrollAction::Scrolled(sample) => {
                next.tracker.record(sample.scroll_y, sample.now);
                next.guard.set_programmatic_until(next.tracker.programmatic_until());
                next.viewport = sample.viewport;
                next.sections = sample.sections;
                next.relocate(sample.now);
            }
            ScrollAction::Measured(sample) => {
                next.tracker.scroll_y = sample.scroll_y;
                next.viewport = sample.viewport;
                next.sections = sample.sections;
                next.relocate(sample.now);
            }
            ScrollAction::NavigationStarted { target, now } => {
                next.guard.arm(now);
                next.tracker.mark_programmatic(now);
                next.active = target;
                next.navigating_to = Some(target);
            }
            // a superseded navigation may still complete its frame loop
            ScrollAction::NavigationFinished { target } if next.navigating_to == Some(target) => {
                next.active = target;
                next.navigating_to = None;
            }
            ScrollAction::NavigationFinished { target } => {
                debug!("ignoring finish of superseded navigation to {}", target);
            }
            ScrollAction::HeroRatio(ratio) => {
                next.hero_ratio = ratio;
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub type ScrollContext = UseReducerHandle<ScrollStore>;

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(SectionId::Home, 0.0, 800.0),
            SectionBounds::new(SectionId::Services, 800.0, 600.0),
            SectionBounds::new(SectionId::Gallery, 1400.0, 700.0),
        ]
    }

    fn scrolled(scroll_y: f64, now: f64) -> ScrollAction {
        ScrollAction::Scrolled(ScrollSample {
            scroll_y,
            now,
            viewport: Viewport { width: 1440.0, height: 800.0, document_height: 2100.0 },
            sections: layout(),
        })
    }

    #[test]
    fn scrolling_selects_the_probed_section() {
        let store = Rc::new(ScrollStore::default());
        let store = store.reduce(scrolled(850.0, 0.0));
        assert_eq!(store.active, SectionId::Services);
        let store = store.reduce(scrolled(0.0, 500.0));
        assert_eq!(store.active, SectionId::Home);
    }

    #[test]
    fn navigation_suppresses_recomputation_for_its_window() {
        let store = Rc::new(ScrollStore::default()).reduce(scrolled(0.0, 0.0));
        let store = store.reduce(ScrollAction::NavigationStarted { target: SectionId::Gallery, now: 1000.0 });
        assert_eq!(store.active, SectionId::Gallery);

        // passing through services on the way down
        let store = store.reduce(scrolled(850.0, 1200.0));
        assert_eq!(store.active, SectionId::Gallery);
        let store = store.reduce(scrolled(900.0, 1799.0));
        assert_eq!(store.active, SectionId::Gallery);

        let store = store.reduce(scrolled(900.0, 1800.0));
        assert_eq!(store.active, SectionId::Services);
    }

    #[test]
    fn navigation_start_marks_motion_as_programmatic() {
        let store = Rc::new(ScrollStore::default())
            .reduce(ScrollAction::NavigationStarted { target: SectionId::Team, now: 50.0 });
        assert!(store.guard.suppresses_delay(100.0));
        assert!(store.tracker.is_programmatic(100.0));
    }

    #[test]
    fn resize_updates_layout_without_direction() {
        let store = Rc::new(ScrollStore::default()).reduce(ScrollAction::Measured(ScrollSample {
            scroll_y: 1500.0,
            now: 0.0,
            viewport: Viewport { width: 390.0, height: 800.0, document_height: 2100.0 },
            sections: layout(),
        }));
        assert_eq!(store.active, SectionId::Gallery);
        assert_eq!(store.tracker.direction, None);
        assert!(store.viewport.is_mobile());
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let store = Rc::new(ScrollStore::default()).reduce(ScrollAction::HeroRatio(0.5));
        let again = store.clone().reduce(ScrollAction::HeroRatio(0.5));
        assert!(Rc::ptr_eq(&store, &again));
    }

    #[test]
    fn chrome_reads_from_the_shared_state() {
        let store = Rc::new(ScrollStore::default()).reduce(scrolled(300.0, 0.0));
        assert!(store.chrome().show_scroll_top);
        assert!(!store.chrome().show_quick_action);
    }

    #[test]
    fn superseded_navigation_cannot_claim_the_highlight() {
        let store = Rc::new(ScrollStore::default())
            .reduce(ScrollAction::NavigationStarted { target: SectionId::Gallery, now: 0.0 })
            .reduce(ScrollAction::NavigationStarted { target: SectionId::Booking, now: 100.0 })
            .reduce(ScrollAction::NavigationFinished { target: SectionId::Gallery });
        assert_eq!(store.active, SectionId::Booking);
        assert_eq!(store.navigating_to, Some(SectionId::Booking));

        let store = store.reduce(ScrollAction::NavigationFinished { target: SectionId::Booking });
        assert_eq!(store.active, SectionId::Booking);
        assert_eq!(store.navigating_to, None);
    }

    #[test]
    fn scroll_events_during_navigation_keep_the_publisher_state_stable() {
        let store = Rc::new(ScrollStore::default())
            .reduce(ScrollAction::NavigationStarted { target: SectionId::Gallery, now: 0.0 });
        let guard = store.guard.clone();
        let store = store.reduce(scrolled(400.0, 16.0)).reduce(scrolled(420.0, 32.0));
        assert_eq!(store.guard, guard);
        assert!(guard.is_navigating(32.0));
    }
}
