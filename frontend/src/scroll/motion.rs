use std::cell::Cell;
use std::rc::Rc;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// `None` when the position did not change.
    pub fn between(previous: f64, current: f64) -> Option<Direction> {
        if current > previous {
            Some(Direction::Down)
        } else if current < previous {
            Some(Direction::Up)
        } else {
            None
        }
    }

    /// Intersection callbacks treat an unchanged position as upward travel,
    /// which lets content that is already on screen reveal on its first
    /// callback.
    pub fn for_intersection(previous: f64, current: f64) -> Direction {
        if current > previous {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// Position, direction and programmatic-scroll detection for the single
/// page-wide scroll listener.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    pub scroll_y: f64,
    /// Last non-zero direction of travel.
    pub direction: Option<Direction>,
    /// Direction of the most recent event, `None` when it did not move.
    pub last_step: Option<Direction>,
    programmatic: bool,
    burst_started_at: Option<f64>,
    last_event_at: Option<f64>,
}

impl ScrollTracker {
    pub fn at(scroll_y: f64) -> Self {
        Self { scroll_y, ..Self::default() }
    }

    /// Feed one scroll event. Two events closer than the burst window mark
    /// the scroll as programmatic until events stop for the programmatic
    /// window.
    pub fn record(&mut self, scroll_y: f64, now: f64) {
        let step = Direction::between(self.scroll_y, scroll_y);
        if step.is_some() {
            self.direction = step;
        }
        self.last_step = step;
        self.scroll_y = scroll_y;

        if !self.is_programmatic(now) {
            self.programmatic = false;
        }
        match self.burst_started_at {
            Some(start) if now - start < config::PROGRAMMATIC_BURST_MS => self.programmatic = true,
            _ => self.burst_started_at = Some(now),
        }
        self.last_event_at = Some(now);
    }

    /// Force the programmatic flag, as a navigator does when it starts.
    pub fn mark_programmatic(&mut self, now: f64) {
        self.programmatic = true;
        self.last_event_at = Some(now);
    }

    pub fn is_programmatic(&self, now: f64) -> bool {
        self.programmatic
            && self
                .last_event_at
                .map_or(false, |at| now - at < config::PROGRAMMATIC_WINDOW_MS)
    }

    /// When the programmatic flag lapses if no further events arrive.
    pub fn programmatic_until(&self) -> Option<f64> {
        if self.programmatic {
            self.last_event_at.map(|at| at + config::PROGRAMMATIC_WINDOW_MS)
        } else {
            None
        }
    }
}

/// Shared, clock-driven flags telling passive observers that the viewport
/// is being moved by code. Cloning shares the same state.
#[derive(Clone, Debug, Default)]
pub struct NavigationGuard {
    navigating_until: Rc<Cell<Option<f64>>>,
    programmatic_until: Rc<Cell<Option<f64>>>,
}

impl PartialEq for NavigationGuard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.navigating_until, &other.navigating_until)
    }
}

impl NavigationGuard {
    pub fn arm(&self, now: f64) {
        self.navigating_until.set(Some(now + config::NAVIGATION_GUARD_MS));
        self.programmatic_until.set(Some(now + config::PROGRAMMATIC_WINDOW_MS));
    }

    pub fn is_navigating(&self, now: f64) -> bool {
        self.navigating_until.get().map_or(false, |until| now < until)
    }

    pub fn set_programmatic_until(&self, until: Option<f64>) {
        self.programmatic_until.set(until);
    }

    pub fn is_programmatic(&self, now: f64) -> bool {
        self.programmatic_until.get().map_or(false, |until| now < until)
    }

    /// Entrance animations skip their delay while code is moving the page.
    pub fn suppresses_delay(&self, now: f64) -> bool {
        self.is_navigating(now) || self.is_programmatic(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_position_changes() {
        let mut tracker = ScrollTracker::default();
        tracker.record(120.0, 0.0);
        assert_eq!(tracker.direction, Some(Direction::Down));
        tracker.record(80.0, 100.0);
        assert_eq!(tracker.direction, Some(Direction::Up));
        tracker.record(80.0, 200.0);
        assert_eq!(tracker.direction, Some(Direction::Up));
        assert_eq!(tracker.last_step, None);
    }

    #[test]
    fn spaced_events_are_user_scrolling() {
        let mut tracker = ScrollTracker::default();
        tracker.record(10.0, 0.0);
        tracker.record(20.0, 100.0);
        tracker.record(30.0, 200.0);
        assert!(!tracker.is_programmatic(200.0));
    }

    #[test]
    fn rapid_burst_is_programmatic_until_quiet() {
        let mut tracker = ScrollTracker::default();
        tracker.record(10.0, 0.0);
        tracker.record(60.0, 16.0);
        assert!(tracker.is_programmatic(16.0));
        assert_eq!(tracker.programmatic_until(), Some(316.0));
        assert!(tracker.is_programmatic(315.0));
        assert!(!tracker.is_programmatic(316.0));
    }

    #[test]
    fn programmatic_flag_resets_after_quiet_period() {
        let mut tracker = ScrollTracker::default();
        tracker.record(10.0, 0.0);
        tracker.record(60.0, 16.0);
        tracker.record(70.0, 1000.0);
        assert!(!tracker.is_programmatic(1000.0));
    }

    #[test]
    fn intersection_direction_treats_rest_as_up() {
        assert_eq!(Direction::for_intersection(50.0, 50.0), Direction::Up);
        assert_eq!(Direction::for_intersection(50.0, 60.0), Direction::Down);
    }

    #[test]
    fn guard_opens_for_navigation_window() {
        let guard = NavigationGuard::default();
        assert!(!guard.is_navigating(0.0));
        guard.arm(1000.0);
        assert!(guard.is_navigating(1799.0));
        assert!(!guard.is_navigating(1800.0));
        assert!(guard.suppresses_delay(1200.0));
        assert!(guard.is_programmatic(1299.0));
        assert!(!guard.is_programmatic(1300.0));
    }

    #[test]
    fn guard_clones_share_state() {
        let guard = NavigationGuard::default();
        let observer_copy = guard.clone();
        guard.arm(0.0);
        assert!(observer_copy.is_navigating(10.0));
        assert_eq!(guard, observer_copy);
        assert_ne!(guard, NavigationGuard::default());
    }
}
