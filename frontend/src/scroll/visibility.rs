//! Entrance-animation state for a single section.
//!
//! The machine only sees numbers (intersection ratios, directions, clock
//! readings); the `use_section_visibility` hook feeds it from the DOM and
//! schedules the delayed reveals it asks for.

use super::motion::Direction;

pub const OBSERVER_THRESHOLDS: [f64; 11] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

const BLUR_BELOW: f64 = 0.5;
const REENTER_ABOVE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VisibilityMode {
    /// Reveal once and stay revealed.
    #[default]
    Once,
    /// Blur when left upwards, reveal again when re-entered upwards.
    Retrigger,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityPhase {
    NotObserved,
    Pending,
    Visible,
    Blurred,
}

/// What the caller has to do after feeding an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Changed,
    /// Call [`VisibilityMachine::reveal`] after this many milliseconds.
    RevealAfter(u32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub is_intersecting: bool,
    pub direction: Direction,
    /// A nav click or a programmatic scroll is moving the page.
    pub suppress_delay: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityMachine {
    mode: VisibilityMode,
    delay_ms: u32,
    observing: bool,
    has_animated: bool,
    is_visible: bool,
    is_blurred: bool,
    reveal_pending: bool,
    previous_ratio: f64,
}

impl VisibilityMachine {
    pub fn new(mode: VisibilityMode, delay_ms: u32) -> Self {
        Self {
            mode,
            delay_ms,
            observing: false,
            has_animated: false,
            is_visible: false,
            is_blurred: false,
            reveal_pending: false,
            previous_ratio: 0.0,
        }
    }

    pub fn phase(&self) -> VisibilityPhase {
        if self.is_blurred {
            VisibilityPhase::Blurred
        } else if self.is_visible {
            VisibilityPhase::Visible
        } else if self.observing {
            VisibilityPhase::Pending
        } else {
            VisibilityPhase::NotObserved
        }
    }

    #[cfg(test)]
    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    #[cfg(test)]
    pub fn is_blurred(&self) -> bool {
        self.is_blurred
    }

    pub fn observe(&mut self) -> Transition {
        if self.observing {
            return Transition::Unchanged;
        }
        self.observing = true;
        Transition::Changed
    }

    /// The element was already on screen when it mounted.
    pub fn mount_in_view(&mut self) -> Transition {
        self.show_now()
    }

    /// The mount fallback timer expired.
    pub fn fallback(&mut self) -> Transition {
        self.show_now()
    }

    /// Complete a reveal requested through [`Transition::RevealAfter`].
    pub fn reveal(&mut self) -> Transition {
        if !self.reveal_pending {
            return Transition::Unchanged;
        }
        self.reveal_pending = false;
        self.is_visible = true;
        self.has_animated = true;
        Transition::Changed
    }

    pub fn on_intersection(&mut self, sample: IntersectionSample) -> Transition {
        let previous = self.previous_ratio;
        self.previous_ratio = sample.ratio;

        match self.mode {
            VisibilityMode::Once => {
                if sample.is_intersecting && !self.has_animated {
                    self.schedule_reveal(sample.suppress_delay)
                } else {
                    Transition::Unchanged
                }
            }
            VisibilityMode::Retrigger => self.retrigger(sample, previous),
        }
    }

    fn retrigger(&mut self, sample: IntersectionSample, previous: f64) -> Transition {
        let ratio = sample.ratio;
        match sample.direction {
            Direction::Up => {
                if ratio < previous && ratio < BLUR_BELOW && self.is_visible {
                    if self.is_blurred {
                        return Transition::Unchanged;
                    }
                    self.is_blurred = true;
                    Transition::Changed
                } else if ratio > previous && ratio > REENTER_ABOVE {
                    if self.is_blurred {
                        // replay the entrance from the hidden state
                        self.is_blurred = false;
                        self.is_visible = false;
                        self.schedule_reveal(sample.suppress_delay)
                    } else if !self.has_animated {
                        self.schedule_reveal(sample.suppress_delay)
                    } else {
                        Transition::Unchanged
                    }
                } else {
                    Transition::Unchanged
                }
            }
            Direction::Down => {
                let mut changed = false;
                if sample.is_intersecting {
                    if !self.is_visible {
                        self.is_visible = true;
                        self.has_animated = true;
                        self.reveal_pending = false;
                        changed = true;
                    }
                    if self.is_blurred {
                        self.is_blurred = false;
                        changed = true;
                    }
                }
                if ratio < previous && ratio < REENTER_ABOVE && self.is_blurred {
                    self.is_blurred = false;
                    changed = true;
                }
                if changed {
                    Transition::Changed
                } else {
                    Transition::Unchanged
                }
            }
        }
    }

    fn schedule_reveal(&mut self, suppress_delay: bool) -> Transition {
        let delay = if suppress_delay { 0 } else { self.delay_ms };
        self.reveal_pending = true;
        if delay == 0 {
            self.reveal()
        } else {
            Transition::RevealAfter(delay)
        }
    }

    fn show_now(&mut self) -> Transition {
        if self.has_animated {
            return Transition::Unchanged;
        }
        self.reveal_pending = false;
        self.is_visible = true;
        self.has_animated = true;
        Transition::Changed
    }
}

/// Whether a bounding rect is close enough to the viewport to count as
/// already visible at mount.
pub fn rect_in_view(
    top: f64,
    bottom: f64,
    left: f64,
    right: f64,
    viewport_width: f64,
    viewport_height: f64,
    slack: f64,
) -> bool {
    top < viewport_height + slack && bottom > -slack && left < viewport_width && right > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ratio: f64, direction: Direction) -> IntersectionSample {
        IntersectionSample {
            ratio,
            is_intersecting: ratio > 0.0,
            direction,
            suppress_delay: false,
        }
    }

    #[test]
    fn observing_moves_to_pending() {
        let mut machine = VisibilityMachine::new(VisibilityMode::Once, 0);
        assert_eq!(machine.phase(), VisibilityPhase::NotObserved);
        assert_eq!(machine.observe(), Transition::Changed);
        assert_eq!(machine.phase(), VisibilityPhase::Pending);
        assert_eq!(machine.observe(), Transition::Unchanged);
    }

    #[test]
    fn once_mode_never_replays() {
        let mut machine = VisibilityMachine::new(VisibilityMode::Once, 0);
        machine.observe();
        assert_eq!(machine.on_intersection(sample(0.4, Direction::Down)), Transition::Changed);
        assert!(machine.has_animated());

        for ratio in [0.0, 0.3, 0.8, 0.0, 1.0] {
            assert_eq!(machine.on_intersection(sample(ratio, Direction::Down)), Transition::Unchanged);
            assert_eq!(machine.on_intersection(sample(ratio, Direction::Up)), Transition::Unchanged);
        }
        assert!(machine.has_animated());
        assert_eq!(machine.phase(), VisibilityPhase::Visible);
        assert_eq!(machine.fallback(), Transition::Unchanged);
    }

    #[test]
    fn upward_exit_blurs_below_half_and_reentry_replays() {
        let mut machine = VisibilityMachine::new(VisibilityMode::Retrigger, 0);
        machine.observe();

        assert_eq!(machine.on_intersection(sample(1.0, Direction::Up)), Transition::Changed);
        assert_eq!(machine.phase(), VisibilityPhase::Visible);

        assert_eq!(machine.on_intersection(sample(0.6, Direction::Up)), Transition::Unchanged);
        assert!(!machine.is_blurred());

        assert_eq!(machine.on_intersection(sample(0.3, Direction::Up)), Transition::Changed);
        assert!(machine.is_blurred());
        assert_eq!(machine.phase(), VisibilityPhase::Blurred);

        assert_eq!(machine.on_intersection(sample(0.4, Direction::Up)), Transition::Changed);
        assert!(!machine.is_blurred());
        assert_eq!(machine.phase(), VisibilityPhase::Visible);
    }

    #[test]
    fn replay_honours_configured_delay() {
        let mut machine = VisibilityMachine::new(VisibilityMode::Retrigger, 250);
        machine.observe();
        machine.mount_in_view();
        machine.on_intersection(sample(0.9, Direction::Up));
        machine.on_intersection(sample(0.2, Direction::Up));
        assert!(machine.is_blurred());

        assert_eq!(machine.on_intersection(sample(0.5, Direction::Up)), Transition::RevealAfter(250));
        assert_eq!(machine.phase(), VisibilityPhase::Pending);
        assert_eq!(machine.reveal(), Transition::Changed);
        assert_eq!(machine.phase(), VisibilityPhase::Visible);
        assert_eq!(machine.reveal(), Transition::Unchanged);
    }

    #[test]
    fn programmatic_scroll_skips_the_delay() {
        let mut machine = VisibilityMachine::new(VisibilityMode::Once, 400);
        machine.observe();
        let mut nav = sample(0.3, Direction::Down);
        nav.suppress_delay = true;
        assert_eq!(machine.on_intersection(nav), Transition::Changed);
        assert_eq!(machine.phase(), VisibilityPhase::Visible);
    }

    #[test]
    fn once_mode_waits_for_delay() {
        let mut machine = VisibilityMachine::new(VisibilityMode::Once, 400);
        machine.observe();
        assert_eq!(machine.on_intersection(sample(0.3, Direction::Down)), Transition::RevealAfter(400));
        assert_eq!(machine.phase(), VisibilityPhase::Pending);
        machine.reveal();
        assert_eq!(machine.phase(), VisibilityPhase::Visible);
    }

    #[test]
    fn downward_pass_clears_blur() {
        let mut machine = VisibilityMachine::new(VisibilityMode::Retrigger, 0);
        machine.observe();
        machine.mount_in_view();
        machine.on_intersection(sample(0.8, Direction::Up));
        machine.on_intersection(sample(0.2, Direction::Up));
        assert!(machine.is_blurred());
        assert_eq!(machine.on_intersection(sample(0.3, Direction::Down)), Transition::Changed);
        assert!(!machine.is_blurred());
    }

    #[test]
    fn fallback_reveals_a_silent_section() {
        let mut machine = VisibilityMachine::new(VisibilityMode::Retrigger, 0);
        machine.observe();
        assert_eq!(machine.fallback(), Transition::Changed);
        assert_eq!(machine.phase(), VisibilityPhase::Visible);
        assert!(machine.has_animated());
    }

    #[test]
    fn mount_check_uses_slack_around_viewport() {
        assert!(rect_in_view(850.0, 1200.0, 0.0, 400.0, 400.0, 800.0, 100.0));
        assert!(!rect_in_view(950.0, 1200.0, 0.0, 400.0, 400.0, 800.0, 100.0));
        assert!(!rect_in_view(-500.0, -120.0, 0.0, 400.0, 400.0, 800.0, 100.0));
        assert!(!rect_in_view(10.0, 200.0, 500.0, 900.0, 400.0, 800.0, 100.0));
    }
}
