use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    /// Quadratic in-out.
    EaseInOut,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Parse the `data-easing` attribute an anchor may carry.
    pub fn from_name(name: &str) -> Option<Easing> {
        match name.trim() {
            "linear" => Some(Easing::Linear),
            "ease-in" => Some(Easing::EaseIn),
            "ease-out" => Some(Easing::EaseOut),
            "ease-in-out" => Some(Easing::EaseInOut),
            "ease-in-out-cubic" => Some(Easing::EaseInOutCubic),
            _ => None,
        }
    }

    /// Map linear progress `t` in `[0, 1]` onto the eased curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Cooperative cancellation for an in-flight scroll animation. The frame
/// loop checks it before every step.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Holds the token of the one scroll animation allowed to run on the page.
/// Every surface that starts an animation goes through the same slot.
#[derive(Clone, Debug, Default)]
pub struct AnimationSlot(Rc<RefCell<Option<CancelToken>>>);

impl AnimationSlot {
    /// Cancel whatever is running and hand out the token for its successor.
    pub fn begin(&self) -> CancelToken {
        let token = CancelToken::default();
        if let Some(previous) = self.0.borrow_mut().replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    pub fn cancel(&self) {
        if let Some(running) = self.0.borrow_mut().take() {
            running.cancel();
        }
    }
}

impl PartialEq for AnimationSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStep {
    pub y: f64,
    pub finished: bool,
}

/// Eased travel from `start` to `start + distance` over `duration` ms,
/// timed against the animation-frame clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    pub start: f64,
    pub distance: f64,
    pub duration: f64,
    pub started_at: f64,
    pub easing: Easing,
}

impl ScrollAnimation {
    /// Animation that brings an element at `element_top` (relative to the
    /// viewport) to `offset` pixels below the viewport top.
    pub fn to_element(
        current_y: f64,
        element_top: f64,
        offset: f64,
        duration: f64,
        started_at: f64,
        easing: Easing,
    ) -> Self {
        let target = element_top + current_y - offset;
        Self {
            start: current_y,
            distance: target - current_y,
            duration,
            started_at,
            easing,
        }
    }

    pub fn target(&self) -> f64 {
        self.start + self.distance
    }

    pub fn step(&self, now: f64) -> ScrollStep {
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
        };
        ScrollStep {
            y: self.start + self.distance * self.easing.apply(progress),
            finished: progress >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn cubic_curve_matches_reference_points() {
        let ease = Easing::EaseInOutCubic;
        assert!(close(ease.apply(0.0), 0.0));
        assert!(close(ease.apply(0.25), 0.0625));
        assert!(close(ease.apply(0.5), 0.5));
        assert!(close(ease.apply(0.75), 0.9375));
        assert!(close(ease.apply(1.0), 1.0));
    }

    #[test]
    fn every_curve_is_pinned_at_both_ends() {
        for ease in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseInOutCubic,
        ] {
            assert!(close(ease.apply(0.0), 0.0), "{:?}", ease);
            assert!(close(ease.apply(1.0), 1.0), "{:?}", ease);
            assert!(close(ease.apply(2.0), 1.0), "{:?}", ease);
        }
    }

    #[test]
    fn animation_targets_offset_below_navbar() {
        // element 900px below the viewport top while scrolled to 200
        let anim = ScrollAnimation::to_element(200.0, 900.0, 120.0, 500.0, 0.0, Easing::EaseInOutCubic);
        assert!(close(anim.target(), 980.0));
        assert!(close(anim.step(0.0).y, 200.0));
        assert!(close(anim.step(250.0).y, 590.0));
        let last = anim.step(500.0);
        assert!(last.finished);
        assert!(close(last.y, 980.0));
        assert!(!anim.step(499.0).finished);
    }

    #[test]
    fn zero_duration_jumps_straight_to_target() {
        let anim = ScrollAnimation::to_element(0.0, 400.0, 100.0, 0.0, 10.0, Easing::Linear);
        let step = anim.step(10.0);
        assert!(step.finished);
        assert!(close(step.y, 300.0));
    }

    #[test]
    fn cancel_is_visible_through_clones() {
        let token = CancelToken::default();
        let frame_copy = token.clone();
        assert!(!frame_copy.is_cancelled());
        token.cancel();
        assert!(frame_copy.is_cancelled());
    }

    #[test]
    fn starting_an_animation_cancels_the_one_in_flight() {
        let slot = AnimationSlot::default();
        let section_scroll = slot.begin();
        // a second surface shares the slot
        let scroll_to_top = slot.clone().begin();
        assert!(section_scroll.is_cancelled());
        assert!(!scroll_to_top.is_cancelled());

        slot.cancel();
        assert!(scroll_to_top.is_cancelled());
    }

    #[test]
    fn anchors_name_their_easing() {
        assert_eq!(Easing::from_name("linear"), Some(Easing::Linear));
        assert_eq!(Easing::from_name(" ease-in "), Some(Easing::EaseIn));
        assert_eq!(Easing::from_name("ease-in-out-cubic"), Some(Easing::EaseInOutCubic));
        assert_eq!(Easing::from_name("bounce"), None);
    }
}
