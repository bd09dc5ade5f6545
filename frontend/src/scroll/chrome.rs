use super::motion::Direction;
use crate::config;

/// Window and document measurements taken alongside a scroll sample.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub document_height: f64,
}

impl Viewport {
    pub fn is_mobile(&self) -> bool {
        self.width < config::MOBILE_BREAKPOINT
    }

    pub fn scrollable(&self) -> f64 {
        (self.document_height - self.height).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeInputs {
    pub scroll_y: f64,
    pub last_step: Option<Direction>,
    pub viewport: Viewport,
    pub hero_ratio: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ChromeVisibility {
    pub show_scroll_top: bool,
    pub show_bottom_nav: bool,
    pub show_quick_action: bool,
}

pub fn chrome_visibility(inputs: &ChromeInputs) -> ChromeVisibility {
    let viewport = inputs.viewport;
    let mobile = viewport.is_mobile();
    ChromeVisibility {
        show_scroll_top: !mobile && inputs.scroll_y >= config::SCROLL_TOP_AFTER,
        show_bottom_nav: mobile && bottom_nav_visible(inputs),
        show_quick_action: mobile && quick_action_visible(inputs.scroll_y, viewport),
    }
}

fn bottom_nav_visible(inputs: &ChromeInputs) -> bool {
    if inputs.hero_ratio > config::HERO_HIDES_BOTTOM_NAV_ABOVE {
        return false;
    }
    let scrolling_down = inputs.last_step == Some(Direction::Down);
    !(scrolling_down && inputs.scroll_y > config::BOTTOM_NAV_HIDE_AFTER)
}

/// Scroll position at which the quick-action button appears.
pub fn quick_action_trigger(viewport: Viewport) -> f64 {
    (viewport.scrollable() * config::QUICK_ACTION_SCROLL_FRACTION).min(config::QUICK_ACTION_MAX_TRIGGER)
}

fn quick_action_visible(scroll_y: f64, viewport: Viewport) -> bool {
    let to_bottom = viewport.document_height - (scroll_y + viewport.height);
    scroll_y >= quick_action_trigger(viewport) && to_bottom >= config::QUICK_ACTION_FOOTER_CLEARANCE
}

/// Reading progress through the page, in percent.
pub fn scroll_progress(scroll_y: f64, viewport: Viewport) -> f64 {
    let scrollable = viewport.scrollable();
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOBILE: Viewport = Viewport { width: 390.0, height: 800.0, document_height: 3000.0 };
    const DESKTOP: Viewport = Viewport { width: 1440.0, height: 800.0, document_height: 3000.0 };

    fn inputs(scroll_y: f64, viewport: Viewport) -> ChromeInputs {
        ChromeInputs { scroll_y, last_step: None, viewport, hero_ratio: 0.0 }
    }

    #[test]
    fn scroll_top_boundary() {
        assert!(!chrome_visibility(&inputs(299.0, DESKTOP)).show_scroll_top);
        assert!(chrome_visibility(&inputs(300.0, DESKTOP)).show_scroll_top);
        assert!(!chrome_visibility(&inputs(300.0, MOBILE)).show_scroll_top);
    }

    #[test]
    fn quick_action_appears_halfway_on_mobile_only() {
        assert!(!chrome_visibility(&inputs(1099.0, MOBILE)).show_quick_action);
        assert!(chrome_visibility(&inputs(1100.0, MOBILE)).show_quick_action);
        for y in [0.0, 1100.0, 1500.0, 2200.0] {
            assert!(!chrome_visibility(&inputs(y, DESKTOP)).show_quick_action);
        }
    }

    #[test]
    fn quick_action_hides_near_footer() {
        // 3000 - (1961 + 800) = 239
        assert!(!chrome_visibility(&inputs(1961.0, MOBILE)).show_quick_action);
        assert!(chrome_visibility(&inputs(1960.0, MOBILE)).show_quick_action);
    }

    #[test]
    fn quick_action_trigger_is_capped_on_tall_pages() {
        let tall = Viewport { width: 390.0, height: 800.0, document_height: 12000.0 };
        assert_eq!(quick_action_trigger(tall), 1200.0);
        assert!(chrome_visibility(&inputs(1200.0, tall)).show_quick_action);
    }

    #[test]
    fn bottom_nav_hides_on_downward_scroll_past_threshold() {
        let mut state = inputs(400.0, MOBILE);
        assert!(chrome_visibility(&state).show_bottom_nav);
        state.last_step = Some(Direction::Down);
        assert!(!chrome_visibility(&state).show_bottom_nav);
        state.last_step = Some(Direction::Up);
        assert!(chrome_visibility(&state).show_bottom_nav);
        state.last_step = Some(Direction::Down);
        state.scroll_y = 80.0;
        assert!(chrome_visibility(&state).show_bottom_nav);
    }

    #[test]
    fn hero_in_view_forces_bottom_nav_hidden() {
        let mut state = inputs(0.0, MOBILE);
        state.hero_ratio = 0.6;
        assert!(!chrome_visibility(&state).show_bottom_nav);
        state.hero_ratio = 0.2;
        assert!(chrome_visibility(&state).show_bottom_nav);
        assert!(!chrome_visibility(&inputs(0.0, DESKTOP)).show_bottom_nav);
    }

    #[test]
    fn progress_is_clamped_and_safe_on_short_pages() {
        assert_eq!(scroll_progress(1100.0, MOBILE), 50.0);
        assert_eq!(scroll_progress(5000.0, MOBILE), 100.0);
        let short = Viewport { width: 390.0, height: 800.0, document_height: 600.0 };
        assert_eq!(scroll_progress(0.0, short), 0.0);
    }
}
