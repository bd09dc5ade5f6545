use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Below this width the mobile chrome (bottom nav, quick actions) is used,
/// at or above it the desktop chrome (top nav links, scroll-to-top).
pub const MOBILE_BREAKPOINT: f64 = 1024.0;

/// Distance below the viewport top at which the active section is probed.
pub const ACTIVE_SECTION_PROBE: f64 = 150.0;
/// Below this scroll position the first section is active even if no
/// section range matched.
pub const TOP_OF_PAGE: f64 = 100.0;

pub const NAVIGATION_GUARD_MS: f64 = 800.0;
pub const NAVIGATION_SCROLL_MS: f64 = 500.0;
pub const PROGRAMMATIC_WINDOW_MS: f64 = 300.0;
pub const PROGRAMMATIC_BURST_MS: f64 = 50.0;

pub const ANCHOR_SCROLL_MS: f64 = 800.0;

pub const VISIBILITY_FALLBACK_MS: u32 = 300;
pub const VISIBILITY_ROOT_MARGIN: &str = "100px";
pub const VISIBILITY_MOUNT_SLACK: f64 = 100.0;

pub const HERO_ROOT_MARGIN: &str = "-80px 0px 0px 0px";
pub const HERO_THRESHOLDS: [f64; 6] = [0.0, 0.1, 0.2, 0.3, 0.5, 1.0];
pub const HERO_HIDES_BOTTOM_NAV_ABOVE: f64 = 0.2;

pub const SCROLL_TOP_AFTER: f64 = 300.0;
pub const BOTTOM_NAV_HIDE_AFTER: f64 = 100.0;
pub const QUICK_ACTION_SCROLL_FRACTION: f64 = 0.5;
pub const QUICK_ACTION_MAX_TRIGGER: f64 = 1200.0;
pub const QUICK_ACTION_FOOTER_CLEARANCE: f64 = 240.0;

/// Where each surface lands a section after a click, measured from the
/// viewport top. The surfaces sit at different heights so they keep
/// separate values; the active-section probe is shared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffsets {
    pub desktop_nav: f64,
    pub mobile_nav: f64,
    pub in_page_anchor: f64,
}

pub const SCROLL_OFFSETS: ScrollOffsets = ScrollOffsets {
    desktop_nav: 120.0,
    mobile_nav: 100.0,
    in_page_anchor: 100.0,
};

pub const LOADER_SHOW_AFTER_MS: f64 = 800.0;
pub const LOADER_FADE_DELAY_MS: u32 = 300;
pub const LOADER_FADE_MS: u32 = 500;

pub const SALON_NAME: &str = "Anitah's Hair Studio";
pub const SALON_PHONE: &str = "+254727833237";
pub const SALON_PHONE_DISPLAY: &str = "+254 727 833237";
pub const BOOKING_MESSAGE: &str = "Hello! I'd like to book an appointment.";
pub const INSTAGRAM_URL: &str = "https://instagram.com/anitashairstudio";
pub const TIKTOK_URL: &str = "https://tiktok.com/@anitashairstudio";

pub fn whatsapp_url(message: Option<&str>) -> String {
    let digits: String = SALON_PHONE.chars().filter(|c| c.is_ascii_digit()).collect();
    match message {
        Some(text) => format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text)),
        None => format!("https://wa.me/{}", digits),
    }
}

pub fn tel_url() -> String {
    format!("tel:{}", SALON_PHONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_link_encodes_the_message() {
        assert_eq!(
            whatsapp_url(Some(BOOKING_MESSAGE)),
            "https://wa.me/254727833237?text=Hello%21%20I%27d%20like%20to%20book%20an%20appointment."
        );
    }

    #[test]
    fn plain_chat_link_has_no_query() {
        assert_eq!(whatsapp_url(None), "https://wa.me/254727833237");
        assert_eq!(tel_url(), "tel:+254727833237");
    }
}
