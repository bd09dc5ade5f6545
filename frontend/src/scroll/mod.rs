//! Scroll-driven section tracking, entrance animations and floating chrome.
//!
//! Everything below is plain state; DOM access lives in `crate::dom` and the
//! hooks in `crate::hooks`.

pub mod chrome;
pub mod motion;
pub mod navigator;
pub mod section;
pub mod store;
pub mod visibility;

pub use chrome::{ChromeVisibility, Viewport};
pub use motion::{Direction, NavigationGuard};
pub use navigator::{AnimationSlot, CancelToken, Easing, ScrollAnimation};
pub use section::{SectionBounds, SectionId};
pub use store::{ScrollAction, ScrollContext, ScrollSample, ScrollStore};
pub use visibility::{VisibilityMode, VisibilityPhase};
