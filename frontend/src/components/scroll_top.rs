use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;
use crate::hooks::{use_scroll_control, use_scroll_store};
use crate::scroll::{Easing, ScrollAnimation};

/// Desktop-only shortcut back to the top of the page.
#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let store = use_scroll_store();
    let animation_slot = use_scroll_control().animation;
    if !store.chrome().show_scroll_top {
        return html! {};
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        let now = dom::now_ms();
        let start = dom::scroll_y();
        let animation = ScrollAnimation {
            start,
            distance: -start,
            duration: 600.0,
            started_at: now,
            easing: Easing::EaseOut,
        };
        if let Err(e) = dom::run_scroll_animation(animation, animation_slot.begin(), || ()) {
            log::warn!("scroll to top failed: {}", e);
            dom::scroll_to(0.0);
        }
    });

    html! {
        <button class="scroll-top" {onclick} aria-label="Scroll to top">{"↑"}</button>
    }
}
