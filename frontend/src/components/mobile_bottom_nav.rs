use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::hooks::{use_scroll_store, use_section_navigator};
use crate::scroll::SectionId;

const NAV_ITEMS: [(SectionId, &str, &str); 4] = [
    (SectionId::Home, "⌂", "Home"),
    (SectionId::Booking, "▦", "Book"),
    (SectionId::Gallery, "▣", "Gallery"),
    (SectionId::Team, "☺", "Team"),
];

#[function_component(MobileBottomNav)]
pub fn mobile_bottom_nav() -> Html {
    let store = use_scroll_store();
    let navigate = use_section_navigator(config::SCROLL_OFFSETS.mobile_nav);
    let visible = store.chrome().show_bottom_nav;

    html! {
        <nav class={classes!("bottom-nav", (!visible).then(|| "bottom-nav-hidden"))} aria-hidden={(!visible).to_string()}>
            <div class="bottom-nav-inner">
                {
                    for NAV_ITEMS.iter().enumerate().map(|(index, (section, icon, label))| {
                        let section = *section;
                        let is_active = store.active == section;
                        let onclick = {
                            let navigate = navigate.clone();
                            Callback::from(move |_: MouseEvent| navigate.emit(section))
                        };
                        html! {
                            <button
                                key={section.as_str()}
                                class={classes!("bottom-nav-item", is_active.then(|| "active"))}
                                style={format!("animation-delay: {}ms;", index * 50)}
                                aria-label={*label}
                                {onclick}
                            >
                                <span class="bottom-nav-icon">{*icon}</span>
                                <span class="bottom-nav-label">{*label}</span>
                            </button>
                        }
                    })
                }
            </div>
        </nav>
    }
}
