use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::hooks::{use_scroll_store, use_section_navigator};
use crate::scroll::SectionId;
use crate::theme::Theme;

pub const MENU_ITEMS: [(SectionId, &str); 5] = [
    (SectionId::Home, "Home"),
    (SectionId::Services, "Services"),
    (SectionId::Gallery, "Gallery"),
    (SectionId::Team, "Team"),
    (SectionId::Booking, "Booking"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { theme, on_toggle_theme } = props;
    let store = use_scroll_store();
    let navigate = use_section_navigator(config::SCROLL_OFFSETS.desktop_nav);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let link = |section: SectionId, label: &'static str, index: usize, mobile: bool| {
        let is_active = store.active == section;
        let onclick = {
            let navigate = navigate.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                e.stop_propagation();
                menu_open.set(false);
                navigate.emit(section);
            })
        };
        let class = if mobile { "nav-mobile-link" } else { "nav-link" };
        html! {
            <a
                key={section.as_str()}
                href={section.fragment()}
                class={classes!(class, is_active.then(|| "active"))}
                style={mobile.then(|| format!("animation-delay: {}ms;", index * 50))}
                {onclick}
            >
                <span>{label}</span>
                <span class="nav-indicator"></span>
            </a>
        }
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="/" class="nav-logo">
                    <img src={theme.logo()} alt={format!("{} logo", config::SALON_NAME)} />
                </a>

                <div class="nav-links">
                    { for MENU_ITEMS.iter().enumerate().map(|(i, (section, label))| link(*section, *label, i, false)) }
                </div>

                <div class="nav-actions">
                    <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle dark mode">
                        { if theme.is_dark() { "☀" } else { "☾" } }
                    </button>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="nav-mobile-menu">
                            { for MENU_ITEMS.iter().enumerate().map(|(i, (section, label))| link(*section, *label, i, true)) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
