use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::hooks::use_scroll_store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    Book,
    Call,
    WhatsApp,
    Instagram,
    TikTok,
}

impl QuickAction {
    pub const PRIMARY: [QuickAction; 3] = [QuickAction::Book, QuickAction::Call, QuickAction::WhatsApp];
    pub const SOCIAL: [QuickAction; 2] = [QuickAction::Instagram, QuickAction::TikTok];

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::Book => "Book Now",
            QuickAction::Call => "Call Now",
            QuickAction::WhatsApp => "WhatsApp",
            QuickAction::Instagram => "Instagram",
            QuickAction::TikTok => "TikTok",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QuickAction::Book => "Schedule appointment",
            QuickAction::Call => config::SALON_PHONE_DISPLAY,
            QuickAction::WhatsApp => "Chat with us",
            QuickAction::Instagram | QuickAction::TikTok => "Follow us",
        }
    }

    pub fn url(self) -> String {
        match self {
            QuickAction::Book => config::whatsapp_url(Some(config::BOOKING_MESSAGE)),
            QuickAction::Call => config::tel_url(),
            QuickAction::WhatsApp => config::whatsapp_url(None),
            QuickAction::Instagram => config::INSTAGRAM_URL.to_string(),
            QuickAction::TikTok => config::TIKTOK_URL.to_string(),
        }
    }

    /// `tel:` hands off to the dialer in place, the rest open a new tab.
    pub fn opens_new_tab(self) -> bool {
        self != QuickAction::Call
    }

    fn perform(self) {
        let url = self.url();
        if self.opens_new_tab() {
            dom::open_in_new_tab(&url);
        } else {
            dom::navigate_to(&url);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct QuickActionSheetProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(QuickActionSheet)]
pub fn quick_action_sheet(props: &QuickActionSheetProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let action_button = |action: QuickAction, index: usize| {
        let on_close = props.on_close.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            action.perform();
            // social links leave the sheet open behind the new tab
            if QuickAction::PRIMARY.contains(&action) {
                on_close.emit(());
            }
        });
        html! {
            <button
                class="quick-action"
                style={format!("animation-delay: {}ms;", 100 + index * 80)}
                {onclick}
            >
                <div class="quick-action-label">{action.label()}</div>
                <div class="quick-action-description">{action.description()}</div>
            </button>
        }
    };

    html! {
        <>
            <div class="sheet-backdrop" onclick={close.clone()}></div>
            <div class="quick-action-sheet">
                <div class="sheet-handle"></div>
                <div class="sheet-header">
                    <h3>{"Quick Actions"}</h3>
                    <button class="sheet-close" onclick={close} aria-label="Close">{"×"}</button>
                </div>
                <div class="quick-action-grid">
                    { for QuickAction::PRIMARY.iter().enumerate().map(|(i, action)| action_button(*action, i)) }
                </div>
                <div class="sheet-social">
                    <p>{"Follow Us"}</p>
                    { for QuickAction::SOCIAL.iter().enumerate().map(|(i, action)| action_button(*action, i)) }
                </div>
            </div>
        </>
    }
}

/// Mobile-only button that opens the quick-action sheet once the reader is
/// well into the page.
#[function_component(FloatingActionButton)]
pub fn floating_action_button() -> Html {
    let store = use_scroll_store();
    let sheet_open = use_state(|| false);
    let visible = store.chrome().show_quick_action || *sheet_open;

    let toggle = {
        let sheet_open = sheet_open.clone();
        Callback::from(move |_: MouseEvent| sheet_open.set(!*sheet_open))
    };
    let on_close = {
        let sheet_open = sheet_open.clone();
        Callback::from(move |_| sheet_open.set(false))
    };

    html! {
        <>
            <button
                class={classes!("fab", (!visible).then(|| "fab-hidden"), (*sheet_open).then(|| "fab-open"))}
                onclick={toggle}
                aria-label="Quick actions"
            >
                { if *sheet_open { "×" } else { "✦" } }
            </button>
            <QuickActionSheet is_open={*sheet_open} {on_close} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_action_carries_the_encoded_message() {
        assert!(QuickAction::Book.url().starts_with("https://wa.me/254727833237?text=Hello%21"));
    }

    #[test]
    fn only_calls_stay_in_the_tab() {
        assert!(!QuickAction::Call.opens_new_tab());
        assert_eq!(QuickAction::Call.url(), "tel:+254727833237");
        assert!(QuickAction::SOCIAL.iter().all(|a| a.opens_new_tab()));
    }
}
