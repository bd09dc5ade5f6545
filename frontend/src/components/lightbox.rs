use std::rc::Rc;

use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::GalleryItem;
use crate::dom;
use crate::hooks::use_key_handler;

const MIN_ZOOM: f64 = 0.5;
const MAX_ZOOM: f64 = 3.0;
const ZOOM_STEP: f64 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightboxState {
    pub index: usize,
    pub len: usize,
    pub zoom: f64,
    pub rotation: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxCommand {
    Close,
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    Rotate,
}

impl LightboxCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxCommand::Close),
            "ArrowRight" => Some(LightboxCommand::Next),
            "ArrowLeft" => Some(LightboxCommand::Previous),
            "+" | "=" => Some(LightboxCommand::ZoomIn),
            "-" => Some(LightboxCommand::ZoomOut),
            "r" => Some(LightboxCommand::Rotate),
            _ => None,
        }
    }
}

impl LightboxState {
    pub fn open(index: usize, len: usize) -> Self {
        Self { index: index.min(len.saturating_sub(1)), len, zoom: 1.0, rotation: 0 }
    }

    /// Apply a command other than `Close`. Changing image resets the view.
    pub fn apply(self, command: LightboxCommand) -> Self {
        match command {
            LightboxCommand::Close => self,
            LightboxCommand::Next if self.len > 0 => Self::open((self.index + 1) % self.len, self.len),
            LightboxCommand::Previous if self.len > 0 => Self::open((self.index + self.len - 1) % self.len, self.len),
            LightboxCommand::Next | LightboxCommand::Previous => self,
            LightboxCommand::ZoomIn => Self { zoom: (self.zoom + ZOOM_STEP).min(MAX_ZOOM), ..self },
            LightboxCommand::ZoomOut => Self { zoom: (self.zoom - ZOOM_STEP).max(MIN_ZOOM), ..self },
            LightboxCommand::Rotate => Self { rotation: (self.rotation + 90) % 360, ..self },
        }
    }

    pub fn transform(&self) -> String {
        format!("transform: scale({}) rotate({}deg);", self.zoom, self.rotation)
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub items: Vec<GalleryItem>,
    pub start_index: usize,
    pub on_close: Callback<()>,
}

impl Reducible for LightboxState {
    type Action = LightboxCommand;

    fn reduce(self: Rc<Self>, command: LightboxCommand) -> Rc<Self> {
        let next = self.apply(command);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let state = use_reducer(|| LightboxState::open(props.start_index, props.items.len()));

    // both callbacks keep their identity across renders so the keydown
    // listener is installed once per open lightbox
    let command = use_callback(
        |command: LightboxCommand, (dispatcher, on_close)| {
            if command == LightboxCommand::Close {
                on_close.emit(());
            } else {
                dispatcher.dispatch(command);
            }
        },
        (state.dispatcher(), props.on_close.clone()),
    );
    let on_key = use_callback(
        |key: String, command| {
            if let Some(c) = LightboxCommand::from_key(&key) {
                command.emit(c);
            }
        },
        command.clone(),
    );
    use_key_handler(true, on_key);

    use_effect_with_deps(
        |_| {
            if let Err(e) = dom::set_root_class("lightbox-open", true) {
                warn!("could not lock page scroll: {}", e);
            }
            || {
                let _ = dom::set_root_class("lightbox-open", false);
            }
        },
        (),
    );

    let button = |c: LightboxCommand, label: &'static str, class: &'static str| {
        let command = command.clone();
        html! {
            <button
                class={classes!("lightbox-button", class)}
                aria-label={label}
                onclick={Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    command.emit(c);
                })}
            >
                {label}
            </button>
        }
    };

    let Some(item) = props.items.get(state.index) else {
        return html! {};
    };

    let close_backdrop = {
        let command = command.clone();
        Callback::from(move |_: MouseEvent| command.emit(LightboxCommand::Close))
    };

    html! {
        <div class="lightbox" onclick={close_backdrop}>
            { button(LightboxCommand::Close, "Close", "lightbox-close") }
            { button(LightboxCommand::Previous, "Previous", "lightbox-prev") }
            <figure class="lightbox-figure" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <img src={item.src} alt={item.title} style={state.transform()} />
                <figcaption>{format!("{} / {}", state.index + 1, state.len)}</figcaption>
            </figure>
            { button(LightboxCommand::Next, "Next", "lightbox-next") }
            <div class="lightbox-tools">
                { button(LightboxCommand::ZoomOut, "Zoom out", "lightbox-zoom-out") }
                { button(LightboxCommand::ZoomIn, "Zoom in", "lightbox-zoom-in") }
                { button(LightboxCommand::Rotate, "Rotate", "lightbox-rotate") }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_both_ways() {
        let state = LightboxState::open(0, 3);
        assert_eq!(state.apply(LightboxCommand::Previous).index, 2);
        assert_eq!(state.apply(LightboxCommand::Next).apply(LightboxCommand::Next).apply(LightboxCommand::Next).index, 0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut state = LightboxState::open(1, 3);
        for _ in 0..20 {
            state = state.apply(LightboxCommand::ZoomIn);
        }
        assert_eq!(state.zoom, MAX_ZOOM);
        for _ in 0..20 {
            state = state.apply(LightboxCommand::ZoomOut);
        }
        assert_eq!(state.zoom, MIN_ZOOM);
    }

    #[test]
    fn changing_image_resets_zoom_and_rotation() {
        let state = LightboxState::open(0, 4)
            .apply(LightboxCommand::ZoomIn)
            .apply(LightboxCommand::Rotate)
            .apply(LightboxCommand::Next);
        assert_eq!(state.index, 1);
        assert_eq!(state.zoom, 1.0);
        assert_eq!(state.rotation, 0);
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(LightboxCommand::from_key("Escape"), Some(LightboxCommand::Close));
        assert_eq!(LightboxCommand::from_key("ArrowLeft"), Some(LightboxCommand::Previous));
        assert_eq!(LightboxCommand::from_key("a"), None);
    }

    #[test]
    fn empty_gallery_does_not_panic() {
        let state = LightboxState::open(5, 0);
        assert_eq!(state.apply(LightboxCommand::Next).index, 0);
    }

    #[test]
    fn commands_that_change_nothing_keep_the_same_state() {
        let opened = Rc::new(LightboxState::open(0, 3));
        let rotated = opened.clone().reduce(LightboxCommand::Rotate);
        assert!(!Rc::ptr_eq(&opened, &rotated));

        let mut zoomed = opened;
        for _ in 0..8 {
            zoomed = zoomed.reduce(LightboxCommand::ZoomIn);
        }
        let again = zoomed.clone().reduce(LightboxCommand::ZoomIn);
        assert!(Rc::ptr_eq(&zoomed, &again));
    }
}
