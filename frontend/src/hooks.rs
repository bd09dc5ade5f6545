use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, EventListener, IntersectionWatcher};
use crate::error::SiteResult;
use crate::scroll::visibility::{self, IntersectionSample, Transition, VisibilityMachine};
use crate::scroll::{
    AnimationSlot, Direction, Easing, NavigationGuard, ScrollAction, ScrollAnimation, ScrollContext, ScrollSample,
    ScrollStore, SectionId, VisibilityMode, VisibilityPhase,
};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// The parts of the scroll machinery that never change identity. Consumers
/// that only start navigations or read the guard subscribe to this instead
/// of the store, so scroll events do not re-render them.
#[derive(Clone, PartialEq)]
pub struct ScrollControl {
    pub guard: NavigationGuard,
    pub animation: AnimationSlot,
    pub dispatcher: UseReducerDispatcher<ScrollStore>,
}

/// Owns the page's only scroll and resize listeners and publishes every
/// reading through [`ScrollStore`].
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let store = use_reducer(ScrollStore::default);
    let control = {
        let store = store.clone();
        use_state(move || ScrollControl {
            guard: store.guard.clone(),
            animation: AnimationSlot::default(),
            dispatcher: store.dispatcher(),
        })
    };

    {
        let store = store.clone();
        let animation = control.animation.clone();
        use_effect_with_deps(
            move |_| {
                publish(&store, ScrollAction::Measured);
                let listeners = install_listeners(&store);
                // fonts and images shift section offsets shortly after mount
                let settle = {
                    let store = store.clone();
                    Timeout::new(200, move || publish(&store, ScrollAction::Measured))
                };
                move || {
                    drop(settle);
                    drop(listeners);
                    animation.cancel();
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollControl> context={(*control).clone()}>
            <ContextProvider<ScrollContext> context={store}>
                { for props.children.iter() }
            </ContextProvider<ScrollContext>>
        </ContextProvider<ScrollControl>>
    }
}

fn publish(store: &ScrollContext, action: fn(ScrollSample) -> ScrollAction) {
    match dom::sample() {
        Ok(sample) => store.dispatch(action(sample)),
        Err(e) => warn!("could not sample scroll position: {}", e),
    }
}

fn install_listeners(store: &ScrollContext) -> Vec<EventListener> {
    let window = match dom::window() {
        Ok(window) => window,
        Err(e) => {
            warn!("scroll tracking disabled: {}", e);
            return Vec::new();
        }
    };
    let events: [(&'static str, fn(ScrollSample) -> ScrollAction); 3] = [
        ("scroll", ScrollAction::Scrolled),
        ("resize", ScrollAction::Measured),
        ("load", ScrollAction::Measured),
    ];
    events
        .into_iter()
        .filter_map(|(event, action)| {
            let store = store.clone();
            EventListener::passive(&window, event, move |_| publish(&store, action))
                .map_err(|e| warn!("could not listen for {}: {}", event, e))
                .ok()
        })
        .collect()
}

#[hook]
pub fn use_scroll_store() -> ScrollContext {
    use_context::<ScrollContext>().expect("use_scroll_store called outside of <ScrollProvider>")
}

#[hook]
pub fn use_scroll_control() -> ScrollControl {
    use_context::<ScrollControl>().expect("use_scroll_control called outside of <ScrollProvider>")
}

/// Ease the page to `target`, keeping the shared active section pinned to
/// it while the page moves. Cancels any animation already running.
fn navigate_to_section(control: &ScrollControl, target: SectionId, offset: f64, duration: f64, easing: Easing) {
    let element = match dom::element_by_id(target.as_str()) {
        Ok(element) => element,
        Err(e) => {
            debug!("ignoring navigation: {}", e);
            return;
        }
    };
    let now = dom::now_ms();
    let animation = ScrollAnimation::to_element(
        dom::scroll_y(),
        element.get_bounding_client_rect().top(),
        offset,
        duration,
        now,
        easing,
    );

    let token = control.animation.begin();
    control.dispatcher.dispatch(ScrollAction::NavigationStarted { target, now });
    debug!("navigating to {} ({:.0}px)", target, animation.target());

    let finished = control.dispatcher.clone();
    let result = dom::run_scroll_animation(animation, token, move || {
        if let Err(e) = dom::push_fragment(&target.fragment()) {
            warn!("could not update history: {}", e);
        }
        finished.dispatch(ScrollAction::NavigationFinished { target });
    });
    if let Err(e) = result {
        warn!("scroll animation failed to start: {}", e);
    }
}

/// Click handler that eases the page to a section.
#[hook]
pub fn use_section_navigator(offset: f64) -> Callback<SectionId> {
    let control = use_scroll_control();
    Callback::from(move |target: SectionId| {
        navigate_to_section(&control, target, offset, config::NAVIGATION_SCROLL_MS, Easing::EaseInOutCubic)
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub mode: VisibilityMode,
    pub delay_ms: u32,
    /// Skip the observer wait and reveal as soon as the element mounts.
    pub reveal_at_mount: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self { mode: VisibilityMode::Once, delay_ms: 0, reveal_at_mount: false }
    }
}

struct SectionWatch {
    _watcher: IntersectionWatcher,
    _fallback: Timeout,
    _reveal: Rc<RefCell<Option<Timeout>>>,
}

/// Entrance state of the element behind `node`.
#[hook]
pub fn use_section_visibility(node: NodeRef, options: VisibilityOptions) -> VisibilityPhase {
    let guard = use_scroll_control().guard;
    let phase = use_state(|| VisibilityPhase::NotObserved);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let watch = node.cast::<Element>().and_then(|element| {
                    watch_section(&element, *options, guard, phase)
                        .map_err(|e| warn!("section visibility unavailable: {}", e))
                        .ok()
                });
                move || drop(watch)
            },
            (node, options),
        );
    }

    *phase
}

fn watch_section(
    element: &Element,
    options: VisibilityOptions,
    guard: NavigationGuard,
    phase: UseStateHandle<VisibilityPhase>,
) -> SiteResult<SectionWatch> {
    let machine = Rc::new(RefCell::new(VisibilityMachine::new(options.mode, options.delay_ms)));
    let reveal_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let apply: Rc<dyn Fn(Transition)> = {
        let machine = machine.clone();
        let reveal_timer = reveal_timer.clone();
        Rc::new(move |transition: Transition| match transition {
            Transition::Unchanged => {}
            Transition::Changed => phase.set(machine.borrow().phase()),
            Transition::RevealAfter(delay) => {
                phase.set(machine.borrow().phase());
                let machine = machine.clone();
                let phase = phase.clone();
                let timer = Timeout::new(delay, move || {
                    let revealed = machine.borrow_mut().reveal();
                    if revealed == Transition::Changed {
                        phase.set(machine.borrow().phase());
                    }
                });
                // replacing drops and cancels an earlier pending reveal
                *reveal_timer.borrow_mut() = Some(timer);
            }
        })
    };

    let observed = machine.borrow_mut().observe();
    apply(observed);
    if options.reveal_at_mount || already_in_view(element) {
        let shown = machine.borrow_mut().mount_in_view();
        apply(shown);
    }

    let watcher = {
        let machine = machine.clone();
        let apply = apply.clone();
        let last_y = Cell::new(dom::scroll_y());
        IntersectionWatcher::observe(
            element,
            &visibility::OBSERVER_THRESHOLDS,
            config::VISIBILITY_ROOT_MARGIN,
            move |ratio, is_intersecting| {
                let current = dom::scroll_y();
                let direction = Direction::for_intersection(last_y.get(), current);
                last_y.set(current);
                let sample = IntersectionSample {
                    ratio,
                    is_intersecting,
                    direction,
                    suppress_delay: guard.suppresses_delay(dom::now_ms()),
                };
                let transition = machine.borrow_mut().on_intersection(sample);
                apply(transition);
            },
        )?
    };

    let fallback = Timeout::new(config::VISIBILITY_FALLBACK_MS, move || {
        let transition = machine.borrow_mut().fallback();
        apply(transition);
    });

    Ok(SectionWatch { _watcher: watcher, _fallback: fallback, _reveal: reveal_timer })
}

fn already_in_view(element: &Element) -> bool {
    let Ok(viewport) = dom::viewport() else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    visibility::rect_in_view(
        rect.top(),
        rect.bottom(),
        rect.left(),
        rect.right(),
        viewport.width,
        viewport.height,
        config::VISIBILITY_MOUNT_SLACK,
    )
}

/// Publishes how much of the hero is on screen; the mobile bottom nav stays
/// hidden while it dominates the viewport.
#[hook]
pub fn use_hero_ratio(node: NodeRef) {
    let store = use_scroll_control().dispatcher;
    use_effect_with_deps(
        move |node| {
            let watcher = node.cast::<Element>().and_then(|hero| {
                IntersectionWatcher::observe(&hero, &config::HERO_THRESHOLDS, config::HERO_ROOT_MARGIN, move |ratio, _| {
                    store.dispatch(ScrollAction::HeroRatio(ratio))
                })
                .map_err(|e| warn!("hero observer unavailable: {}", e))
                .ok()
            });
            move || drop(watcher)
        },
        node,
    );
}

/// Eases in-page `#fragment` links that the navigation bars do not handle
/// themselves.
#[hook]
pub fn use_anchor_smooth_scroll(easing: Easing, duration: f64) {
    let control = use_scroll_control();
    use_effect_with_deps(
        move |(easing, duration, control)| {
            let (easing, duration, control) = (*easing, *duration, control.clone());
            let listener = dom::document()
                .and_then(|document| {
                    EventListener::new(&document, "click", move |event: Event| {
                        follow_anchor(&event, &control, easing, duration)
                    })
                })
                .map_err(|e| warn!("anchor scrolling unavailable: {}", e))
                .ok();
            move || drop(listener)
        },
        (easing, duration, control),
    );
}

/// An anchor may pick its own curve with `data-easing="ease-out"`. Anchors
/// that point at a page section go through the guarded section navigation.
fn follow_anchor(event: &Event, control: &ScrollControl, easing: Easing, duration: f64) {
    if event.default_prevented() {
        return;
    }
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    if target.closest("nav").ok().flatten().is_some() {
        return;
    }
    let Some(anchor) = target.closest("a[href^=\"#\"]").ok().flatten() else {
        return;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let easing = anchor
        .get_attribute("data-easing")
        .and_then(|name| Easing::from_name(&name))
        .unwrap_or(easing);
    let offset = config::SCROLL_OFFSETS.in_page_anchor;

    if let Some(section) = SectionId::from_fragment(&href) {
        event.prevent_default();
        navigate_to_section(control, section, offset, duration, easing);
        return;
    }

    let Some(destination) = href.strip_prefix('#').and_then(|id| dom::element_by_id(id).ok()) else {
        return;
    };
    event.prevent_default();
    let animation = ScrollAnimation::to_element(
        dom::scroll_y(),
        destination.get_bounding_client_rect().top(),
        offset,
        duration,
        dom::now_ms(),
        easing,
    );
    let result = dom::run_scroll_animation(animation, control.animation.begin(), move || {
        if let Err(e) = dom::push_fragment(&href) {
            warn!("could not update history: {}", e);
        }
    });
    if let Err(e) = result {
        warn!("anchor scroll failed: {}", e);
    }
}

/// Current theme, seeded from `prefers-color-scheme` and mirrored onto the
/// `dark` class of `<html>`.
#[hook]
pub fn use_theme() -> UseStateHandle<Theme> {
    let theme = use_state(|| Theme::from_preference(dom::prefers_dark()));
    use_effect_with_deps(
        |theme| {
            if let Err(e) = dom::set_root_class("dark", theme.is_dark()) {
                warn!("could not apply theme: {}", e);
            }
            || ()
        },
        *theme,
    );
    theme
}

/// Forwards `keydown` keys to `on_key` while `enabled`.
#[hook]
pub fn use_key_handler(enabled: bool, on_key: Callback<String>) {
    use_effect_with_deps(
        |(enabled, on_key)| {
            let listener = if *enabled {
                let on_key = on_key.clone();
                dom::window()
                    .and_then(|window| {
                        EventListener::new(&window, "keydown", move |event: Event| {
                            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                                on_key.emit(key.key());
                            }
                        })
                    })
                    .map_err(|e| warn!("keyboard shortcuts unavailable: {}", e))
                    .ok()
            } else {
                None
            };
            move || drop(listener)
        },
        (enabled, on_key),
    );
}

/// Whether the element behind `node` currently crosses `threshold`.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state_eq(|| false);
    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node| {
                let watcher = node.cast::<Element>().and_then(|element| {
                    IntersectionWatcher::observe(&element, &[threshold], "0px", move |_, intersecting| {
                        in_view.set(intersecting)
                    })
                    .map_err(|e| warn!("view tracking unavailable: {}", e))
                    .ok()
                });
                move || drop(watcher)
            },
            node,
        );
    }
    *in_view
}
