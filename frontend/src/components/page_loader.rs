use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, EventListener};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Hidden,
    Showing,
    FadingOut,
    Removed,
}

impl LoaderPhase {
    pub fn is_rendered(self) -> bool {
        matches!(self, LoaderPhase::Showing | LoaderPhase::FadingOut)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderStep {
    None,
    FadeAfter(u32),
    RemoveAfter(u32),
}

/// The overlay only appears when loading is slow or the network is
/// offline; fast loads never flash it.
#[derive(Clone, Debug, PartialEq)]
pub struct LoaderMachine {
    phase: LoaderPhase,
    started_at: f64,
}

impl LoaderMachine {
    pub fn new(started_at: f64, network_slow: bool) -> Self {
        let phase = if network_slow { LoaderPhase::Showing } else { LoaderPhase::Hidden };
        Self { phase, started_at }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn is_rendered(&self) -> bool {
        self.phase.is_rendered()
    }

    /// The show-threshold timer fired while the page was still loading.
    pub fn threshold_elapsed(&mut self, now: f64) {
        if self.phase == LoaderPhase::Hidden && now - self.started_at >= config::LOADER_SHOW_AFTER_MS {
            self.phase = LoaderPhase::Showing;
        }
    }

    pub fn loaded(&mut self) -> LoaderStep {
        match self.phase {
            LoaderPhase::Showing => LoaderStep::FadeAfter(config::LOADER_FADE_DELAY_MS),
            LoaderPhase::Hidden => {
                self.phase = LoaderPhase::Removed;
                LoaderStep::None
            }
            LoaderPhase::FadingOut | LoaderPhase::Removed => LoaderStep::None,
        }
    }

    pub fn start_fade(&mut self) -> LoaderStep {
        if self.phase != LoaderPhase::Showing {
            return LoaderStep::None;
        }
        self.phase = LoaderPhase::FadingOut;
        LoaderStep::RemoveAfter(config::LOADER_FADE_MS)
    }

    pub fn remove(&mut self) {
        self.phase = LoaderPhase::Removed;
    }
}

type Timers = Rc<RefCell<Vec<Timeout>>>;

fn advance(machine: &Rc<RefCell<LoaderMachine>>, phase: &UseStateHandle<LoaderPhase>, timers: &Timers, step: LoaderStep) {
    phase.set(machine.borrow().phase());
    let (delay, fade) = match step {
        LoaderStep::None => return,
        LoaderStep::FadeAfter(delay) => (delay, true),
        LoaderStep::RemoveAfter(delay) => (delay, false),
    };
    let machine_next = machine.clone();
    let phase_next = phase.clone();
    let timers_next = timers.clone();
    let timer = Timeout::new(delay, move || {
        if fade {
            let next = machine_next.borrow_mut().start_fade();
            advance(&machine_next, &phase_next, &timers_next, next);
        } else {
            machine_next.borrow_mut().remove();
            phase_next.set(LoaderPhase::Removed);
        }
    });
    timers.borrow_mut().push(timer);
}

#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    let phase = use_state(|| LoaderPhase::Hidden);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let offline = !dom::is_online();
                if offline {
                    debug!("offline, showing loader");
                }
                let machine = Rc::new(RefCell::new(LoaderMachine::new(dom::now_ms(), offline)));
                let timers: Timers = Rc::new(RefCell::new(Vec::new()));
                phase.set(machine.borrow().phase());

                let mut listener = None;
                if dom::page_loaded() {
                    let step = machine.borrow_mut().loaded();
                    advance(&machine, &phase, &timers, step);
                } else {
                    let show = {
                        let machine = machine.clone();
                        let phase = phase.clone();
                        Timeout::new(config::LOADER_SHOW_AFTER_MS as u32, move || {
                            machine.borrow_mut().threshold_elapsed(dom::now_ms());
                            if machine.borrow().is_rendered() {
                                debug!("page load is slow, showing loader");
                            }
                            phase.set(machine.borrow().phase());
                        })
                    };
                    timers.borrow_mut().push(show);

                    let on_load = {
                        let machine = machine.clone();
                        let phase = phase.clone();
                        let timers = timers.clone();
                        move |_| {
                            let step = machine.borrow_mut().loaded();
                            advance(&machine, &phase, &timers, step);
                        }
                    };
                    listener = dom::window()
                        .and_then(|window| EventListener::new(&window, "load", on_load))
                        .map_err(|e| warn!("loader cannot observe page load: {}", e))
                        .ok();
                }

                move || {
                    drop(listener);
                    timers.borrow_mut().clear();
                }
            },
            (),
        );
    }

    if !phase.is_rendered() {
        return html! {};
    }

    html! {
        <div class={classes!("page-loader", (*phase == LoaderPhase::FadingOut).then(|| "fade-out"))}>
            <div class="loader-spinner"></div>
            <p class="loader-title">{format!("Welcome to {}", config::SALON_NAME)}</p>
            <p class="loader-subtitle">{"Loading..."}</p>
            <div class="loader-bar"><div class="loader-bar-fill"></div></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_load_never_shows() {
        let mut loader = LoaderMachine::new(0.0, false);
        assert_eq!(loader.loaded(), LoaderStep::None);
        assert_eq!(loader.phase(), LoaderPhase::Removed);
        loader.threshold_elapsed(2000.0);
        assert!(!loader.is_rendered());
    }

    #[test]
    fn slow_load_shows_then_fades() {
        let mut loader = LoaderMachine::new(0.0, false);
        loader.threshold_elapsed(799.0);
        assert_eq!(loader.phase(), LoaderPhase::Hidden);
        loader.threshold_elapsed(800.0);
        assert_eq!(loader.phase(), LoaderPhase::Showing);

        assert_eq!(loader.loaded(), LoaderStep::FadeAfter(300));
        assert_eq!(loader.start_fade(), LoaderStep::RemoveAfter(500));
        assert_eq!(loader.phase(), LoaderPhase::FadingOut);
        assert_eq!(loader.start_fade(), LoaderStep::None);
        loader.remove();
        assert!(!loader.is_rendered());
    }

    #[test]
    fn offline_shows_immediately() {
        let loader = LoaderMachine::new(0.0, true);
        assert!(loader.is_rendered());
    }
}
