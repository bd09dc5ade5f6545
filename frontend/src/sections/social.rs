use yew::prelude::*;

use crate::components::section_transition::{EntranceVariant, SectionTransition};
use crate::config;
use crate::hooks::use_in_view;

const INSTAGRAM_POSTS: [&str; 4] = [
    "https://www.instagram.com/p/DOtfVctDdnP/embed?hidecaption=true",
    "https://www.instagram.com/p/DOvLo_dDRbY/embed?hidecaption=true",
    "https://www.instagram.com/p/DP6dadTCKYj/embed?hidecaption=true",
    "https://www.instagram.com/p/DPWqitQDewi/embed?hidecaption=true",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Feed {
    Instagram,
    TikTok,
}

/// An embed loads the first time it scrolls into view while its tab is
/// active and stays loaded afterwards.
fn should_load(already_loaded: bool, tab_active: bool, in_view: bool) -> bool {
    already_loaded || (tab_active && in_view)
}

#[derive(Properties, PartialEq)]
struct LazyEmbedProps {
    src: &'static str,
    title: AttrValue,
    active: bool,
}

#[function_component(LazyEmbed)]
fn lazy_embed(props: &LazyEmbedProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.1);
    let requested = use_state_eq(|| false);
    let ready = use_state_eq(|| false);

    {
        let requested = requested.clone();
        use_effect_with_deps(
            move |&(active, in_view)| {
                if should_load(*requested, active, in_view) {
                    requested.set(true);
                }
                || ()
            },
            (props.active, in_view),
        );
    }

    let onload = {
        let ready = ready.clone();
        Callback::from(move |_: Event| ready.set(true))
    };

    html! {
        <div ref={node} class="embed">
            if *requested {
                if !*ready {
                    <div class="embed-spinner" aria-hidden="true"></div>
                }
                <iframe
                    src={props.src}
                    title={props.title.clone()}
                    allow="encrypted-media; picture-in-picture; clipboard-write"
                    scrolling="no"
                    class={classes!("embed-frame", (*ready).then(|| "loaded"))}
                    {onload}
                />
            } else {
                <div class="embed-placeholder">{"Loading post…"}</div>
            }
        </div>
    }
}

#[function_component(Social)]
pub fn social() -> Html {
    let feed = use_state(|| Feed::Instagram);

    let select = |target: Feed| {
        let feed = feed.clone();
        Callback::from(move |_: MouseEvent| feed.set(target))
    };

    html! {
        <section class="social">
            <SectionTransition variant={EntranceVariant::FadeUp}>
                <h2>{"Follow the studio"}</h2>
                <div class="tabs" role="tablist">
                    <button class={classes!("tab", (*feed == Feed::Instagram).then(|| "active"))} onclick={select(Feed::Instagram)}>
                        {"Instagram"}
                    </button>
                    <button class={classes!("tab", (*feed == Feed::TikTok).then(|| "active"))} onclick={select(Feed::TikTok)}>
                        {"TikTok"}
                    </button>
                </div>
                // embeds stay mounted across tab switches so loaded posts are kept
                <div class={classes!("embed-grid", (*feed != Feed::Instagram).then(|| "hidden"))}>
                    {
                        for INSTAGRAM_POSTS.iter().enumerate().map(|(index, src)| html! {
                            <LazyEmbed
                                key={*src}
                                src={*src}
                                title={format!("Instagram post {}", index + 1)}
                                active={*feed == Feed::Instagram}
                            />
                        })
                    }
                </div>
                if *feed == Feed::TikTok {
                    <div class="tiktok-callout">
                        <p>{"Watch transformations and tutorials on TikTok."}</p>
                        <a href={config::TIKTOK_URL} target="_blank" rel="noopener noreferrer" class="social-link">
                            {"Open TikTok"}
                        </a>
                    </div>
                }
                <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="social-link">
                    {"See more on Instagram"}
                </a>
            </SectionTransition>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_wait_for_active_tab_and_view() {
        assert!(!should_load(false, false, true));
        assert!(!should_load(false, true, false));
        assert!(should_load(false, true, true));
    }

    #[test]
    fn loaded_embeds_survive_tab_switch() {
        assert!(should_load(true, false, false));
    }
}
