use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::media::FallbackImage;
use crate::config;
use crate::content::{next_configuration, CARD_CONFIGURATIONS, CARD_SHUFFLE_MS, GALLERY};
use crate::hooks::{use_hero_ratio, use_section_navigator};
use crate::scroll::SectionId;

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    use_hero_ratio(node.clone());

    let shuffle = use_state(|| 0usize);
    let current = use_mut_ref(|| 0usize);
    {
        let shuffle = shuffle.clone();
        use_interval(
            move || {
                let mut current = current.borrow_mut();
                *current = next_configuration(*current);
                shuffle.set(*current);
            },
            CARD_SHUFFLE_MS,
        );
    }

    let navigate = use_section_navigator(config::SCROLL_OFFSETS.desktop_nav);
    let book = {
        let navigate = navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(SectionId::Booking);
        })
    };
    let explore = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigate.emit(SectionId::Services);
    });

    let placements = &CARD_CONFIGURATIONS[*shuffle];

    html! {
        <section id="home" class="hero" ref={node}>
            <div class="hero-content">
                <h1>{"Hair that feels like you"}</h1>
                <p class="hero-subtitle">
                    {"Braids, silk presses, locs and treatments in a calm Nairobi studio."}
                </p>
                <div class="hero-actions">
                    <a href={SectionId::Booking.fragment()} class="hero-cta" onclick={book}>{"Book an appointment"}</a>
                    <a href={SectionId::Services.fragment()} class="hero-secondary" onclick={explore}>{"See services"}</a>
                </div>
            </div>
            <div class="hero-cards">
                {
                    for GALLERY.iter().take(3).zip(placements.iter()).map(|(item, placement)| html! {
                        <div class="hero-card" key={item.id} style={placement.style()}>
                            <FallbackImage src={item.src} alt={item.title} />
                        </div>
                    })
                }
            </div>
        </section>
    }
}
