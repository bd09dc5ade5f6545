use yew::prelude::*;

use crate::components::media::FallbackVideo;
use crate::components::section_transition::{EntranceVariant, SectionTransition};
use crate::content::{Testimonial, PLACEHOLDER_IMAGE, TESTIMONIALS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Written,
    Video,
}

fn stars(rating: u8) -> String {
    (0..5).map(|i| if i < rating { '★' } else { '☆' }).collect()
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let tab = use_state(|| Tab::Written);

    let select = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };

    let written = |t: &Testimonial| {
        html! {
            <blockquote key={t.id} class="testimonial">
                <p>{t.quote}</p>
                <footer>
                    <span class="testimonial-name">{t.name}</span>
                    <span class="testimonial-rating" aria-label={format!("{} out of 5", t.rating)}>{stars(t.rating)}</span>
                </footer>
            </blockquote>
        }
    };

    let video = |t: &Testimonial| match t.video {
        Some(src) => html! {
            <figure key={t.id} class="testimonial-video">
                <FallbackVideo src={src} poster={PLACEHOLDER_IMAGE} />
                <figcaption>{t.name}</figcaption>
            </figure>
        },
        None => html! {},
    };

    html! {
        <section class="testimonials">
            <SectionTransition variant={EntranceVariant::FadeUp}>
                <h2>{"What clients say"}</h2>
                <div class="tabs" role="tablist">
                    <button class={classes!("tab", (*tab == Tab::Written).then(|| "active"))} onclick={select(Tab::Written)}>
                        {"Reviews"}
                    </button>
                    <button class={classes!("tab", (*tab == Tab::Video).then(|| "active"))} onclick={select(Tab::Video)}>
                        {"Videos"}
                    </button>
                </div>
                <div class="testimonial-list">
                    {
                        match *tab {
                            Tab::Written => TESTIMONIALS.iter().map(written).collect::<Html>(),
                            Tab::Video => TESTIMONIALS.iter().map(video).collect::<Html>(),
                        }
                    }
                </div>
            </SectionTransition>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }
}
