use yew::prelude::*;

use crate::components::lightbox::Lightbox;
use crate::components::media::FallbackImage;
use crate::components::section_transition::{EntranceVariant, SectionTransition};
use crate::content::GALLERY;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let open_at = use_state(|| None::<usize>);

    let on_close = {
        let open_at = open_at.clone();
        Callback::from(move |_| open_at.set(None))
    };

    html! {
        <section id="gallery" class="gallery">
            <SectionTransition variant={EntranceVariant::FadeUp}>
                <h2>{"Gallery"}</h2>
                <p class="section-subtitle">{"Recent work from the studio chair."}</p>
                <div class="gallery-grid">
                    {
                        for GALLERY.iter().enumerate().map(|(index, item)| {
                            let onclick = {
                                let open_at = open_at.clone();
                                Callback::from(move |_: MouseEvent| open_at.set(Some(index)))
                            };
                            html! {
                                <button key={item.id} class={classes!("gallery-tile", item.size.class())} {onclick}>
                                    <FallbackImage src={item.src} alt={item.title} />
                                </button>
                            }
                        })
                    }
                </div>
            </SectionTransition>
            {
                match *open_at {
                    Some(index) => html! {
                        <Lightbox items={GALLERY.to_vec()} start_index={index} {on_close} />
                    },
                    None => html! {},
                }
            }
        </section>
    }
}
