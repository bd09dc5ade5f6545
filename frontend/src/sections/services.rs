use yew::prelude::*;

use crate::components::section_transition::{EntranceVariant, SectionTransition};
use crate::content::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    let focused = use_state(|| None::<usize>);

    html! {
        <section id="services" class="services">
            <SectionTransition variant={EntranceVariant::FadeUp}>
                <h2>{"Services"}</h2>
                <p class="section-subtitle">{"Everything your hair needs, under one roof."}</p>
                <div class="services-grid">
                    {
                        for SERVICES.iter().enumerate().map(|(index, service)| {
                            let is_focused = *focused == Some(index);
                            let onclick = {
                                let focused = focused.clone();
                                Callback::from(move |_: MouseEvent| {
                                    focused.set(if is_focused { None } else { Some(index) })
                                })
                            };
                            html! {
                                <SectionTransition
                                    key={service.name}
                                    variant={EntranceVariant::Zoom}
                                    delay={(index as u32) * 80}
                                    retrigger={false}
                                >
                                    <article class={classes!("service-card", is_focused.then(|| "focused"))} {onclick}>
                                        <h3>{service.name}</h3>
                                        <p>{service.description}</p>
                                        <span class="service-price">{service.price}</span>
                                    </article>
                                </SectionTransition>
                            }
                        })
                    }
                </div>
            </SectionTransition>
        </section>
    }
}
