use yew::prelude::*;

use crate::components::section_transition::{EntranceVariant, SectionTransition};
use crate::config;

const OPENING_HOURS: [(&str, &str); 3] = [
    ("Mon - Fri", "9AM - 7PM"),
    ("Sat", "10AM - 6PM"),
    ("Sun", "Closed"),
];

#[function_component(Booking)]
pub fn booking() -> Html {
    let whatsapp = config::whatsapp_url(Some(config::BOOKING_MESSAGE));

    html! {
        <section id="booking" class="booking">
            <div class="booking-grid">
                <SectionTransition variant={EntranceVariant::FadeUp} class="booking-card">
                    <h2>{"Ready to transform?"}</h2>
                    <p>
                        {format!(
                            "Book your appointment today and discover {}. Our stylists are ready to give you the look you deserve.",
                            config::SALON_NAME
                        )}
                    </p>
                    <a href={whatsapp} target="_blank" rel="noopener noreferrer" class="booking-cta">
                        {"Book on WhatsApp →"}
                    </a>
                    <a href={config::tel_url()} class="booking-call">
                        {format!("or call {}", config::SALON_PHONE_DISPLAY)}
                    </a>
                    <p class="booking-note">{"We'll respond within 24 hours with available times."}</p>
                </SectionTransition>
                <SectionTransition variant={EntranceVariant::FadeLeft} delay={120} class="booking-hours">
                    <h3>{"Opening hours"}</h3>
                    <ul>
                        {
                            for OPENING_HOURS.iter().map(|(days, hours)| html! {
                                <li key={*days}><span>{*days}</span><span>{*hours}</span></li>
                            })
                        }
                    </ul>
                </SectionTransition>
            </div>
        </section>
    }
}
