use yew::prelude::*;

use crate::config;
use crate::scroll::SectionId;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub theme: Theme,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let links = [
        (SectionId::Services, "Services"),
        (SectionId::Gallery, "Gallery"),
        (SectionId::Team, "Team"),
    ];

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href="/"><img src={props.theme.logo()} alt={format!("{} logo", config::SALON_NAME)} /></a>
                    <p>{"Premium hair care and styling for everyone."}</p>
                </div>
                <div>
                    <h3>{"Navigation"}</h3>
                    // plain anchors; the page-wide anchor handler eases these
                    <ul>
                        {
                            for links.iter().map(|(section, label)| html! {
                                <li key={section.as_str()}><a href={section.fragment()} data-easing="ease-out">{*label}</a></li>
                            })
                        }
                    </ul>
                </div>
                <div>
                    <h3>{"Connect"}</h3>
                    <ul>
                        <li><a href={config::whatsapp_url(None)} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a></li>
                        <li><a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a></li>
                        <li><a href={config::TIKTOK_URL} target="_blank" rel="noopener noreferrer">{"TikTok"}</a></li>
                        <li><a href={config::tel_url()}>{config::SALON_PHONE_DISPLAY}</a></li>
                    </ul>
                </div>
            </div>
            <p class="footer-copyright">{format!("© 2025 {}. All rights reserved.", config::SALON_NAME)}</p>
        </footer>
    }
}
