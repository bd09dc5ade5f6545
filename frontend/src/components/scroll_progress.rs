use yew::prelude::*;

use crate::hooks::use_scroll_store;

#[derive(Properties, PartialEq)]
pub struct ScrollProgressProps {
    #[prop_or(AttrValue::Static("oklch(0.67 0.16 290)"))]
    pub color: AttrValue,
    #[prop_or(3)]
    pub height: u32,
    #[prop_or(true)]
    pub glow: bool,
}

#[function_component(ScrollProgress)]
pub fn scroll_progress(props: &ScrollProgressProps) -> Html {
    let progress = use_scroll_store().progress();

    html! {
        <div class={classes!("scroll-progress", (progress <= 0.0).then(|| "scroll-progress-idle"))}>
            <div class="scroll-progress-track" style={format!("height: {}px;", props.height)}>
                <div
                    class={classes!("scroll-progress-bar", props.glow.then(|| "glow"))}
                    style={format!("width: {:.2}%; background-color: {c}; color: {c};", progress, c = props.color)}
                ></div>
            </div>
        </div>
    }
}
