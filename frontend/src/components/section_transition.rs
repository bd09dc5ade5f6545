use yew::prelude::*;

use crate::hooks::{use_section_visibility, VisibilityOptions};
use crate::scroll::{VisibilityMode, VisibilityPhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EntranceVariant {
    Fade,
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Zoom,
    Blur,
}

impl EntranceVariant {
    pub fn class(self) -> &'static str {
        match self {
            EntranceVariant::Fade => "entrance-fade",
            EntranceVariant::FadeUp => "entrance-fade-up",
            EntranceVariant::FadeDown => "entrance-fade-down",
            EntranceVariant::FadeLeft => "entrance-fade-left",
            EntranceVariant::FadeRight => "entrance-fade-right",
            EntranceVariant::Zoom => "entrance-zoom",
            EntranceVariant::Blur => "entrance-blur",
        }
    }
}

pub fn phase_class(phase: VisibilityPhase) -> &'static str {
    match phase {
        VisibilityPhase::NotObserved | VisibilityPhase::Pending => "is-pending",
        VisibilityPhase::Visible => "is-visible",
        VisibilityPhase::Blurred => "is-visible is-blurred",
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTransitionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub variant: EntranceVariant,
    #[prop_or(800)]
    pub duration: u32,
    #[prop_or(0)]
    pub delay: u32,
    /// Blur when scrolled past upwards and replay on the way back.
    #[prop_or(true)]
    pub retrigger: bool,
}

#[function_component(SectionTransition)]
pub fn section_transition(props: &SectionTransitionProps) -> Html {
    let node = use_node_ref();
    let options = VisibilityOptions {
        mode: if props.retrigger { VisibilityMode::Retrigger } else { VisibilityMode::Once },
        delay_ms: props.delay,
        reveal_at_mount: props.variant == EntranceVariant::Fade && props.delay == 0,
    };
    let phase = use_section_visibility(node.clone(), options);

    html! {
        <div
            ref={node}
            class={classes!("entrance", props.variant.class(), phase_class(phase), props.class.clone())}
            style={format!("transition-duration: {}ms;", props.duration)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blurred_sections_keep_their_visible_class() {
        assert_eq!(phase_class(VisibilityPhase::Blurred), "is-visible is-blurred");
        assert_eq!(phase_class(VisibilityPhase::NotObserved), "is-pending");
    }
}
