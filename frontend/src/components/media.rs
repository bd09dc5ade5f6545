use log::debug;
use yew::prelude::*;

use crate::content::PLACEHOLDER_IMAGE;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image that swaps to the placeholder when it fails to decode.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state(|| false);
    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            if !*failed {
                debug!("image {} failed, using placeholder", src);
                failed.set(true);
            }
        })
    };
    let src = if *failed { AttrValue::Static(PLACEHOLDER_IMAGE) } else { props.src.clone() };

    html! {
        <img {src} alt={props.alt.clone()} class={props.class.clone()} loading="lazy" {onerror} />
    }
}

#[derive(Properties, PartialEq)]
pub struct FallbackVideoProps {
    pub src: AttrValue,
    pub poster: AttrValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VideoStatus {
    Loading,
    Ready,
    Failed,
}

/// Video with a spinner while buffering and a static poster if it cannot
/// be played.
#[function_component(FallbackVideo)]
pub fn fallback_video(props: &FallbackVideoProps) -> Html {
    let status = use_state(|| VideoStatus::Loading);

    let onloadeddata = {
        let status = status.clone();
        Callback::from(move |_: Event| status.set(VideoStatus::Ready))
    };
    let onerror = {
        let status = status.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            debug!("video {} failed to load", src);
            status.set(VideoStatus::Failed);
        })
    };

    if *status == VideoStatus::Failed {
        return html! {
            <div class="video-fallback">
                <img src={props.poster.clone()} alt="Video unavailable" />
                <p>{"Video unavailable"}</p>
            </div>
        };
    }

    html! {
        <div class="video-frame">
            if *status == VideoStatus::Loading {
                <div class="video-spinner"></div>
            }
            <video
                src={props.src.clone()}
                poster={props.poster.clone()}
                controls={true}
                playsinline={true}
                preload="metadata"
                {onloadeddata}
                {onerror}
            />
        </div>
    }
}
