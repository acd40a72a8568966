use crate::slider::board::SliderId;
use crate::slider::geometry::{clip_path, handle_left};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct ComparisonImages {
    pub before_src: &'static str,
    pub after_src: &'static str,
    pub alt: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ComparisonSliderProps {
    pub id: SliderId,
    pub images: ComparisonImages,
    pub reveal: f64,
    /// Attached to the base image so the owner can measure it.
    pub image_ref: NodeRef,
    pub on_grab: Callback<SliderId>,
    pub on_jump: Callback<(SliderId, f64)>,
}

/// Before/after pair with a draggable handle. Drag state lives with the
/// owner; this component only reports grabs and clicks.
#[function_component(ComparisonSlider)]
pub fn comparison_slider(props: &ComparisonSliderProps) -> Html {
    let id = props.id;

    let onmousedown = {
        let on_grab = props.on_grab.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_grab.emit(id);
        })
    };
    let ontouchstart = {
        let on_grab = props.on_grab.clone();
        Callback::from(move |e: TouchEvent| {
            e.prevent_default();
            on_grab.emit(id);
        })
    };
    let onclick = {
        let on_jump = props.on_jump.clone();
        Callback::from(move |e: MouseEvent| on_jump.emit((id, e.client_x() as f64)))
    };

    let images = &props.images;
    html! {
        <div class="comparison-slider">
            <img class="comparison-image" ref={props.image_ref.clone()} src={images.before_src}
                alt={format!("{} (before)", images.alt)} draggable="false" onclick={onclick} />
            <div class="after-image" style={format!("clip-path: {}; pointer-events: none;", clip_path(props.reveal))}>
                <img src={images.after_src} alt={format!("{} (after)", images.alt)} draggable="false" />
            </div>
            <div class="slider-handle" style={format!("left: {}; cursor: ew-resize;", handle_left(props.reveal))}
                onmousedown={onmousedown} ontouchstart={ontouchstart}>
                <span class="slider-grip">{"⇔"}</span>
            </div>
        </div>
    }
}
