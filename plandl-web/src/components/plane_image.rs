use crate::game::ImageFrame;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct Props {
    pub frame: ImageFrame,
}

/// Cropped, zoomed, and blurred view of the day's photo.
#[function_component(PlaneImage)]
pub fn plane_image(p: &Props) -> Html {
    html! {
        <div
            id="plane-image"
            class="plane-image"
            role="img"
            aria-label="Mystery aircraft"
            style={p.frame.style()}
        />
    }
}
