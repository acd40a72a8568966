use yew::prelude::*;

pub mod config;

pub mod components {
    pub mod carousel;
    pub mod comparison_slider;
    pub mod header;
    pub mod notification;
}

pub mod form {
    pub mod contact_form;
    pub mod record;
    pub mod submission;
    pub mod upload;
    pub mod validation;
}

pub mod pages {
    pub mod landing;
}

pub mod slider {
    pub mod board;
    pub mod geometry;
}

pub mod utils {
    pub mod api;
    pub mod dom;
}

use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! { <Landing /> }
}
