use yew::prelude::*;
use log::info;

mod config;
mod components {
    pub mod chat_widget;
    pub mod cta;
    pub mod lead_form;
    pub mod reveal;
}
mod lead {
    pub mod models;
    pub mod submission;
    pub mod validation;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
