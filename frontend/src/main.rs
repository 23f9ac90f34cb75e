use log::info;
use yew::prelude::*;

mod config;
mod coordinator;
mod dom;
mod error;
mod frame;
mod hooks;
mod navigation;
mod overlay;
mod parallax;
mod reveal;
mod scroll_top;
mod scrollspy;
mod scrub;
mod theme;
mod timeline;
mod typing;

mod components {
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use hooks::use_coordinator;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // Parent effects run after the children have rendered, so the whole
    // page is in the DOM by the time the coordinator looks for it.
    use_coordinator();

    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting showcase");
    yew::Renderer::<App>::new().render();
}
