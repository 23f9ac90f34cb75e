use yew::prelude::*;

use crate::config::CoordinatorConfig;
use crate::coordinator::Coordinator;

#[hook]
pub fn use_coordinator() {
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().and_then(|w| w.document());
            let coordinator = Coordinator::init(CoordinatorConfig::load(document.as_ref()));
            move || {
                if let Some(coordinator) = coordinator {
                    coordinator.teardown();
                }
            }
        },
        (), // run once on mount
    );
}
