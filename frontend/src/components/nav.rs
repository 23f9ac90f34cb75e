use yew::prelude::*;
use web_sys::MouseEvent;

pub const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("abstract", "Abstract"),
    ("methods", "Methods"),
    ("results", "Results"),
    ("acknowledgment", "Thanks"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Link clicks themselves are handled by the coordinator; this only
    // folds the mobile menu away.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"Project"}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        SECTIONS.iter().map(|(id, label)| html! {
                            <div onclick={close_menu.clone()}>
                                <a href={format!("#{}", id)} class="nav-link" data-section={*id}>
                                    {*label}
                                </a>
                            </div>
                        }).collect::<Html>()
                    }
                    <button id="darkModeToggle" class="theme-toggle" aria-label="Toggle theme">
                        <span class="theme-icon">{"☀️"}</span>
                    </button>
                </div>
            </div>
            <div class="scroll-progress"></div>
        </nav>
    }
}
