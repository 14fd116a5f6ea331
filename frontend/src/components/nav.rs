use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

/// In-page anchors shown in the nav bar and the quick-links card.
pub static SECTION_LINKS: [(&str, &str); 3] = [
    ("#tape", "Tape"),
    ("#photos", "Photos"),
    ("#booking", "Booking"),
];

const SCROLLED_THRESHOLD: f64 = 120.0;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub artist: String,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                            is_scrolled.set(scroll_y > SCROLLED_THRESHOLD);
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

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
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{&props.artist}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTION_LINKS.iter().map(|(href, label)| html! {
                        <a class="nav-link" href={*href} onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </div>
            </div>
        </nav>
    }
}
