use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::clipboard::{
    confirm_copy, copy_or_compose, BrowserClipboard, BrowserMail, CopyConfirmation, CopyOutcome,
};

#[derive(Properties, PartialEq)]
pub struct CopyEmailButtonProps {
    pub email: String,
}

#[function_component(CopyEmailButton)]
pub fn copy_email_button(props: &CopyEmailButtonProps) -> Html {
    let copied = use_state_eq(|| false);
    let confirmation = use_mut_ref(CopyConfirmation::<Timeout>::default);

    // Unmount: drop the pending reset and ignore clipboard results still in flight
    {
        let confirmation = confirmation.clone();
        use_effect_with_deps(
            move |_| move || confirmation.borrow_mut().teardown(),
            (),
        );
    }

    let onclick = {
        let copied = copied.clone();
        let confirmation = confirmation.clone();
        let email = props.email.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let copied = copied.clone();
            let confirmation = confirmation.clone();
            let email = email.clone();
            spawn_local(async move {
                let clipboard = BrowserClipboard::detect();
                let outcome = copy_or_compose(clipboard.as_ref(), &BrowserMail, &email, || {
                    confirmation.borrow().is_live()
                })
                .await;
                if outcome == CopyOutcome::Copied {
                    confirm_copy(
                        &confirmation,
                        |delay, reset| Timeout::new(delay, reset),
                        move |confirmed| copied.set(confirmed),
                    );
                }
            });
        })
    };

    html! {
        <button class="btn" {onclick}>
            { if *copied { "Copied!" } else { "Copy email" } }
        </button>
    }
}
