use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SubscribeProps {
    pub url: String,
}

#[function_component(Subscribe)]
pub fn subscribe(props: &SubscribeProps) -> Html {
    html! {
        <div class="subscribe">
            <a class="btn subscribe-button" href={props.url.clone()} target="_blank" rel="noreferrer">
                {"Subscribe on YouTube"}
            </a>
        </div>
    }
}
