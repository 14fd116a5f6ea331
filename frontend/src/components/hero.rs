use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::clipboard::mailto_href;
use crate::components::copy_email::CopyEmailButton;
use crate::config::BOOKING_SUBJECT;
use crate::content::SiteContent;
use crate::motion::MotionPreference;
use crate::playback::{play_best_effort, AutoplayGate, HeroBackdrop};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: Rc<SiteContent>,
    pub motion: MotionPreference,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let video_ref = use_node_ref();
    let autoplay = use_mut_ref(AutoplayGate::default);

    // Runs after the render that mounted (or removed) the video element
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |motion| {
                let video = video_ref.cast::<HtmlMediaElement>();
                if autoplay.borrow_mut().should_attempt(*motion, video.is_some()) {
                    if let Some(video) = video {
                        spawn_local(async move { play_best_effort(&video).await });
                    }
                }
                || ()
            },
            props.motion,
        );
    }

    let content = &props.content;
    let backdrop = match HeroBackdrop::for_preference(props.motion, &content.hero) {
        HeroBackdrop::Video { src, poster } => html! {
            <video
                ref={video_ref}
                class="hero-video"
                {src}
                {poster}
                autoplay={true}
                muted={true}
                loop={true}
                playsinline={true}
            />
        },
        HeroBackdrop::Still { src } => html! {
            <img class="hero-video" {src} alt="" />
        },
    };

    html! {
        <header class="hero">
            { backdrop }
            <div class="hero-overlay"></div>

            <div class="container hero-content">
                <div class="badge">{&content.badge}</div>
                <h1 class="name">
                    <span class="name-font">{&content.artist}</span>
                </h1>
                <p class="subline">{&content.tagline}</p>

                <div class="cta-row">
                    <a class="btn primary" href={mailto_href(&content.email, Some(BOOKING_SUBJECT))}>
                        {"Book now"}
                    </a>
                    <CopyEmailButton email={content.email.clone()} />
                    <a
                        class="btn ghost"
                        href={content.instagram_url.clone()}
                        target="_blank"
                        rel="noreferrer"
                    >
                        {&content.instagram_handle}
                    </a>
                </div>

                <div class="stats">
                    { for content.stats.iter().map(|stat| html! {
                        <div class="stat" key={stat.headline.clone()}>
                            <div class="stat-top">{&stat.headline}</div>
                            <div class="stat-bottom">{&stat.caption}</div>
                        </div>
                    }) }
                </div>
            </div>
        </header>
    }
}
