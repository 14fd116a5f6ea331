use yew::prelude::*;

use crate::content::MediaClip;

#[derive(Properties, PartialEq)]
pub struct ClipEmbedProps {
    pub clip: MediaClip,
    #[prop_or_default]
    pub featured: bool,
}

#[function_component(ClipEmbed)]
pub fn clip_embed(props: &ClipEmbedProps) -> Html {
    let clip = &props.clip;
    html! {
        <div class={classes!("card", "clip-card", (!props.featured).then(|| "clip-card-small"))}>
            <div class={classes!("ratio-16x9", props.featured.then(|| "ratio-featured"))}>
                <iframe
                    src={clip.url.clone()}
                    title={clip.title.clone()}
                    allow="accelerometer; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                    allowfullscreen={true}
                />
            </div>
            if !clip.note.is_empty() {
                <p class="clip-note muted">{&clip.note}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeaturedTapeProps {
    pub clip: MediaClip,
}

#[function_component(FeaturedTape)]
pub fn featured_tape(props: &FeaturedTapeProps) -> Html {
    html! {
        <section class="section" id="tape">
            <div class="section-header">
                <h2 class="h2">{"Featured tape"}</h2>
                <p class="muted">{"This is the one to watch."}</p>
            </div>
            <ClipEmbed clip={props.clip.clone()} featured={true} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct MoreClipsProps {
    pub clips: Vec<MediaClip>,
}

#[function_component(MoreClips)]
pub fn more_clips(props: &MoreClipsProps) -> Html {
    if props.clips.is_empty() {
        return html! {};
    }

    html! {
        <section class="section afterthought-section">
            <div class="section-header">
                <h3 class="h3">{"More clips"}</h3>
            </div>
            <div class="grid-2">
                { for props.clips.iter().map(|clip| html! {
                    <ClipEmbed key={clip.url.clone()} clip={clip.clone()} />
                }) }
            </div>
        </section>
    }
}
