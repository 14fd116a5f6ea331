use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::components::{
    booking::Booking,
    clips::{FeaturedTape, MoreClips},
    hero::Hero,
    nav::Nav,
    photos::PressPhotos,
    quick_links::QuickLinks,
    subscribe::Subscribe,
};
use crate::content::SiteContent;
use crate::motion::use_motion_preference;

#[function_component(PressKit)]
pub fn press_kit() -> Html {
    // Read before the hero mounts so its first render already respects the setting
    let motion = use_motion_preference();

    let loaded = use_memo(
        |_| match SiteContent::embedded() {
            Ok(content) => {
                let gallery = content.gallery();
                Some((Rc::new(content), gallery))
            }
            Err(err) => {
                error!("{}", err);
                None
            }
        },
        (),
    );

    let Some((content, gallery)) = (*loaded).clone() else {
        return html! {
            <div class="page">
                <p class="container muted">{"This page is temporarily unavailable."}</p>
            </div>
        };
    };

    let layout = &content.layout;

    html! {
        <div class="page">
            <style>
                {r#"
                    :root {
                        --bg: #0b0b0f;
                        --card: rgba(255, 255, 255, 0.06);
                        --border: rgba(255, 255, 255, 0.12);
                        --text: #f5f5f7;
                        --muted: rgba(245, 245, 247, 0.65);
                        --accent: #ffcc33;
                    }
                    body {
                        margin: 0;
                        background: var(--bg);
                        color: var(--text);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .container {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1.25rem;
                    }
                    .muted { color: var(--muted); }
                    .h2 { font-size: 2rem; margin: 0 0 0.5rem; }
                    .h3 { font-size: 1.25rem; margin: 0 0 0.5rem; }
                    .card {
                        background: var(--card);
                        border: 1px solid var(--border);
                        border-radius: 18px;
                        padding: 1rem;
                    }
                    .btn {
                        display: inline-flex;
                        align-items: center;
                        padding: 0.7rem 1.2rem;
                        border-radius: 999px;
                        border: 1px solid var(--border);
                        background: rgba(255, 255, 255, 0.08);
                        color: var(--text);
                        font: inherit;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .btn.primary { background: var(--accent); color: #111; border-color: var(--accent); }
                    .btn.ghost { background: transparent; }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 10;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled { background: rgba(11, 11, 15, 0.9); backdrop-filter: blur(10px); }
                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem 1.25rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo, .nav-link { color: var(--text); text-decoration: none; }
                    .nav-logo { font-weight: 700; }
                    .nav-right { display: flex; gap: 1.5rem; }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span { display: block; width: 22px; height: 2px; margin: 5px 0; background: var(--text); }

                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }
                    .hero-video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(180deg, rgba(0,0,0,0.35), var(--bg));
                    }
                    .hero-content { position: relative; text-align: center; padding-top: 6rem; padding-bottom: 3rem; }
                    .badge {
                        display: inline-block;
                        padding: 0.3rem 0.8rem;
                        border: 1px solid var(--border);
                        border-radius: 999px;
                        font-size: 0.8rem;
                        letter-spacing: 0.08em;
                        text-transform: uppercase;
                    }
                    .name { font-size: clamp(2.5rem, 8vw, 5rem); margin: 1rem 0 0.5rem; }
                    .subline { font-size: 1.2rem; color: var(--muted); }
                    .cta-row { display: flex; flex-wrap: wrap; gap: 0.75rem; justify-content: center; margin: 1.5rem 0; }
                    .stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.75rem; }
                    .stat { background: var(--card); border: 1px solid var(--border); border-radius: 14px; padding: 0.75rem; }
                    .stat-top { font-weight: 700; }
                    .stat-bottom { font-size: 0.85rem; color: var(--muted); }

                    .section { padding: 3rem 0; }
                    .section-header { text-align: center; margin-bottom: 1.5rem; }
                    .ratio-16x9 { position: relative; aspect-ratio: 16 / 9; }
                    .ratio-16x9 iframe { position: absolute; inset: 0; width: 100%; height: 100%; border: 0; border-radius: 12px; }
                    .ratio-featured { max-width: 900px; margin: 0 auto; }
                    .clip-note { margin: 0.75rem 0 0; font-size: 0.9rem; }
                    .grid-2 { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
                    .subscribe { display: flex; justify-content: center; margin-top: 1.5rem; }
                    .subscribe-button { background: #ff0000; border-color: #ff0000; }

                    .bio p { max-width: 720px; margin: 0 auto 1rem; line-height: 1.6; }

                    .photo-scroller {
                        display: flex;
                        gap: 0.75rem;
                        overflow-x: auto;
                        scroll-snap-type: x mandatory;
                    }
                    .photo-scroller .photo { flex: 0 0 75%; scroll-snap-align: center; }
                    .photo-grid { display: none; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; }
                    .photo img { width: 100%; aspect-ratio: 4 / 5; object-fit: cover; border-radius: 12px; display: block; }
                    .photo-placeholder { text-align: center; }

                    .booking-card, .quick-links { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: space-between; align-items: center; }
                    .quick-links { flex-direction: column; align-items: stretch; }
                    .booking-actions, .quick-links-row { display: flex; flex-wrap: wrap; gap: 0.75rem; }

                    @media (min-width: 769px) {
                        .photo-scroller { display: none; }
                        .photo-grid { display: grid; }
                    }
                    @media (max-width: 768px) {
                        .stats { grid-template-columns: repeat(2, 1fr); }
                        .grid-2 { grid-template-columns: 1fr; }
                        .burger-menu { display: block; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1rem 1.25rem;
                            background: rgba(11, 11, 15, 0.95);
                        }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .top-nav { transition: none; }
                        .photo-scroller { scroll-behavior: auto; }
                    }
                "#}
            </style>

            if layout.nav {
                <Nav artist={content.artist.clone()} />
            }

            <Hero content={content.clone()} {motion} />

            <main class="container">
                if layout.quick_links {
                    <QuickLinks content={content.clone()} />
                }

                <FeaturedTape clip={content.featured_tape.clone()} />
                if let Some(url) = content.subscribe_url() {
                    <Subscribe {url} />
                }

                <MoreClips clips={content.clips.clone()} />

                if !content.bio.is_empty() {
                    <section class="section bio" id="bio">
                        <div class="section-header">
                            <h2 class="h2">{"About"}</h2>
                        </div>
                        { for content.bio.iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
                    </section>
                }

                <PressPhotos {gallery} />

                <Booking content={content.clone()} />
            </main>
        </div>
    }
}
