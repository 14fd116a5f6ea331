use std::rc::Rc;

use yew::prelude::*;

use crate::clipboard::mailto_href;
use crate::components::copy_email::CopyEmailButton;
use crate::components::nav::SECTION_LINKS;
use crate::config::BOOKING_SUBJECT;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct QuickLinksProps {
    pub content: Rc<SiteContent>,
}

#[function_component(QuickLinks)]
pub fn quick_links(props: &QuickLinksProps) -> Html {
    let content = &props.content;
    html! {
        <section class="section">
            <div class="card quick-links">
                <h3 class="h3">{"Quick links"}</h3>
                <div class="quick-links-row">
                    { for SECTION_LINKS.iter().map(|(href, label)| html! {
                        <a class="btn ghost" href={*href}>{*label}</a>
                    }) }
                </div>
                <div class="quick-links-row">
                    <a class="btn primary" href={mailto_href(&content.email, Some(BOOKING_SUBJECT))}>
                        {&content.email}
                    </a>
                    <CopyEmailButton email={content.email.clone()} />
                    <a class="btn ghost" href={content.instagram_url.clone()} target="_blank" rel="noreferrer">
                        {&content.instagram_handle}
                    </a>
                </div>
            </div>
        </section>
    }
}
