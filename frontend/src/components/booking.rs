use std::rc::Rc;

use yew::prelude::*;

use crate::clipboard::mailto_href;
use crate::config::BOOKING_SUBJECT;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct BookingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Booking)]
pub fn booking(props: &BookingProps) -> Html {
    let content = &props.content;
    html! {
        <section class="section" id="booking">
            <div class="card booking-card">
                <div>
                    <h2 class="h2">{"Booking"}</h2>
                    <p class="muted">{content.booking_venues.join(" · ")}</p>
                </div>
                <div class="booking-actions">
                    <a class="btn primary" href={mailto_href(&content.email, Some(BOOKING_SUBJECT))}>
                        {"Email"}
                    </a>
                    <a class="btn ghost" href={content.instagram_url.clone()} target="_blank" rel="noreferrer">
                        {"Instagram"}
                    </a>
                </div>
            </div>
        </section>
    }
}
