use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use log::debug;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::COPY_CONFIRMATION_MS;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>>;
}

pub trait MailComposer {
    fn compose(&self, href: &str);
}

pub fn mailto_href(email: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!("mailto:{}?subject={}", email, urlencoding::encode(subject)),
        None => format!("mailto:{}", email),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    ComposeFallback,
    /// The write failed after the caller went away; nothing was opened.
    Abandoned,
}

/// Copies `email`, or sends the visitor to their mail client when the
/// clipboard is missing or refuses the write. Never fails.
///
/// `still_live` is checked after the write settles; the mail client is only
/// opened while it returns `true`.
pub async fn copy_or_compose<C, M>(
    clipboard: Option<&C>,
    mail: &M,
    email: &str,
    still_live: impl FnOnce() -> bool,
) -> CopyOutcome
where
    C: ClipboardWriter + ?Sized,
    M: MailComposer + ?Sized,
{
    let written = match clipboard {
        Some(clipboard) => clipboard.write_text(email).await,
        None => Err(ClipboardError::Unavailable),
    };

    match written {
        Ok(()) => CopyOutcome::Copied,
        Err(err) if !still_live() => {
            debug!("Copy failed after the button went away: {}", err);
            CopyOutcome::Abandoned
        }
        Err(err) => {
            debug!("Copy failed, falling back to mail client: {}", err);
            mail.compose(&mailto_href(email, None));
            CopyOutcome::ComposeFallback
        }
    }
}

/// Identifies one armed reset; only the latest ticket may clear the confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// "Copied!" state plus the handle of its pending reset timer.
///
/// `H` is the timer handle; dropping it must cancel the timer
/// (`gloo_timers::callback::Timeout` does).
#[derive(Debug)]
pub struct CopyConfirmation<H> {
    confirmed: bool,
    latest: u64,
    armed: Option<H>,
    torn_down: bool,
}

impl<H> Default for CopyConfirmation<H> {
    fn default() -> Self {
        Self {
            confirmed: false,
            latest: 0,
            armed: None,
            torn_down: false,
        }
    }
}

impl<H> CopyConfirmation<H> {
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn is_live(&self) -> bool {
        !self.torn_down
    }

    /// Marks the copy confirmed and arms a new reset, cancelling the previous
    /// one. Returns `false` without arming anything once torn down.
    pub fn confirm(&mut self, arm: impl FnOnce(ResetTicket) -> H) -> bool {
        if self.torn_down {
            return false;
        }
        self.armed.take();
        self.latest += 1;
        self.confirmed = true;
        self.armed = Some(arm(ResetTicket(self.latest)));
        true
    }

    /// Called when a reset timer fires. Returns whether the state changed.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if self.torn_down || ticket.0 != self.latest || !self.confirmed {
            return false;
        }
        // The fired handle stays in `armed`: it may be the closure running right now.
        self.confirmed = false;
        true
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.confirmed = false;
        self.armed.take();
    }
}

/// Records a successful copy and arms its reset through `schedule`.
///
/// `schedule(delay_ms, callback)` returns a handle that cancels the callback
/// when dropped. `on_change` receives the confirmation state whenever it flips.
pub fn confirm_copy<H: 'static>(
    confirmation: &Rc<RefCell<CopyConfirmation<H>>>,
    schedule: impl FnOnce(u32, Box<dyn FnOnce()>) -> H,
    on_change: impl Fn(bool) + 'static,
) {
    let on_change = Rc::new(on_change);
    let weak = Rc::downgrade(confirmation);
    let notify = on_change.clone();
    let armed = confirmation.borrow_mut().confirm(|ticket| {
        schedule(
            COPY_CONFIRMATION_MS,
            Box::new(move || {
                let Some(confirmation) = weak.upgrade() else {
                    return;
                };
                let expired = confirmation.borrow_mut().expire(ticket);
                if expired {
                    notify(false);
                }
            }),
        )
    });
    if armed {
        on_change(confirmation.borrow().is_confirmed());
    }
}

pub struct BrowserClipboard {
    inner: web_sys::Clipboard,
}

impl BrowserClipboard {
    /// `navigator.clipboard` is undefined outside secure contexts.
    pub fn detect() -> Option<Self> {
        let navigator = web_sys::window()?.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return None;
        }
        clipboard
            .dyn_into::<web_sys::Clipboard>()
            .ok()
            .map(|inner| Self { inner })
    }
}

impl ClipboardWriter for BrowserClipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>> {
        let promise = self.inner.write_text(text);
        Box::pin(async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| ClipboardError::Rejected(format!("{:?}", err)))
        })
    }
}

pub struct BrowserMail;

impl MailComposer for BrowserMail {
    fn compose(&self, href: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
}
