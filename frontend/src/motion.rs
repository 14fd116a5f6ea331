use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryList;
use yew::prelude::*;

use crate::config::REDUCED_MOTION_QUERY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPreference {
    Allowed,
    Reduced,
}

impl MotionPreference {
    /// `None` means the browser can't answer the query; motion stays on.
    pub fn from_matches(matches: Option<bool>) -> Self {
        match matches {
            Some(true) => MotionPreference::Reduced,
            Some(false) | None => MotionPreference::Allowed,
        }
    }

    pub fn is_reduced(self) -> bool {
        self == MotionPreference::Reduced
    }
}

/// An externally owned boolean the page can read and watch.
pub trait MotionSignal {
    /// Releases the registration when dropped.
    type Subscription;

    fn current(&self) -> Option<bool>;

    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Option<Self::Subscription>;
}

/// Holds the change registration for as long as the observing component lives.
pub struct MotionObserver<S: MotionSignal> {
    _subscription: Option<S::Subscription>,
}

impl<S: MotionSignal> MotionObserver<S> {
    pub fn activate(
        signal: &S,
        on_change: impl Fn(MotionPreference) + 'static,
    ) -> (MotionPreference, Self) {
        let initial = MotionPreference::from_matches(signal.current());
        let subscription = signal.subscribe(Box::new(move |matches| {
            on_change(MotionPreference::from_matches(Some(matches)))
        }));
        (initial, Self { _subscription: subscription })
    }
}

pub struct MediaQuerySignal {
    list: Option<MediaQueryList>,
}

impl MediaQuerySignal {
    pub fn new(query: &str) -> Self {
        let list = web_sys::window().and_then(|window| window.match_media(query).ok().flatten());
        Self { list }
    }
}

impl MotionSignal for MediaQuerySignal {
    type Subscription = MediaQueryWatch;

    fn current(&self) -> Option<bool> {
        self.list.as_ref().map(MediaQueryList::matches)
    }

    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Option<MediaQueryWatch> {
        let list = self.list.clone()?;
        let watched = list.clone();
        let listener = Closure::<dyn Fn()>::new(move || on_change(watched.matches()));
        // Older engines lack addEventListener on MediaQueryList; treat that as no updates.
        list.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .ok()?;
        Some(MediaQueryWatch { list, listener })
    }
}

pub struct MediaQueryWatch {
    list: MediaQueryList,
    listener: Closure<dyn Fn()>,
}

impl Drop for MediaQueryWatch {
    fn drop(&mut self) {
        let _ = self
            .list
            .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref());
    }
}

/// Tracks `prefers-reduced-motion` for the calling component.
#[hook]
pub fn use_motion_preference() -> MotionPreference {
    let preference = use_state_eq(|| {
        MotionPreference::from_matches(MediaQuerySignal::new(REDUCED_MOTION_QUERY).current())
    });

    {
        let preference = preference.clone();
        use_effect_with_deps(
            move |_| {
                let setter = preference.clone();
                let (current, observer) = MotionObserver::activate(
                    &MediaQuerySignal::new(REDUCED_MOTION_QUERY),
                    move |next| setter.set(next),
                );
                // The setting may have flipped between first render and mount.
                preference.set(current);
                move || drop(observer)
            },
            (),
        );
    }

    *preference
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeSignal {
        value: Option<bool>,
        listeners: Rc<RefCell<Vec<(usize, Rc<dyn Fn(bool)>)>>>,
        next_id: Cell<usize>,
    }

    struct FakeSubscription {
        id: usize,
        listeners: Rc<RefCell<Vec<(usize, Rc<dyn Fn(bool)>)>>>,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }

    impl FakeSignal {
        fn available(value: bool) -> Self {
            Self { value: Some(value), ..Self::default() }
        }

        fn notify(&self, matches: bool) {
            let listeners: Vec<_> = self.listeners.borrow().iter().map(|(_, f)| f.clone()).collect();
            for listener in listeners {
                listener(matches);
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl MotionSignal for FakeSignal {
        type Subscription = FakeSubscription;

        fn current(&self) -> Option<bool> {
            self.value
        }

        fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Option<FakeSubscription> {
            self.value?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, Rc::from(on_change)));
            Some(FakeSubscription { id, listeners: self.listeners.clone() })
        }
    }

    #[test]
    fn initial_state_comes_from_first_read() {
        let (initial, _observer) = MotionObserver::activate(&FakeSignal::available(true), |_| {});
        assert_eq!(initial, MotionPreference::Reduced);

        let (initial, _observer) = MotionObserver::activate(&FakeSignal::available(false), |_| {});
        assert_eq!(initial, MotionPreference::Allowed);
    }

    #[test]
    fn missing_capability_means_motion_allowed() {
        let signal = FakeSignal::default();
        let (initial, _observer) = MotionObserver::activate(&signal, |_| {});
        assert_eq!(initial, MotionPreference::Allowed);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn change_notifications_drive_transitions() {
        let signal = FakeSignal::available(false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let (_, _observer) = MotionObserver::activate(&signal, move |p| sink.borrow_mut().push(p));

        signal.notify(true);
        signal.notify(false);

        assert_eq!(
            *seen.borrow(),
            [MotionPreference::Reduced, MotionPreference::Allowed]
        );
    }

    #[test]
    fn dropping_observer_releases_registration() {
        let signal = FakeSignal::available(false);
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let (_, observer) = MotionObserver::activate(&signal, move |_| counter.set(counter.get() + 1));
        assert_eq!(signal.listener_count(), 1);

        drop(observer);
        signal.notify(true);

        assert_eq!(signal.listener_count(), 0);
        assert_eq!(calls.get(), 0);
    }
}
