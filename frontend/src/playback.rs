use futures::future::LocalBoxFuture;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

use crate::content::HeroMedia;
use crate::motion::MotionPreference;

/// What the hero banner shows for a given motion preference.
#[derive(Clone, Debug, PartialEq)]
pub enum HeroBackdrop {
    Video { src: String, poster: String },
    Still { src: String },
}

impl HeroBackdrop {
    pub fn for_preference(preference: MotionPreference, media: &HeroMedia) -> Self {
        match preference {
            MotionPreference::Allowed => HeroBackdrop::Video {
                src: media.video.clone(),
                poster: media.poster.clone(),
            },
            MotionPreference::Reduced => HeroBackdrop::Still {
                src: media.poster.clone(),
            },
        }
    }
}

/// Decides when the hero video gets its single play attempt.
///
/// One attempt per mounted video element: a rejected attempt is never
/// retried, but reduced motion unmounts the element, so the next switch back
/// to `Allowed` mounts a fresh one that gets its own attempt.
#[derive(Debug, Default)]
pub struct AutoplayGate {
    attempted: bool,
}

impl AutoplayGate {
    pub fn should_attempt(&mut self, preference: MotionPreference, video_mounted: bool) -> bool {
        if preference.is_reduced() {
            self.attempted = false;
            return false;
        }
        if !video_mounted || self.attempted {
            return false;
        }
        self.attempted = true;
        true
    }
}

#[derive(Debug)]
pub struct PlaybackRejected;

pub trait Playable {
    /// Resolves to `Err` when the browser refuses to start playback.
    fn start(&self) -> LocalBoxFuture<'static, Result<(), PlaybackRejected>>;
}

impl Playable for HtmlMediaElement {
    fn start(&self) -> LocalBoxFuture<'static, Result<(), PlaybackRejected>> {
        let started = self.play();
        Box::pin(async move {
            let promise = started.map_err(|_| PlaybackRejected)?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|_| PlaybackRejected)
        })
    }
}

/// Autoplay policies reject `play()` routinely; the poster frame stays up.
pub async fn play_best_effort<P: Playable + ?Sized>(media: &P) {
    let _ = media.start().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn media() -> HeroMedia {
        HeroMedia {
            video: "/media/hero.mp4".into(),
            poster: "/media/hero.jpg".into(),
        }
    }

    struct FakeVideo {
        accept: bool,
        plays: Cell<u32>,
    }

    impl Playable for FakeVideo {
        fn start(&self) -> LocalBoxFuture<'static, Result<(), PlaybackRejected>> {
            self.plays.set(self.plays.get() + 1);
            let accept = self.accept;
            Box::pin(async move { if accept { Ok(()) } else { Err(PlaybackRejected) } })
        }
    }

    #[test]
    fn reduced_motion_shows_poster_only() {
        assert_eq!(
            HeroBackdrop::for_preference(MotionPreference::Reduced, &media()),
            HeroBackdrop::Still { src: "/media/hero.jpg".into() }
        );
        assert_eq!(
            HeroBackdrop::for_preference(MotionPreference::Allowed, &media()),
            HeroBackdrop::Video {
                src: "/media/hero.mp4".into(),
                poster: "/media/hero.jpg".into()
            }
        );
    }

    #[test]
    fn reduced_motion_never_attempts_playback() {
        let mut gate = AutoplayGate::default();
        for mounted in [true, false, true] {
            assert!(!gate.should_attempt(MotionPreference::Reduced, mounted));
        }
    }

    #[test]
    fn allowed_motion_attempts_once_per_mounted_video() {
        let mut gate = AutoplayGate::default();
        assert!(!gate.should_attempt(MotionPreference::Allowed, false));
        assert!(gate.should_attempt(MotionPreference::Allowed, true));
        assert!(!gate.should_attempt(MotionPreference::Allowed, true));
    }

    #[test]
    fn returning_from_reduced_motion_allows_a_new_attempt() {
        let mut gate = AutoplayGate::default();
        assert!(gate.should_attempt(MotionPreference::Allowed, true));
        assert!(!gate.should_attempt(MotionPreference::Reduced, false));
        assert!(gate.should_attempt(MotionPreference::Allowed, true));
    }

    #[test]
    fn rejected_play_is_swallowed_without_retry() {
        let video = FakeVideo { accept: false, plays: Cell::new(0) };
        block_on(play_best_effort(&video));
        assert_eq!(video.plays.get(), 1);

        let video = FakeVideo { accept: true, plays: Cell::new(0) };
        block_on(play_best_effort(&video));
        assert_eq!(video.plays.get(), 1);
    }
}
