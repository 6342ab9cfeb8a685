use crate::scene::{Display, Video};
use coarsetime::{Duration, Instant};

/// Time between a goal being noticed and the splash starting, lines up with the in-game replay cue
pub const SPLASH_DELAY_MS: u64 = 1080;
/// How long the splash stays on screen
pub const SPLASH_LENGTH_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Idle,
    Pending { show_at: Instant },
    Playing { hide_at: Instant },
}

/// Drives the goal splash video. Only one deadline is ever armed: triggering again replaces
/// whatever was pending, including the hide of a splash that is already playing.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalSplash {
    timer: Timer,
    delay: Duration,
    length: Duration,
}

impl GoalSplash {
    pub fn new() -> Self {
        Self {
            timer: Timer::Idle,
            delay: Duration::from_millis(SPLASH_DELAY_MS),
            length: Duration::from_millis(SPLASH_LENGTH_MS),
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.timer = Timer::Pending {
            show_at: now + self.delay,
        };
    }

    /// `true` while a splash is waiting to start
    pub fn is_pending(&self) -> bool {
        matches!(self.timer, Timer::Pending { .. })
    }

    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.timer == Timer::Idle
    }

    /// Fires every deadline that has passed by `now`, in order. Video state changes are stamped
    /// with the deadline rather than `now`, so a late frame does not shift playback.
    pub fn advance(&mut self, video: &mut Video, now: Instant) {
        loop {
            match self.timer {
                Timer::Pending { show_at } if now >= show_at => {
                    video.display = Display::Block;
                    video.seek(Duration::from_secs(0), show_at);
                    video.play(show_at);
                    self.timer = Timer::Playing {
                        hide_at: show_at + self.length,
                    };
                }
                Timer::Playing { hide_at } if now >= hide_at => {
                    video.display = Display::None;
                    video.pause(hide_at);
                    video.seek(Duration::from_secs(0), hide_at);
                    self.timer = Timer::Idle;
                }
                _ => break,
            }
        }
    }
}

impl Default for GoalSplash {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_splash_sequence() {
        let start = Instant::now();
        let mut splash = GoalSplash::new();
        let mut video = Video::new();
        assert!(splash.is_idle());

        splash.trigger(start);
        assert!(splash.is_pending());

        splash.advance(&mut video, start + ms(1079));
        assert!(!video.is_visible());
        assert!(!video.is_playing());

        splash.advance(&mut video, start + ms(1080));
        assert_eq!(video.display, Display::Block);
        assert!(video.is_playing());
        assert_eq!(video.current_time(start + ms(1080)), ms(0));
        assert!(!splash.is_pending());

        splash.advance(&mut video, start + ms(3079));
        assert!(video.is_visible());
        assert!(video.is_playing());

        splash.advance(&mut video, start + ms(3080));
        assert_eq!(video.display, Display::None);
        assert!(!video.is_playing());
        assert_eq!(video.current_time(start + ms(4000)), ms(0));
        assert!(splash.is_idle());
    }

    #[test]
    fn test_late_frame_runs_both_deadlines() {
        let start = Instant::now();
        let mut splash = GoalSplash::new();
        let mut video = Video::new();

        splash.trigger(start);
        splash.advance(&mut video, start + ms(10_000));

        assert!(!video.is_visible());
        assert!(!video.is_playing());
        assert_eq!(video.current_time(start + ms(10_000)), ms(0));
        assert!(splash.is_idle());
    }

    #[test]
    fn test_retrigger_while_pending() {
        let start = Instant::now();
        let mut splash = GoalSplash::new();
        let mut video = Video::new();

        splash.trigger(start);
        splash.trigger(start + ms(500));

        splash.advance(&mut video, start + ms(1080));
        assert!(!video.is_visible());

        splash.advance(&mut video, start + ms(1580));
        assert!(video.is_visible());
        splash.advance(&mut video, start + ms(3579));
        assert!(video.is_visible());
        splash.advance(&mut video, start + ms(3580));
        assert!(!video.is_visible());
    }

    #[test]
    fn test_retrigger_while_playing() {
        let start = Instant::now();
        let mut splash = GoalSplash::new();
        let mut video = Video::new();

        splash.trigger(start);
        splash.advance(&mut video, start + ms(1080));
        assert!(video.is_playing());

        // Second goal a second into the splash cancels the pending hide
        splash.trigger(start + ms(2080));
        assert!(splash.is_pending());
        splash.advance(&mut video, start + ms(3080));
        assert!(video.is_visible());
        assert!(video.is_playing());

        // and restarts playback from the beginning once its own delay has passed
        let restart_at = start + ms(2080) + ms(SPLASH_DELAY_MS);
        splash.advance(&mut video, restart_at);
        assert!(video.is_visible());
        assert_eq!(video.current_time(restart_at), ms(0));

        splash.advance(&mut video, start + ms(5159));
        assert!(video.is_visible());
        splash.advance(&mut video, start + ms(5160));
        assert!(!video.is_visible());
        assert!(splash.is_idle());
    }
}
