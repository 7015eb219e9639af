use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Playback over the cyclic year index. Two states: stopped and playing.
/// The event loop feeds `tick` with frame deltas; one step fires per
/// elapsed interval while playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    pub index: usize,
    pub playing: bool,
    interval: Duration,
    accumulated: Duration,
}

impl Playback {
    pub const fn new(interval: Duration) -> Self {
        Self {
            index: 0,
            playing: false,
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Render-then-advance: returns the index to render now and moves the
    /// cursor to the next year, wrapping after the last one.
    pub fn advance(&mut self, total_years: usize) -> usize {
        let index = self.index;
        self.index = (self.index + 1) % total_years;
        index
    }

    /// Flip stopped/playing. Entering the playing state re-arms the
    /// accumulator so the first timed step lands a full interval later.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        if self.playing {
            self.accumulated = Duration::ZERO;
        }
        self.playing
    }

    /// Force the cursor back to year zero. Play state is untouched; the
    /// caller re-renders immediately.
    pub fn reset_index(&mut self) {
        self.index = 0;
    }

    /// Accumulate a frame delta. Yields the index to render when a full
    /// interval has elapsed while playing, at most one step per call.
    /// Overshoot stays banked so slow frames do not stretch the period.
    pub fn tick(&mut self, delta: Duration, total_years: usize) -> Option<usize> {
        if !self.playing || total_years == 0 {
            return None;
        }

        self.accumulated += delta;
        if self.accumulated < self.interval {
            return None;
        }

        self.accumulated -= self.interval;
        Some(self.advance(total_years))
    }

    pub const fn control_label(&self) -> &'static str {
        if self.playing {
            "Pause"
        } else {
            "Play"
        }
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Playback, DEFAULT_INTERVAL};

    #[test]
    fn advancing_n_times_returns_to_the_starting_index() {
        let mut playback = Playback::default();
        let total = 7;

        let start = playback.index;
        for _ in 0..total {
            playback.advance(total);
        }
        assert_eq!(playback.index, start);
    }

    #[test]
    fn advance_renders_current_then_moves_on_and_wraps() {
        let mut playback = Playback::default();

        assert_eq!(playback.advance(3), 0);
        assert_eq!(playback.advance(3), 1);
        assert_eq!(playback.advance(3), 2);
        assert_eq!(playback.advance(3), 0);
    }

    #[test]
    fn toggle_flips_between_stopped_and_playing() {
        let mut playback = Playback::default();
        assert!(!playback.playing);
        assert_eq!(playback.control_label(), "Play");

        assert!(playback.toggle());
        assert_eq!(playback.control_label(), "Pause");

        assert!(!playback.toggle());
        assert_eq!(playback.control_label(), "Play");
    }

    #[test]
    fn ticks_fire_once_per_interval_while_playing() {
        let mut playback = Playback::default();
        playback.toggle();

        assert_eq!(playback.tick(Duration::from_millis(50), 5), None);
        assert_eq!(playback.tick(Duration::from_millis(50), 5), Some(0));
        assert_eq!(playback.tick(Duration::from_millis(50), 5), None);
        assert_eq!(playback.tick(Duration::from_millis(60), 5), Some(1));
    }

    #[test]
    fn overshoot_carries_into_the_next_interval() {
        let mut playback = Playback::default();
        playback.toggle();

        // A slow 150ms frame fires one step and banks the extra 50ms,
        // so the next step needs only 50ms more.
        assert_eq!(playback.tick(Duration::from_millis(150), 5), Some(0));
        assert_eq!(playback.tick(Duration::from_millis(30), 5), None);
        assert_eq!(playback.tick(Duration::from_millis(20), 5), Some(1));
    }

    #[test]
    fn no_ticks_fire_while_stopped() {
        let mut playback = Playback::default();

        assert_eq!(playback.tick(DEFAULT_INTERVAL * 10, 5), None);
        assert_eq!(playback.index, 0);

        playback.toggle();
        assert_eq!(playback.tick(DEFAULT_INTERVAL, 5), Some(0));

        playback.toggle();
        assert_eq!(playback.tick(DEFAULT_INTERVAL * 10, 5), None);
        assert_eq!(playback.index, 1);
    }

    #[test]
    fn pausing_and_resuming_rearms_the_accumulator() {
        let mut playback = Playback::default();
        playback.toggle();
        playback.tick(Duration::from_millis(90), 5);

        playback.toggle();
        playback.toggle();

        // The 90ms accumulated before the pause must not count.
        assert_eq!(playback.tick(Duration::from_millis(50), 5), None);
        assert_eq!(playback.tick(Duration::from_millis(50), 5), Some(0));
    }

    #[test]
    fn reset_moves_the_cursor_without_touching_play_state() {
        let mut playback = Playback::default();
        playback.advance(5);
        playback.advance(5);
        playback.toggle();

        playback.reset_index();
        assert_eq!(playback.index, 0);
        assert!(playback.playing);
    }

    #[test]
    fn empty_dataset_never_steps() {
        let mut playback = Playback::default();
        playback.toggle();
        assert_eq!(playback.tick(DEFAULT_INTERVAL, 0), None);
    }
}
