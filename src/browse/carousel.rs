// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rotating index for the hero section.
//!
//! The carousel owns only an index and a timer phase; the list it rotates
//! over stays with the view. All clock reads are injected as explicit
//! `Instant`s — the owning view drives `tick` from its own frame or poll
//! loop, so dropping the view stops the rotation and nothing can fire
//! against torn-down state.

use std::time::{Duration, Instant};

/// Wall-clock gap between automatic advances.
pub const ROTATE_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    interval: Duration,
    last_advance: Instant,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration, now: Instant) -> Self {
        Self {
            len,
            index: 0,
            interval,
            last_advance: now,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Track a changed list length, keeping the index in range.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.index = 0;
        } else {
            self.index %= len;
        }
    }

    /// Advance automatically when the interval has elapsed. Returns whether
    /// an advance happened. Lists of length 0 or 1 never rotate.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.len <= 1 {
            return false;
        }
        if now.duration_since(self.last_advance) >= self.interval {
            self.index = (self.index + 1) % self.len;
            self.last_advance = now;
            true
        } else {
            false
        }
    }

    /// Time remaining until the next automatic advance, for scheduling the
    /// next repaint.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.duration_since(self.last_advance))
    }

    // Manual navigation resets only the index; the timer phase is left
    // alone.

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn jump(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, secs: u64) -> Instant {
        start + Duration::from_secs(secs)
    }

    #[test]
    fn automatic_sequence_wraps_modulo_len() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3, ROTATE_INTERVAL, start);
        let mut seen = vec![carousel.index()];
        for step in 1..=6 {
            assert!(carousel.tick(at(start, step * 5)));
            seen.push(carousel.index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn tick_before_interval_is_a_no_op() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3, ROTATE_INTERVAL, start);
        assert!(!carousel.tick(at(start, 4)));
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.until_next(at(start, 4)), Duration::from_secs(1));
    }

    #[test]
    fn short_lists_never_rotate() {
        let start = Instant::now();
        let mut single = Carousel::new(1, ROTATE_INTERVAL, start);
        assert!(!single.tick(at(start, 60)));
        assert_eq!(single.index(), 0);
        let mut empty = Carousel::new(0, ROTATE_INTERVAL, start);
        assert!(!empty.tick(at(start, 60)));
    }

    #[test]
    fn manual_navigation_wraps_both_ways() {
        let start = Instant::now();
        let mut carousel = Carousel::new(4, ROTATE_INTERVAL, start);
        carousel.prev();
        assert_eq!(carousel.index(), 3, "prev from 0 wraps to N-1");
        carousel.next();
        assert_eq!(carousel.index(), 0, "next from N-1 wraps to 0");
        carousel.jump(9);
        assert_eq!(carousel.index(), 1, "jump reduces modulo len");
    }

    #[test]
    fn manual_navigation_leaves_timer_phase_alone() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3, ROTATE_INTERVAL, start);
        carousel.next();
        carousel.next();
        // The phase still dates from construction, so the automatic
        // advance is due at the original deadline.
        assert!(carousel.tick(at(start, 5)));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn resize_clamps_the_index() {
        let start = Instant::now();
        let mut carousel = Carousel::new(5, ROTATE_INTERVAL, start);
        carousel.jump(4);
        carousel.resize(3);
        assert_eq!(carousel.index(), 1);
        carousel.resize(0);
        assert_eq!(carousel.index(), 0);
    }
}
