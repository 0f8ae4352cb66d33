use std::time::Duration;

/// How long a direction stays visible after an index change.
pub const DIRECTION_CLEAR_DELAY: Duration = Duration::from_millis(220);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    None,
}

impl Direction {
    fn between(old: usize, new: usize) -> Self {
        match new.cmp(&old) {
            std::cmp::Ordering::Greater => Self::Down,
            std::cmp::Ordering::Less => Self::Up,
            std::cmp::Ordering::Equal => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::None => "none",
        }
    }
}

/// Index of the equal-width segment containing `progress`.
pub fn section_index(progress: f64, count: usize) -> usize {
    if count <= 1 || progress.is_nan() {
        return 0;
    }
    let segment = 1.0 / count as f64;
    let index = (progress / segment).floor();
    if index <= 0.0 {
        0
    } else {
        (index as usize).min(count - 1)
    }
}

/// Interpolates `progress` across the segment of `index` into `range`,
/// clamped at both ends.
pub fn segment_parallax(progress: f64, index: usize, count: usize, range: (f64, f64)) -> f64 {
    let count = count.max(1);
    let segment = 1.0 / count as f64;
    let start = index as f64 * segment;
    let local = ((progress - start) / segment).clamp(0.0, 1.0);
    range.0 + (range.1 - range.0) * local
}

/// Holds the visible direction. Every change arms a new token and only the
/// latest token may clear it.
#[derive(Debug, Clone, Default)]
pub struct DirectionLatch {
    direction: Direction,
    token: u64,
}

impl DirectionLatch {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set(&mut self, direction: Direction) -> u64 {
        self.token = self.token.wrapping_add(1);
        self.direction = direction;
        self.token
    }

    /// Returns true if the token was current and the direction was cleared.
    pub fn clear(&mut self, token: u64) -> bool {
        if token != self.token || self.direction == Direction::None {
            return false;
        }
        self.direction = Direction::None;
        true
    }
}

/// Identical progress samples in a row after which a pin outside its
/// segment is dropped. Roughly half a second at 60 fps.
const SETTLE_FRAMES: u32 = 30;

/// Active section of a pinned scroller.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    count: usize,
    index: usize,
    pinned: Option<usize>,
    last_progress: f64,
    still_frames: u32,
}

impl SectionTracker {
    pub fn new(count: usize) -> Self {
        Self {
            count: count.max(1),
            index: 0,
            pinned: None,
            last_progress: 0.0,
            still_frames: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }

    /// Feeds a smoothed progress value. Returns the direction when the index
    /// changed.
    pub fn update(&mut self, progress: f64) -> Option<Direction> {
        if progress == self.last_progress {
            self.still_frames = self.still_frames.saturating_add(1);
        } else {
            self.last_progress = progress;
            self.still_frames = 0;
        }

        let next = section_index(progress, self.count);
        if let Some(pinned) = self.pinned {
            // an interrupted jump comes to rest somewhere else
            if next != pinned && self.still_frames < SETTLE_FRAMES {
                return None;
            }
            self.pinned = None;
        }
        self.set_index(next)
    }

    /// Moves straight to `index`. Progress-driven updates are held until the
    /// container arrives there, comes to rest elsewhere, or
    /// [`SectionTracker::release`] is called.
    pub fn jump_to(&mut self, index: usize) -> Option<Direction> {
        let index = index.min(self.count - 1);
        self.pinned = Some(index);
        self.still_frames = 0;
        self.set_index(index)
    }

    pub fn release(&mut self) {
        self.pinned = None;
    }

    /// Progress at which `index` becomes active when scrolled to.
    pub fn progress_for(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return 0.0;
        }
        index.min(self.count - 1) as f64 / (self.count - 1) as f64
    }

    fn set_index(&mut self, next: usize) -> Option<Direction> {
        if next == self.index {
            return None;
        }
        let direction = Direction::between(self.index, next);
        self.index = next;
        Some(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bounds() {
        for count in 1..=7 {
            for step in 0..=1000 {
                let p = step as f64 / 1000.0;
                assert!(section_index(p, count) < count);
            }
            assert_eq!(section_index(0.0, count), 0);
            assert_eq!(section_index(1.0, count), count - 1);
        }
    }

    #[test]
    fn test_index_segments() {
        assert_eq!(section_index(0.24, 4), 0);
        assert_eq!(section_index(0.25, 4), 1);
        assert_eq!(section_index(0.74, 4), 2);
        assert_eq!(section_index(0.75, 4), 3);
        assert_eq!(section_index(-0.3, 4), 0);
        assert_eq!(section_index(1.7, 4), 3);
        assert_eq!(section_index(0.5, 0), 0);
    }

    #[test]
    fn test_direction_on_change_only() {
        let mut tracker = SectionTracker::new(4);
        assert_eq!(tracker.update(0.1), None);
        assert_eq!(tracker.update(0.3), Some(Direction::Down));
        assert_eq!(tracker.update(0.32), None);
        assert_eq!(tracker.update(0.2), Some(Direction::Up));
        assert_eq!(tracker.index(), 0);
    }

    #[test]
    fn test_gradual_scroll_moves_one_step() {
        let mut tracker = SectionTracker::new(5);
        let mut last = tracker.index();
        for step in 0..=200 {
            tracker.update(step as f64 / 200.0);
            assert!(tracker.index().abs_diff(last) <= 1);
            last = tracker.index();
        }
        assert_eq!(last, 4);
    }

    #[test]
    fn test_jump_snaps_and_holds() {
        let mut tracker = SectionTracker::new(4);
        assert_eq!(tracker.jump_to(3), Some(Direction::Down));
        assert_eq!(tracker.index(), 3);
        // the container is still scrolling toward the target
        assert_eq!(tracker.update(0.3), None);
        assert_eq!(tracker.update(0.6), None);
        assert_eq!(tracker.index(), 3);
        assert_eq!(tracker.update(0.9), None);
        assert!(!tracker.is_pinned());
        assert_eq!(tracker.update(0.6), Some(Direction::Up));
    }

    #[test]
    fn test_release_resumes_updates() {
        let mut tracker = SectionTracker::new(4);
        tracker.jump_to(2);
        tracker.release();
        assert_eq!(tracker.update(0.0), Some(Direction::Up));
    }

    #[test]
    fn test_interrupted_jump_releases_at_rest() {
        let mut tracker = SectionTracker::new(4);
        tracker.update(0.1);
        tracker.jump_to(3);
        // smooth scroll has not started yet
        for _ in 0..5 {
            assert_eq!(tracker.update(0.1), None);
        }
        assert_eq!(tracker.index(), 3);
        for step in 0..30 {
            tracker.update(0.1 + step as f64 * 0.01);
        }
        assert!(tracker.is_pinned());
        for _ in 0..600 {
            tracker.update(0.40);
        }
        assert!(!tracker.is_pinned());
        assert_eq!(tracker.index(), section_index(0.40, 4));
    }

    #[test]
    fn test_jump_target_lands_in_section() {
        let tracker = SectionTracker::new(4);
        for i in 0..4 {
            assert_eq!(section_index(tracker.progress_for(i), 4), i);
        }
        assert_eq!(tracker.progress_for(9), 1.0);
        assert_eq!(SectionTracker::new(1).progress_for(0), 0.0);
    }

    #[test]
    fn test_latch_keeps_latest() {
        let mut latch = DirectionLatch::default();
        let first = latch.set(Direction::Down);
        let second = latch.set(Direction::Up);
        assert!(!latch.clear(first));
        assert_eq!(latch.direction(), Direction::Up);
        assert!(latch.clear(second));
        assert_eq!(latch.direction(), Direction::None);
        assert!(!latch.clear(second));
    }

    #[test]
    fn test_parallax_clamped() {
        let range = (-18.0, 18.0);
        assert_eq!(segment_parallax(0.25, 1, 4, range), -18.0);
        assert_eq!(segment_parallax(0.375, 1, 4, range), 0.0);
        assert_eq!(segment_parallax(0.5, 1, 4, range), 18.0);
        assert_eq!(segment_parallax(0.9, 1, 4, range), 18.0);
        assert_eq!(segment_parallax(0.0, 1, 4, range), -18.0);
    }
}
