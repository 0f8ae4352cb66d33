/// Where a scroll range starts or ends: the point `element` (fraction of the
/// container's height) lines up with the point `viewport` (fraction of the
/// viewport's height).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub element: f64,
    pub viewport: f64,
}

impl Anchor {
    pub const START_START: Anchor = Anchor {
        element: 0.0,
        viewport: 0.0,
    };
    pub const END_END: Anchor = Anchor {
        element: 1.0,
        viewport: 1.0,
    };
    pub const END_START: Anchor = Anchor {
        element: 1.0,
        viewport: 0.0,
    };

    fn resolve(&self, geometry: &Geometry, viewport_height: f64) -> f64 {
        geometry.top + self.element * geometry.height - self.viewport * viewport_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffsets {
    pub start: Anchor,
    pub end: Anchor,
}

impl ScrollOffsets {
    /// Container top at viewport top through container bottom at viewport top.
    pub const PASS_THROUGH: ScrollOffsets = ScrollOffsets {
        start: Anchor::START_START,
        end: Anchor::END_START,
    };
    /// Pinned scroller: container top at viewport top through container
    /// bottom at viewport bottom.
    pub const PINNED: ScrollOffsets = ScrollOffsets {
        start: Anchor::START_START,
        end: Anchor::END_END,
    };
    /// Container bottom entering the viewport bottom through leaving the top.
    pub const TRAILING_EDGE: ScrollOffsets = ScrollOffsets {
        start: Anchor::END_END,
        end: Anchor::END_START,
    };
}

impl Default for ScrollOffsets {
    fn default() -> Self {
        Self::PASS_THROUGH
    }
}

/// Container position in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub start: f64,
    pub end: f64,
}

impl ScrollSample {
    pub fn new(
        offset: f64,
        geometry: &Geometry,
        viewport_height: f64,
        offsets: &ScrollOffsets,
    ) -> Self {
        Self {
            offset,
            start: offsets.start.resolve(geometry, viewport_height),
            end: offsets.end.resolve(geometry, viewport_height),
        }
    }

    pub fn progress(&self) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if self.offset >= self.end { 1.0 } else { 0.0 };
        }
        ((self.offset - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Raw scroll progress of one container.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    offsets: ScrollOffsets,
    last: f64,
}

impl ProgressTracker {
    pub fn new(offsets: ScrollOffsets) -> Self {
        Self { offsets, last: 0.0 }
    }

    pub fn offsets(&self) -> ScrollOffsets {
        self.offsets
    }

    pub fn last(&self) -> f64 {
        self.last
    }

    /// `geometry` is `None` when the container is detached, in which case the
    /// last known progress is returned.
    pub fn sample(
        &mut self,
        scroll_y: f64,
        geometry: Option<Geometry>,
        viewport_height: f64,
    ) -> f64 {
        let Some(geometry) = geometry else {
            return self.last;
        };
        self.last = if viewport_height > 0.0 {
            ScrollSample::new(scroll_y, &geometry, viewport_height, &self.offsets).progress()
        } else {
            0.0
        };
        self.last
    }

    /// Scroll offset that puts this container at `progress`.
    pub fn offset_for(&self, progress: f64, geometry: &Geometry, viewport_height: f64) -> f64 {
        let start = self.offsets.start.resolve(geometry, viewport_height);
        let end = self.offsets.end.resolve(geometry, viewport_height);
        start + (end - start) * progress.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION: Geometry = Geometry {
        top: 1000.0,
        height: 3200.0,
    };

    #[test]
    fn test_pinned_range() {
        let mut tracker = ProgressTracker::new(ScrollOffsets::PINNED);
        assert_eq!(tracker.sample(0.0, Some(SECTION), 800.0), 0.0);
        assert_eq!(tracker.sample(1000.0, Some(SECTION), 800.0), 0.0);
        // scrollable distance is 3200 - 800
        assert_eq!(tracker.sample(2200.0, Some(SECTION), 800.0), 0.5);
        assert_eq!(tracker.sample(3400.0, Some(SECTION), 800.0), 1.0);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        let mut tracker = ProgressTracker::new(ScrollOffsets::PASS_THROUGH);
        assert_eq!(tracker.sample(-120.0, Some(SECTION), 800.0), 0.0);
        assert_eq!(tracker.sample(99_999.0, Some(SECTION), 800.0), 1.0);
    }

    #[test]
    fn test_trailing_edge() {
        let page = Geometry {
            top: 0.0,
            height: 5000.0,
        };
        let mut tracker = ProgressTracker::new(ScrollOffsets::TRAILING_EDGE);
        assert_eq!(tracker.sample(4200.0, Some(page), 800.0), 0.0);
        assert_eq!(tracker.sample(4600.0, Some(page), 800.0), 0.5);
        assert_eq!(tracker.sample(5000.0, Some(page), 800.0), 1.0);
    }

    #[test]
    fn test_zero_viewport_is_zero() {
        let mut tracker = ProgressTracker::new(ScrollOffsets::PINNED);
        tracker.sample(2200.0, Some(SECTION), 800.0);
        assert_eq!(tracker.sample(2200.0, Some(SECTION), 0.0), 0.0);
    }

    #[test]
    fn test_detached_keeps_last_value() {
        let mut tracker = ProgressTracker::new(ScrollOffsets::PINNED);
        let p = tracker.sample(2200.0, Some(SECTION), 800.0);
        assert_eq!(tracker.sample(0.0, None, 800.0), p);
        assert_eq!(tracker.last(), p);
    }

    #[test]
    fn test_empty_range_steps() {
        let short = Geometry {
            top: 500.0,
            height: 800.0,
        };
        let mut tracker = ProgressTracker::new(ScrollOffsets::PINNED);
        assert_eq!(tracker.sample(499.0, Some(short), 800.0), 0.0);
        assert_eq!(tracker.sample(500.0, Some(short), 800.0), 1.0);
    }

    #[test]
    fn test_offset_for_inverts_sample() {
        let mut tracker = ProgressTracker::new(ScrollOffsets::PINNED);
        let y = tracker.offset_for(0.25, &SECTION, 800.0);
        assert_eq!(y, 1600.0);
        assert_eq!(tracker.sample(y, Some(SECTION), 800.0), 0.25);
    }
}
