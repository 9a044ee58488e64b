//! State of the project carousel.

use std::time::{Duration, Instant};

use crate::catalog::{Catalog, ProjectRecord};
use crate::ui::mvi::UiState;

/// Durations driving the carousel's deferred callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    /// How long navigation stays locked after a move.
    pub animation: Duration,
    /// Period of the auto-advance timer.
    pub auto_advance: Duration,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            animation: Duration::from_millis(600),
            auto_advance: Duration::from_millis(3000),
        }
    }
}

/// Position of a visible card relative to the current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOffset {
    Prev,
    Center,
    Next,
}

impl CardOffset {
    pub const ALL: [CardOffset; 3] = [CardOffset::Prev, CardOffset::Center, CardOffset::Next];

    pub fn delta(self) -> isize {
        match self {
            CardOffset::Prev => -1,
            CardOffset::Center => 0,
            CardOffset::Next => 1,
        }
    }

    pub fn is_center(self) -> bool {
        self == CardOffset::Center
    }
}

/// One of the three cards rendered at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleCard<'a> {
    pub offset: CardOffset,
    pub index: usize,
    pub record: &'a ProjectRecord,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselState {
    pub(super) len: usize,
    pub(super) current_index: usize,
    /// Animation lock. `Some` while a transition is in flight.
    pub(super) lock_until: Option<Instant>,
    pub(super) paused: bool,
    pub(super) hovered_id: Option<u32>,
    pub(super) selected_id: Option<u32>,
    /// Auto-advance deadline. `None` while paused or with autoplay off.
    pub(super) next_advance_at: Option<Instant>,
    pub(super) autoplay: bool,
    pub(super) timing: CarouselTiming,
}

impl UiState for CarouselState {}

/// Wrap `index + delta` into `[0, len)`. `len` must be non-zero.
pub fn wrap_index(index: usize, delta: isize, len: usize) -> usize {
    let len = len as isize;
    ((index as isize + delta).rem_euclid(len)) as usize
}

impl CarouselState {
    /// Carousel over `len` projects starting at index 0.
    ///
    /// With `autoplay`, the first auto-advance is due one period after `now`.
    pub fn new(len: usize, timing: CarouselTiming, autoplay: bool, now: Instant) -> Self {
        let mut state = Self {
            len,
            autoplay,
            timing,
            ..Self::default()
        };
        state.rearm(now);
        state
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_locked(&self) -> bool {
        self.lock_until.is_some()
    }

    pub fn lock_until(&self) -> Option<Instant> {
        self.lock_until
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn hovered_id(&self) -> Option<u32> {
        self.hovered_id
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected_id
    }

    pub fn is_overlay_open(&self) -> bool {
        self.selected_id.is_some()
    }

    pub fn next_advance_at(&self) -> Option<Instant> {
        self.next_advance_at
    }

    pub fn timing(&self) -> CarouselTiming {
        self.timing
    }

    /// Indexes at offsets -1, 0, +1 from the current index, in that order.
    pub fn visible_indices(&self) -> [(CardOffset, usize); 3] {
        let len = self.len.max(1);
        CardOffset::ALL.map(|offset| (offset, wrap_index(self.current_index, offset.delta(), len)))
    }

    /// The previous, current and next records, tagged with their offsets.
    pub fn visible_window<'a>(&self, catalog: &'a Catalog) -> [VisibleCard<'a>; 3] {
        let records = catalog.as_slice();
        let len = records.len();
        CardOffset::ALL.map(|offset| {
            let index = wrap_index(self.current_index % len, offset.delta(), len);
            VisibleCard {
                offset,
                index,
                record: &records[index],
            }
        })
    }

    /// Fields whose change restarts the auto-advance period.
    pub(super) fn governing(&self) -> (usize, bool, bool) {
        (self.current_index, self.paused, self.is_locked())
    }

    pub(super) fn rearm(&mut self, now: Instant) {
        self.next_advance_at = if self.autoplay && !self.paused && self.len > 0 {
            Some(now + self.timing.auto_advance)
        } else {
            None
        };
    }
}
