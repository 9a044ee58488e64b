use std::time::Instant;

use crate::ui::mvi::Intent;

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Prev => -1,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CarouselIntent {
    /// Move one card. Ignored while the animation lock is held.
    Advance { direction: Direction, now: Instant },
    /// Jump to an indicator position. Same lock discipline as `Advance`.
    JumpTo { index: usize, now: Instant },
    /// Pointer entered (`true`) or left (`false`) the carousel region.
    SetPaused { paused: bool, now: Instant },
    /// Pointer entered or left the centered card.
    SetHovered { id: Option<u32> },
    /// Open (`Some`) or close (`None`) the detail overlay.
    Select { id: Option<u32> },
    /// Service the lock and auto-advance deadlines.
    Tick { now: Instant },
    /// Cancel every pending deadline. Sent when the gallery unmounts.
    Teardown,
}

impl Intent for CarouselIntent {}
