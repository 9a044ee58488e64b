//! Reducer for the carousel state machine.
//!
//! Every navigation path (keys, buttons, indicators, the auto-advance timer)
//! funnels into `begin_transition`, which owns the lock discipline.

use std::time::Instant;

use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::{wrap_index, CarouselState};

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Advance { direction, now } => {
                let target = wrap_index(state.current_index, direction.delta(), state.len.max(1));
                settle(state.clone(), begin_transition(state, target, now), now)
            }
            CarouselIntent::JumpTo { index, now } => {
                if index >= state.len {
                    return state;
                }
                settle(state.clone(), begin_transition(state, index, now), now)
            }
            CarouselIntent::SetPaused { paused, now } => {
                let next = CarouselState {
                    paused,
                    ..state.clone()
                };
                settle(state, next, now)
            }
            CarouselIntent::SetHovered { id } => CarouselState {
                hovered_id: id,
                ..state
            },
            CarouselIntent::Select { id } => CarouselState {
                selected_id: id,
                ..state
            },
            CarouselIntent::Tick { now } => tick(state, now),
            CarouselIntent::Teardown => CarouselState {
                lock_until: None,
                next_advance_at: None,
                autoplay: false,
                ..state
            },
        }
    }
}

/// Take the lock and move to `target`. No-op while already locked.
fn begin_transition(state: CarouselState, target: usize, now: Instant) -> CarouselState {
    if state.is_locked() || state.len == 0 {
        return state;
    }
    tracing::debug!(from = state.current_index, to = target, "carousel transition");
    CarouselState {
        current_index: target,
        lock_until: Some(now + state.timing.animation),
        ..state
    }
}

/// Restart the auto-advance period if index, pause or lock changed.
fn settle(before: CarouselState, mut after: CarouselState, now: Instant) -> CarouselState {
    if before.governing() != after.governing() {
        after.rearm(now);
    }
    after
}

fn tick(state: CarouselState, now: Instant) -> CarouselState {
    let mut state = state;

    if state.lock_until.is_some_and(|until| now >= until) {
        state.lock_until = None;
        state.rearm(now);
    }

    let due = state.next_advance_at.is_some_and(|at| now >= at);
    if due && !state.paused {
        let target = wrap_index(state.current_index, 1, state.len.max(1));
        state = begin_transition(state, target, now);
        // The timer keeps its period even when the advance was swallowed by the lock.
        state.rearm(now);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::carousel::intent::Direction;
    use crate::ui::carousel::state::CarouselTiming;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn advance_takes_lock_and_moves() {
        let t0 = Instant::now();
        let state = CarouselState::new(6, CarouselTiming::default(), true, t0);
        let state = CarouselReducer::reduce(
            state,
            CarouselIntent::Advance {
                direction: Direction::Next,
                now: t0,
            },
        );
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.lock_until(), Some(t0 + ms(600)));
        assert_eq!(state.next_advance_at(), Some(t0 + ms(3000)));
    }

    #[test]
    fn lock_clear_restarts_auto_advance_period() {
        let t0 = Instant::now();
        let state = CarouselState::new(6, CarouselTiming::default(), true, t0);
        let state = CarouselReducer::reduce(
            state,
            CarouselIntent::Advance {
                direction: Direction::Prev,
                now: t0,
            },
        );
        let state = CarouselReducer::reduce(state, CarouselIntent::Tick { now: t0 + ms(600) });
        assert!(!state.is_locked());
        assert_eq!(state.next_advance_at(), Some(t0 + ms(3600)));
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let t0 = Instant::now();
        let state = CarouselState::new(3, CarouselTiming::default(), false, t0);
        let next = CarouselReducer::reduce(state.clone(), CarouselIntent::JumpTo { index: 3, now: t0 });
        assert_eq!(next, state);
    }

    #[test]
    fn teardown_cancels_deadlines() {
        let t0 = Instant::now();
        let state = CarouselState::new(3, CarouselTiming::default(), true, t0);
        let state = CarouselReducer::reduce(
            state,
            CarouselIntent::Advance {
                direction: Direction::Next,
                now: t0,
            },
        );
        let state = CarouselReducer::reduce(state, CarouselIntent::Teardown);
        assert!(!state.is_locked());
        assert_eq!(state.next_advance_at(), None);
        let state = CarouselReducer::reduce(state, CarouselIntent::Tick { now: t0 + ms(10_000) });
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.next_advance_at(), None);
    }
}
