mod common;

use common::{catalog_of, ms};
use folio::ui::carousel::{
    CardOffset, CarouselIntent, CarouselReducer, CarouselState, CarouselTiming, Direction,
};
use folio::ui::mvi::Reducer;
use std::time::Instant;

fn advance(state: CarouselState, direction: Direction, now: Instant) -> CarouselState {
    CarouselReducer::reduce(state, CarouselIntent::Advance { direction, now })
}

fn tick(state: CarouselState, now: Instant) -> CarouselState {
    CarouselReducer::reduce(state, CarouselIntent::Tick { now })
}

fn manual(len: usize, now: Instant) -> CarouselState {
    CarouselState::new(len, CarouselTiming::default(), false, now)
}

#[test]
fn index_stays_in_range_for_any_sequence() {
    for len in 1..=7usize {
        let t0 = Instant::now();
        let mut state = manual(len, t0);
        let mut t = t0;
        // Deterministic mixed sequence of moves, each after the lock clears.
        for step in 0..40u32 {
            let direction = if step % 3 == 0 {
                Direction::Prev
            } else {
                Direction::Next
            };
            state = advance(state, direction, t);
            assert!(state.current_index() < len);
            t += ms(600);
            state = tick(state, t);
        }
    }
}

#[test]
fn advance_while_locked_is_noop() {
    let t0 = Instant::now();
    let state = advance(manual(6, t0), Direction::Next, t0);
    assert!(state.is_locked());

    let again = advance(state.clone(), Direction::Next, t0 + ms(100));
    assert_eq!(again, state);
    let back = advance(state.clone(), Direction::Prev, t0 + ms(599));
    assert_eq!(back, state);
    let jump = CarouselReducer::reduce(
        state.clone(),
        CarouselIntent::JumpTo {
            index: 4,
            now: t0 + ms(300),
        },
    );
    assert_eq!(jump, state);
}

#[test]
fn lock_clears_after_animation() {
    let t0 = Instant::now();
    let state = advance(manual(6, t0), Direction::Next, t0);
    let state = tick(state, t0 + ms(599));
    assert!(state.is_locked());
    let state = tick(state, t0 + ms(600));
    assert!(!state.is_locked());
}

#[test]
fn visible_window_has_three_distinct_records_in_order() {
    let catalog = catalog_of(6);
    let t0 = Instant::now();
    let mut state = manual(6, t0);
    let mut t = t0;
    for _ in 0..6 {
        let window = state.visible_window(&catalog);
        assert_eq!(window.len(), 3);
        let offsets: Vec<CardOffset> = window.iter().map(|card| card.offset).collect();
        assert_eq!(
            offsets,
            vec![CardOffset::Prev, CardOffset::Center, CardOffset::Next]
        );
        assert_ne!(window[0].record.id, window[1].record.id);
        assert_ne!(window[1].record.id, window[2].record.id);
        assert_ne!(window[0].record.id, window[2].record.id);
        state = advance(state, Direction::Next, t);
        t += ms(600);
        state = tick(state, t);
    }
}

#[test]
fn visible_window_wraps_at_start() {
    let catalog = catalog_of(3);
    let state = manual(3, Instant::now());
    let ids: Vec<u32> = state
        .visible_window(&catalog)
        .iter()
        .map(|card| card.record.id)
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn jump_then_window_centers_target() {
    let catalog = catalog_of(6);
    let t0 = Instant::now();
    for k in 0..6 {
        let state = CarouselReducer::reduce(manual(6, t0), CarouselIntent::JumpTo { index: k, now: t0 });
        let window = state.visible_window(&catalog);
        assert_eq!(window[1].record, catalog.get(k).expect("in range"));
        assert!(state.is_locked());
    }
}

#[test]
fn six_advances_wrap_to_start() {
    let t0 = Instant::now();
    let mut state = manual(6, t0);
    let mut t = t0;
    for _ in 0..5 {
        state = advance(state, Direction::Next, t);
        t += ms(700);
        state = tick(state, t);
    }
    assert_eq!(state.current_index(), 5);
    state = advance(state, Direction::Next, t);
    assert_eq!(state.current_index(), 0);
}

#[test]
fn prev_from_zero_wraps_to_end() {
    let t0 = Instant::now();
    let state = advance(manual(6, t0), Direction::Prev, t0);
    assert_eq!(state.current_index(), 5);
}

#[test]
fn select_and_close_leave_index_alone() {
    let t0 = Instant::now();
    let state = advance(manual(6, t0), Direction::Next, t0);
    let state = tick(state, t0 + ms(600));
    let index = state.current_index();

    let state = CarouselReducer::reduce(state, CarouselIntent::Select { id: Some(4) });
    assert!(state.is_overlay_open());
    assert_eq!(state.current_index(), index);

    let state = CarouselReducer::reduce(state, CarouselIntent::Select { id: None });
    assert!(!state.is_overlay_open());
    assert_eq!(state.current_index(), index);
}

#[test]
fn auto_advance_fires_after_period() {
    let t0 = Instant::now();
    let state = CarouselState::new(6, CarouselTiming::default(), true, t0);
    let state = tick(state, t0 + ms(2999));
    assert_eq!(state.current_index(), 0);
    let state = tick(state, t0 + ms(3000));
    assert_eq!(state.current_index(), 1);
    assert!(state.is_locked());
}

#[test]
fn auto_advance_period_restarts_after_lock_clears() {
    let t0 = Instant::now();
    let state = CarouselState::new(6, CarouselTiming::default(), true, t0);
    let state = tick(state, t0 + ms(3000));
    let state = tick(state, t0 + ms(3600));
    assert!(!state.is_locked());
    assert_eq!(state.next_advance_at(), Some(t0 + ms(6600)));
    let state = tick(state, t0 + ms(6599));
    assert_eq!(state.current_index(), 1);
    let state = tick(state, t0 + ms(6600));
    assert_eq!(state.current_index(), 2);
}

#[test]
fn user_advance_restarts_auto_advance_period() {
    let t0 = Instant::now();
    let state = CarouselState::new(6, CarouselTiming::default(), true, t0);
    let state = advance(state, Direction::Next, t0 + ms(2500));
    let state = tick(state, t0 + ms(3000));
    assert_eq!(state.current_index(), 1);
    let state = tick(state, t0 + ms(3100));
    assert_eq!(state.next_advance_at(), Some(t0 + ms(6100)));
}

#[test]
fn paused_carousel_never_auto_advances() {
    let t0 = Instant::now();
    let state = CarouselState::new(6, CarouselTiming::default(), true, t0);
    let state = CarouselReducer::reduce(state, CarouselIntent::SetPaused { paused: true, now: t0 });
    assert_eq!(state.next_advance_at(), None);
    let state = tick(state, t0 + ms(60_000));
    assert_eq!(state.current_index(), 0);

    let resumed = CarouselReducer::reduce(
        state,
        CarouselIntent::SetPaused {
            paused: false,
            now: t0 + ms(60_000),
        },
    );
    assert_eq!(resumed.next_advance_at(), Some(t0 + ms(63_000)));
}

#[test]
fn pause_does_not_touch_lock() {
    let t0 = Instant::now();
    let state = advance(manual(6, t0), Direction::Next, t0);
    let state = CarouselReducer::reduce(state, CarouselIntent::SetPaused { paused: true, now: t0 });
    assert!(state.is_locked());
    assert_eq!(state.lock_until(), Some(t0 + ms(600)));
}

#[test]
fn manual_mode_never_arms_timer() {
    let t0 = Instant::now();
    let state = advance(manual(6, t0), Direction::Next, t0);
    let state = tick(state, t0 + ms(600));
    assert_eq!(state.next_advance_at(), None);
    let state = tick(state, t0 + ms(100_000));
    assert_eq!(state.current_index(), 1);
}

#[test]
fn custom_timing_is_respected() {
    let t0 = Instant::now();
    let timing = CarouselTiming {
        animation: ms(200),
        auto_advance: ms(1000),
    };
    let state = CarouselState::new(4, timing, true, t0);
    let state = tick(state, t0 + ms(1000));
    assert_eq!(state.lock_until(), Some(t0 + ms(1200)));
    let state = tick(state, t0 + ms(1200));
    assert!(!state.is_locked());
    assert_eq!(state.next_advance_at(), Some(t0 + ms(2200)));
}

#[test]
fn hover_is_independent_of_navigation() {
    let t0 = Instant::now();
    let state = CarouselReducer::reduce(manual(6, t0), CarouselIntent::SetHovered { id: Some(1) });
    assert_eq!(state.hovered_id(), Some(1));
    let state = CarouselReducer::reduce(state, CarouselIntent::SetHovered { id: None });
    assert_eq!(state.hovered_id(), None);
    assert_eq!(state.current_index(), 0);
}
