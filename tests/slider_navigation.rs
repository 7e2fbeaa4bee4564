//! Navigation properties of the slider state machine: wrap-around,
//! offsets, direct jumps, and the single-active invariant.

mod common;

use carousel_tui::ui::mvi::Reducer;
use carousel_tui::ui::slider::{SliderIntent, SliderReducer, SliderState};
use common::*;
use crossterm::event::KeyCode;

fn assert_single_active(state: &SliderState) {
    let at_zero: Vec<usize> = (0..state.slide_count())
        .filter(|&i| state.offset_percent(i) == 0)
        .collect();
    assert_eq!(at_zero, vec![state.current()]);

    let active: Vec<usize> = (0..state.slide_count())
        .filter(|&i| state.is_active(i))
        .collect();
    assert_eq!(active, vec![state.current()]);
}

// -- wrap-around ------------------------------------------------------------

#[test]
fn next_from_last_wraps_to_first() {
    let mut app = make_app(4);
    for _ in 0..3 {
        app.next_slide();
    }
    assert_eq!(app.slider().current(), 3);

    app.next_slide();
    assert_eq!(app.slider().current(), 0);
}

#[test]
fn previous_from_first_wraps_to_last() {
    let mut app = make_app(4);
    app.previous_slide();
    assert_eq!(app.slider().current(), 3);
}

#[test]
fn full_forward_cycle_returns_to_start() {
    let mut app = make_app(5);
    for _ in 0..5 {
        app.next_slide();
    }
    assert_eq!(app.slider().current(), 0);
}

// -- offsets ----------------------------------------------------------------

#[test]
fn offsets_follow_the_hundred_percent_formula() {
    let mut app = make_app(4);
    app.next_slide();

    let offsets: Vec<i64> = (0..4).map(|i| app.slider().offset_percent(i)).collect();
    assert_eq!(offsets, vec![100, 0, -100, -200]);
}

#[test]
fn initial_state_shows_slide_zero() {
    let app = make_app(4);
    assert_eq!(app.slider().current(), 0);
    assert_eq!(app.slider().offset_percent(0), 0);
    assert_single_active(app.slider());
}

// -- direct jumps -----------------------------------------------------------

#[test]
fn jump_lands_on_target_from_any_start() {
    for start in 0..5 {
        let mut app = make_app(5);
        for _ in 0..start {
            app.next_slide();
        }
        app.jump_to(2);
        assert_eq!(app.slider().current(), 2);
        assert_single_active(app.slider());
    }
}

#[test]
fn jump_to_active_slide_changes_nothing() {
    let mut app = make_app(5);
    app.jump_to(2);
    let before = *app.slider();

    app.jump_to(2);
    assert_eq!(*app.slider(), before);
}

#[test]
fn jump_past_end_is_rejected_not_wrapped() {
    let mut app = make_app(4);
    app.next_slide();
    let before = *app.slider();

    app.jump_to(4);
    assert_eq!(*app.slider(), before);
    app.jump_to(100);
    assert_eq!(*app.slider(), before);
}

// -- invariants -------------------------------------------------------------

#[test]
fn range_and_single_active_hold_across_mixed_input() {
    let mut app = make_app(4);
    let inputs = [
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Right,
        KeyCode::Left,
        KeyCode::Left,
        KeyCode::Left,
    ];
    for code in inputs {
        app.on_key(press_key(code));
        assert!(app.slider().current() < app.slider().slide_count());
        assert_single_active(app.slider());
    }
}

#[test]
fn reducer_keeps_range_on_a_single_slide_deck() {
    let mut state = SliderState::new(1);
    for intent in [SliderIntent::Next, SliderIntent::Previous, SliderIntent::JumpTo(0)] {
        state = SliderReducer::reduce(state, intent);
        assert_eq!(state.current(), 0);
    }
}
