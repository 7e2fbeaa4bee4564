use crate::ui::mvi::Reducer;
use crate::ui::slider::intent::SliderIntent;
use crate::ui::slider::state::SliderState;

pub struct SliderReducer;

impl Reducer for SliderReducer {
    type State = SliderState;
    type Intent = SliderIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = state.slide_count();
        if count == 0 {
            // Empty deck: nothing to navigate.
            return state;
        }

        match intent {
            SliderIntent::Next => state.with_current((state.current() + 1) % count),
            SliderIntent::Previous => state.with_current((state.current() + count - 1) % count),
            SliderIntent::JumpTo(index) if index < count => state.with_current(index),
            SliderIntent::JumpTo(_) => state,
        }
    }
}
