use crate::ui::mvi::Intent;

/// Navigation actions for the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderIntent {
    /// Advance one slide, wrapping from the last slide to the first.
    Next,
    /// Go back one slide, wrapping from the first slide to the last.
    Previous,
    /// Jump straight to a slide, as when a dot is clicked. Indices
    /// outside the deck leave the state unchanged.
    JumpTo(usize),
}

impl Intent for SliderIntent {}
