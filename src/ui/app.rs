use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::config::{Config, SlideConfig};
use crate::ui::dots;
use crate::ui::layout::{body_rect, slider_chrome, SliderChrome};
use crate::ui::mvi::Reducer;
use crate::ui::slider::{SliderIntent, SliderReducer, SliderState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Carousel position (MVI pattern).
    slider: SliderState,
    /// Slide content, fixed at startup.
    deck: Vec<SlideConfig>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            size: None,
            slider: SliderState::new(config.slides.len()),
            deck: config.slides.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn slider(&self) -> &SliderState {
        &self.slider
    }

    pub fn deck(&self) -> &[SlideConfig] {
        &self.deck
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Arrow keys navigate; every other key is a no-op here.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Left => self.previous_slide(),
            KeyCode::Right => self.next_slide(),
            _ => {}
        }
    }

    /// Routes a click to the control it landed on. Clicks that hit
    /// neither an edge button nor a dot are ignored.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        let Some(chrome) = self.chrome() else {
            return;
        };

        let position = Position {
            x: mouse.column,
            y: mouse.row,
        };
        if chrome.left_button.contains(position) {
            self.previous_slide();
        } else if chrome.right_button.contains(position) {
            self.next_slide();
        } else if let Some(index) = dots::hit_test(
            chrome.dot_row,
            self.slider.slide_count(),
            mouse.column,
            mouse.row,
        ) {
            self.jump_to(index);
        }
    }

    pub fn next_slide(&mut self) {
        self.dispatch_slider(SliderIntent::Next);
    }

    pub fn previous_slide(&mut self) {
        self.dispatch_slider(SliderIntent::Previous);
    }

    pub fn jump_to(&mut self, index: usize) {
        self.dispatch_slider(SliderIntent::JumpTo(index));
    }

    fn dispatch_slider(&mut self, intent: SliderIntent) {
        tracing::debug!(?intent, current = self.slider.current(), "slider intent");
        dispatch_mvi!(self, slider, SliderReducer, intent);
    }

    /// Chrome geometry for the current terminal size. The renderer
    /// computes the same geometry, so hit targets always match what is
    /// on screen. `None` until the first resize arrives.
    fn chrome(&self) -> Option<SliderChrome> {
        let (cols, rows) = self.size?;
        let body = body_rect(Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        });
        Some(slider_chrome(body))
    }
}
