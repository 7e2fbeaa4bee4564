//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;

use carousel_tui::config::{Config, SlideConfig};
use carousel_tui::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tempfile::TempDir;

pub const TERM_COLS: u16 = 80;
pub const TERM_ROWS: u16 = 24;

/// App over a deck of `slide_count` numbered slides, sized so mouse
/// hit-testing works.
pub fn make_app(slide_count: usize) -> App {
    let mut config = Config::default();
    config.slides = (0..slide_count)
        .map(|i| slide(&format!("Slide {i}")))
        .collect();
    let mut app = App::new(&config);
    app.on_resize(TERM_COLS, TERM_ROWS);
    app
}

pub fn slide(title: &str) -> SlideConfig {
    SlideConfig {
        title: title.to_string(),
        body: "body".to_string(),
        attribution: None,
    }
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

/// Writes `contents` to a config.toml inside a fresh temp dir.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}
