//! The dot indicator row: one dot per slide, in slide order, with the
//! active slide's dot filled. Each dot cell is tagged with its slide
//! index through its position, and clicks resolve back through the
//! same geometry.

use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::slider::SliderState;
use crate::ui::theme::{DOT_ACTIVE, DOT_INACTIVE};

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

/// Horizontal cells per dot: the dot itself plus a gap.
const DOT_STRIDE: u16 = 2;

/// Cells occupied by the dots inside `area`, centered, in slide order.
/// Dots that do not fit the row width are omitted from the end.
pub fn dot_cells(area: Rect, slide_count: usize) -> Vec<Rect> {
    if area.width == 0 || area.height == 0 || slide_count == 0 {
        return Vec::new();
    }

    let span = (slide_count as u64 * u64::from(DOT_STRIDE) - 1).min(u64::from(area.width)) as u16;
    let start_x = area.x + (area.width - span) / 2;
    let row_end = area.x + area.width;

    let mut cells = Vec::new();
    for index in 0..slide_count {
        let Some(offset) = u16::try_from(index as u64 * u64::from(DOT_STRIDE)).ok() else {
            break;
        };
        let x = start_x.saturating_add(offset);
        if x >= row_end {
            break;
        }
        cells.push(Rect {
            x,
            y: area.y,
            width: 1,
            height: 1,
        });
    }
    cells
}

/// Resolves a click to the slide index of the dot it landed on.
/// Gap cells and clicks outside the row resolve to `None`.
pub fn hit_test(area: Rect, slide_count: usize, column: u16, row: u16) -> Option<usize> {
    dot_cells(area, slide_count)
        .iter()
        .position(|cell| cell.contains(Position { x: column, y: row }))
}

pub struct DotRow;

impl Default for DotRow {
    fn default() -> Self {
        Self::new()
    }
}

impl DotRow {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, state: &SliderState) {
        for (index, cell) in dot_cells(area, state.slide_count()).into_iter().enumerate() {
            let (glyph, color) = if state.is_active(index) {
                (ACTIVE_DOT, DOT_ACTIVE)
            } else {
                (INACTIVE_DOT, DOT_INACTIVE)
            };
            let dot = Paragraph::new(Line::from(Span::styled(glyph, Style::default().fg(color))));
            frame.render_widget(dot, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Rect {
        Rect {
            x: 0,
            y: 20,
            width: 80,
            height: 1,
        }
    }

    #[test]
    fn one_cell_per_slide_centered() {
        let cells = dot_cells(row(), 4);
        assert_eq!(cells.len(), 4);
        // span = 7 cells over an 80-wide row starts at column 36
        assert_eq!(cells[0].x, 36);
        assert_eq!(cells[3].x, 42);
        for cell in &cells {
            assert_eq!((cell.width, cell.height), (1, 1));
            assert_eq!(cell.y, 20);
        }
    }

    #[test]
    fn click_on_dot_resolves_to_its_slide() {
        for index in 0..4 {
            let cell = dot_cells(row(), 4)[index];
            assert_eq!(hit_test(row(), 4, cell.x, cell.y), Some(index));
        }
    }

    #[test]
    fn click_on_gap_resolves_to_nothing() {
        let cells = dot_cells(row(), 4);
        let gap = cells[0].x + 1;
        assert_eq!(hit_test(row(), 4, gap, 20), None);
    }

    #[test]
    fn click_outside_the_row_resolves_to_nothing() {
        assert_eq!(hit_test(row(), 4, 0, 20), None);
        assert_eq!(hit_test(row(), 4, 36, 19), None);
    }

    #[test]
    fn empty_deck_has_no_cells() {
        assert!(dot_cells(row(), 0).is_empty());
    }

    #[test]
    fn narrow_row_drops_trailing_dots() {
        let narrow = Rect {
            x: 0,
            y: 0,
            width: 5,
            height: 1,
        };
        let cells = dot_cells(narrow, 10);
        assert!(cells.len() <= 3);
        for cell in &cells {
            assert!(cell.x < 5);
        }
    }
}
