//! The stage: full-width slide panels translated horizontally by the
//! slider offset. Each slide is drawn at the rectangle its offset
//! projects onto the stage; slides that project off-stage are skipped.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::config::SlideConfig;
use crate::ui::layout::slide_rect;
use crate::ui::slider::SliderState;
use crate::ui::theme::{SLIDE_BODY, SLIDE_BYLINE, SLIDE_TITLE};

/// Horizontal padding keeping slide text clear of the edge buttons.
const TEXT_MARGIN: u16 = 6;

pub struct SlideStage<'a> {
    deck: &'a [SlideConfig],
    state: &'a SliderState,
}

impl<'a> SlideStage<'a> {
    pub fn new(deck: &'a [SlideConfig], state: &'a SliderState) -> Self {
        Self { deck, state }
    }

    pub fn render(&self, frame: &mut Frame<'_>, stage: Rect) {
        for (index, slide) in self.deck.iter().enumerate() {
            let Some(rect) = slide_rect(stage, self.state.offset_percent(index)) else {
                continue;
            };
            let lines = panel_lines(slide);
            let text = text_rect(rect, lines.len() as u16);
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                text,
            );
        }
    }
}

fn panel_lines(slide: &SlideConfig) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            slide.title.clone(),
            Style::default().fg(SLIDE_TITLE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            slide.body.clone(),
            Style::default().fg(SLIDE_BODY),
        )),
    ];
    if let Some(attribution) = &slide.attribution {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("- {}", attribution),
            Style::default()
                .fg(SLIDE_BYLINE)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

/// Vertically centers `line_count` lines inside `rect`, inset from the
/// edge buttons.
fn text_rect(rect: Rect, line_count: u16) -> Rect {
    let margin = TEXT_MARGIN.min(rect.width / 2);
    let width = rect.width.saturating_sub(margin * 2);
    let height = rect.height.min(line_count.max(1));
    let y = rect.y + rect.height.saturating_sub(height) / 2;
    Rect {
        x: rect.x + margin,
        y,
        width,
        height,
    }
}
