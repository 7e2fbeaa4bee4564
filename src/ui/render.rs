use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::dots::DotRow;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, slider_chrome};
use crate::ui::slides::SlideStage;
use crate::ui::theme::BUTTON_GLYPH;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.deck().len()), header);

    let chrome = slider_chrome(body);
    frame.render_widget(Clear, body);
    // Slides before dots: no frame may show the dot row disagreeing
    // with the slide positions.
    SlideStage::new(app.deck(), app.slider()).render(frame, chrome.stage);
    frame.render_widget(nav_button("‹"), chrome.left_button);
    frame.render_widget(nav_button("›"), chrome.right_button);
    DotRow::new().render(frame, chrome.dot_row, app.slider());

    frame.render_widget(Footer::new().widget(footer), footer);
}

/// A `‹` or `›` glyph centered in its 3x3 click region.
fn nav_button(glyph: &str) -> Paragraph<'static> {
    let style = Style::default().fg(BUTTON_GLYPH).add_modifier(Modifier::BOLD);
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(glyph.to_string(), style)).centered(),
        Line::from(""),
    ])
}
