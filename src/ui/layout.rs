use ratatui::layout::Rect;

/// Width and height of the clickable `‹` / `›` edge buttons.
const BUTTON_SIZE: u16 = 3;

/// Splits the frame into header, body, and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Drawable and clickable regions of the carousel body.
///
/// The renderer and the mouse hit-tester both derive geometry from
/// here, so a control is clickable exactly where it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderChrome {
    /// Full-width area the slides translate across.
    pub stage: Rect,
    /// Retreat control at the left edge of the stage.
    pub left_button: Rect,
    /// Advance control at the right edge of the stage.
    pub right_button: Rect,
    /// Row reserved for the dot indicators, under the stage.
    pub dot_row: Rect,
}

pub fn slider_chrome(body: Rect) -> SliderChrome {
    let dot_height = 1.min(body.height);
    let stage = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: body.height.saturating_sub(dot_height),
    };
    let dot_row = Rect {
        x: body.x,
        y: stage.y + stage.height,
        width: body.width,
        height: dot_height,
    };

    let button_width = BUTTON_SIZE.min(stage.width);
    let button_height = BUTTON_SIZE.min(stage.height);
    let button_y = stage.y + stage.height.saturating_sub(button_height) / 2;
    let left_button = Rect {
        x: stage.x,
        y: button_y,
        width: button_width,
        height: button_height,
    };
    let right_button = Rect {
        x: stage.x + stage.width.saturating_sub(button_width),
        y: button_y,
        width: button_width,
        height: button_height,
    };

    SliderChrome {
        stage,
        left_button,
        right_button,
        dot_row,
    }
}

/// Projects a percentage offset onto the stage and returns the visible
/// portion of a slide positioned there, or `None` when the slide lies
/// entirely off-stage. A slide at 0% fills the stage; at whole-width
/// offsets (±100%, ±200%, ...) it sits exactly outside it.
pub fn slide_rect(stage: Rect, offset_percent: i64) -> Option<Rect> {
    if stage.width == 0 || stage.height == 0 {
        return None;
    }

    let stage_left = i64::from(stage.x);
    let width = i64::from(stage.width);
    let left = stage_left + offset_percent * width / 100;
    let right = left + width;

    let visible_left = left.max(stage_left);
    let visible_right = right.min(stage_left + width);
    if visible_left >= visible_right {
        return None;
    }

    Some(Rect {
        x: visible_left as u16,
        y: stage.y,
        width: (visible_right - visible_left) as u16,
        height: stage.height,
    })
}
