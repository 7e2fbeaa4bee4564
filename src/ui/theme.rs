use ratatui::style::Color;

pub const ACCENT_GREEN: Color = Color::Rgb(0x5e, 0xc5, 0x76);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SLIDE_TITLE: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SLIDE_BODY: Color = Color::Rgb(0xbb, 0xbb, 0xbb);
pub const SLIDE_BYLINE: Color = Color::Rgb(0x8a, 0x8a, 0x8a);
pub const BUTTON_GLYPH: Color = ACCENT_GREEN;
pub const DOT_ACTIVE: Color = ACCENT_GREEN;
pub const DOT_INACTIVE: Color = Color::Rgb(0x73, 0x73, 0x73);
