use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x22, 0xa3, 0x5e);
pub const GALLERY_RED: Color = Color::Rgb(0xdc, 0x26, 0x26);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_PAUSED: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const BACKDROP_TEXT: Color = Color::Rgb(0x2a, 0x2a, 0x2a);
