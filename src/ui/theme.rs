use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FACT_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const LOADING_TEXT: Color = Color::Gray;
pub const ERROR_BACKGROUND: Color = Color::Rgb(0xb9, 0x1c, 0x1c);
pub const BUTTON_ACTIVE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const BUTTON_DISABLED: Color = Color::Rgb(0x52, 0x52, 0x52);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_PENDING: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
