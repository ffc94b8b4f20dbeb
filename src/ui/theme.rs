use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xa8, 0x55, 0xf7);
pub const ACCENT_ALT: Color = Color::Rgb(0xec, 0x48, 0x99);
pub const TEXT: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const TEXT_BRIGHT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const TEXT_FAINT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const FIELD_IDLE: Color = Color::Rgb(0x37, 0x41, 0x51);
