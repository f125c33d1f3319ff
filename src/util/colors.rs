use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00e8b86b);
pub const SECONDARY: Color = Color::from_u32(0x008a6a3a);
pub const NEUTRAL: Color = Color::from_u32(0x00505050);
pub const BACKGROUND: Color = Color::from_u32(0x00111014);
pub const TEXT: Color = Color::from_u32(0x00e6e1d6);
pub const ERROR: Color = Color::from_u32(0x00e5534b);
