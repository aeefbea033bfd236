use ratatui::style::Color;

pub const BG_PRIMARY: Color = Color::Rgb(16, 14, 24);
pub const FG_PRIMARY: Color = Color::Rgb(222, 220, 232);
pub const FG_DIM: Color = Color::Rgb(132, 128, 148);

pub const ACCENT: Color = Color::Rgb(154, 120, 255);

pub const BAR_BG: Color = Color::Rgb(34, 28, 52);
pub const BAR_TEXT: Color = Color::Rgb(235, 232, 248);

pub const LANG_ACTIVE_BG: Color = Color::Rgb(154, 120, 255);
pub const LANG_ACTIVE_TEXT: Color = Color::Rgb(20, 16, 32);
pub const LANG_IDLE_TEXT: Color = Color::Rgb(170, 165, 190);

pub const OVERLAY_BG: Color = Color::Rgb(8, 7, 12);
pub const OVERLAY_BORDER: Color = Color::Rgb(154, 120, 255);

pub const BUBBLE_BG: Color = Color::Rgb(220, 208, 254);
pub const BUBBLE_TEXT: Color = Color::Rgb(10, 10, 10);
