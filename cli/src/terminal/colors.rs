use colored::Color;

pub const PRIMARY: Color = Color::BrightWhite;
pub const ACCENT: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV6_ADDR: Color = Color::BrightBlue;
pub const IPV6_PREFIX: Color = Color::Blue;
pub const IPV4_ADDR: Color = Color::BrightCyan;
pub const ZONE: Color = Color::Magenta;
pub const BITS: Color = Color::Yellow;
