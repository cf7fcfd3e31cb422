use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MISSING: Color = Color::BrightBlack;

pub const IPV4_ADDR: Color = Color::BrightBlue;
pub const MAC_ADDR: Color = Color::Magenta;
pub const VENDOR: Color = Color::Yellow;
pub const PORTS: Color = Color::Green;

pub const OS_APPLE: Color = Color::BrightCyan;
pub const OS_UNKNOWN: Color = Color::BrightBlack;
