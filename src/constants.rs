//! Shared crate-wide constants.

/// Thickness, in pixels, of the frame drawn around decorated windows.
///
/// Children of a decorated window are positioned relative to its client
/// origin, which sits this many pixels to the right of the outer edge.
pub const BORDER_WIDTH: i32 = 3;

/// Height, in pixels, of a decorated window's titlebar band, including the
/// top border and the separator drawn underneath the title.
///
/// Presses landing inside this band start a drag instead of being forwarded
/// to the window.
pub const TITLE_HEIGHT: i32 = 31;

/// Largest distance from its parent's client origin a window may be placed
/// at, on either axis. Screen geometry saturates past this, so deep trees
/// of far-flung windows clip instead of overflowing.
pub const MAX_COORDINATE: i32 = 1 << 24;

/// Width of one glyph cell. Text advances by this many pixels per char.
pub const GLYPH_WIDTH: i32 = 8;

/// Height of one glyph cell.
pub const GLYPH_HEIGHT: i32 = 12;

/// Pointer sprite dimensions.
pub const CURSOR_WIDTH: u16 = 11;
pub const CURSOR_HEIGHT: u16 = 18;

/// Button bit reported for the primary pointer button.
pub const BUTTON_PRIMARY: u8 = 0x1;
