// Centralized theme colors.
//
// Pixels are packed as 0xAARRGGBB. The alpha byte only matters for sprites,
// where 0x00 means "leave the destination pixel alone"; everything else is
// drawn opaque.

pub const DESKTOP_BG: u32 = 0xFF33_99FF;

pub const WINDOW_BG: u32 = 0xFFBB_BBBB;
pub const WINDOW_BORDER: u32 = 0xFF00_0000;
pub const TITLE_ACTIVE: u32 = 0xFF70_90D0;
pub const TITLE_INACTIVE: u32 = 0xFF80_8090;
pub const TITLE_TEXT: u32 = 0xFFFF_FFFF;

pub const BUTTON_FRAME: u32 = 0xFF00_0000;
pub const BUTTON_TEXT: u32 = 0xFF00_0000;

pub const TEXT_BOX_BG: u32 = 0xFFFF_FFFF;
pub const TEXT_BOX_BORDER: u32 = 0xFF00_0000;
pub const TEXT_BOX_TEXT: u32 = 0xFF00_0000;

pub const CURSOR_OUTLINE: u32 = 0xFF00_0000;
pub const CURSOR_FILL: u32 = 0xFFFF_FFFF;
pub const TRANSPARENT: u32 = 0x0000_0000;

/// Inner bevel of an idle button: one step darker than the window background.
pub const fn button_bevel() -> u32 {
    WINDOW_BG - 0x0010_1010
}

/// Inner bevel of a toggled button.
pub const fn button_bevel_toggled() -> u32 {
    TITLE_ACTIVE
}

/// Split a packed pixel into its `(r, g, b)` channels.
pub const fn rgb(pixel: u32) -> (u8, u8, u8) {
    (
        ((pixel >> 16) & 0xFF) as u8,
        ((pixel >> 8) & 0xFF) as u8,
        (pixel & 0xFF) as u8,
    )
}

/// Whether a sprite pixel should be drawn.
pub const fn is_opaque(pixel: u32) -> bool {
    pixel & 0xFF00_0000 != 0
}
