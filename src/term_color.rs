use ratatui::style::Color;

use crate::theme;

/// Whether the terminal advertises 24-bit colour (`COLORTERM` contains
/// `truecolor` or `24bit`).
pub fn truecolor_supported() -> bool {
    std::env::var("COLORTERM")
        .map(|var| {
            let lv = var.to_lowercase();
            lv.contains("truecolor") || lv.contains("24bit")
        })
        .unwrap_or(false)
}

/// Map an RGB triple to a `ratatui::style::Color` appropriate for the
/// current terminal. If truecolor is available we return
/// `Color::Rgb(r,g,b)`. Otherwise we return the nearest xterm-256
/// `Color::Indexed(idx)`.
pub fn map_rgb_to_color(r: u8, g: u8, b: u8) -> Color {
    map_rgb(r, g, b, truecolor_supported())
}

pub fn map_rgb(r: u8, g: u8, b: u8, truecolor: bool) -> Color {
    if truecolor {
        Color::Rgb(r, g, b)
    } else {
        Color::Indexed(rgb_to_xterm_index(r, g, b))
    }
}

/// Terminal colour for a packed `0xAARRGGBB` pixel. Alpha is ignored.
pub fn pixel_to_color(pixel: u32, truecolor: bool) -> Color {
    let (r, g, b) = theme::rgb(pixel);
    map_rgb(r, g, b, truecolor)
}

fn rgb_to_xterm_index(r: u8, g: u8, b: u8) -> u8 {
    // map to 6x6x6 cube (indices 16..231)
    let r6 = to_6cube(r) as i32;
    let g6 = to_6cube(g) as i32;
    let b6 = to_6cube(b) as i32;
    let cube_index = 16 + 36 * r6 + 6 * g6 + b6;

    let (cr, cg, cb) = from_6cube(r6 as u8, g6 as u8, b6 as u8);

    // also consider gray ramp 232..255
    let gray_index = rgb_to_gray_index(r, g, b) as i32;
    let (gr, gg, gb) = from_gray(gray_index as u8);

    let dist_cube = color_distance_sq(r, g, b, cr, cg, cb);
    let dist_gray = color_distance_sq(r, g, b, gr, gg, gb);

    if dist_gray < dist_cube {
        (232 + gray_index) as u8
    } else {
        cube_index as u8
    }
}

fn to_6cube(v: u8) -> u8 {
    ((v as u16 * 5 + 127) / 255) as u8
}

fn from_6cube(r6: u8, g6: u8, b6: u8) -> (u8, u8, u8) {
    let conv = |c: u8| match c {
        0 => 0u8,
        1 => 95u8,
        2 => 135u8,
        3 => 175u8,
        4 => 215u8,
        _ => 255u8,
    };
    (conv(r6), conv(g6), conv(b6))
}

fn rgb_to_gray_index(r: u8, g: u8, b: u8) -> u8 {
    let avg = (r as u16 + g as u16 + b as u16) / 3;
    ((avg * 23 + 127) / 255) as u8
}

fn from_gray(idx: u8) -> (u8, u8, u8) {
    let v = (8 + idx as u16 * 10).min(255) as u8;
    (v, v, v)
}

fn color_distance_sq(r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) -> u32 {
    let dr = r1 as i32 - r2 as i32;
    let dg = g1 as i32 - g2 as i32;
    let db = b1 as i32 - b2 as i32;
    (dr * dr + dg * dg + db * db) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_map_to_rgb_in_truecolor() {
        assert_eq!(
            pixel_to_color(0xFF12_3456, true),
            Color::Rgb(0x12, 0x34, 0x56)
        );
    }

    #[test]
    fn pure_colors_hit_cube_corners() {
        assert_eq!(map_rgb(255, 0, 0, false), Color::Indexed(196));
        assert_eq!(map_rgb(0, 0, 255, false), Color::Indexed(21));
        assert_eq!(map_rgb(255, 255, 255, false), Color::Indexed(231));
    }

    #[test]
    fn mid_grays_prefer_the_gray_ramp() {
        match map_rgb(0x80, 0x80, 0x80, false) {
            Color::Indexed(idx) => assert!(idx >= 232),
            other => panic!("unexpected color {other:?}"),
        }
    }

    #[test]
    fn cube_coordinates_survive_conversion() {
        for c in 0u8..=5 {
            let (r, _, _) = from_6cube(c, 0, 0);
            assert_eq!(to_6cube(r), c);
        }
    }
}
