//! Paints a rendered ratatui buffer into an RGB raster.
//!
//! Each cell becomes an 8×16 tile: the 8×8 `font8x8` glyph with every row
//! doubled, so the tile keeps a terminal cell's 1:2 shape. The whole tile is
//! then multiplied by the oversampling factor.

use font8x8::{UnicodeFonts, BASIC_FONTS, BLOCK_FONTS, BOX_FONTS, GREEK_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use ratatui::buffer::{Buffer, Cell};
use ratatui::style::{Color, Modifier};

pub const CELL_WIDTH: u32 = 8;
pub const CELL_HEIGHT: u32 = 16;

/// Background of `Color::Reset` cells: the light paper tone of the list panel.
pub const PAPER: Rgb<u8> = Rgb([241, 241, 240]);
/// Foreground of `Color::Reset` cells.
pub const INK: Rgb<u8> = Rgb([51, 51, 51]);

const FALLBACK_GLYPH: char = '?';

fn glyph(c: char) -> [u8; 8] {
    if c == ' ' {
        return [0; 8];
    }
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BOX_FONTS.get(c))
        .or_else(|| BLOCK_FONTS.get(c))
        .or_else(|| GREEK_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get(FALLBACK_GLYPH))
        .unwrap_or([0; 8])
}

const ANSI: [[u8; 3]; 16] = [
    [0, 0, 0],
    [205, 49, 49],
    [13, 188, 121],
    [229, 229, 16],
    [36, 114, 200],
    [188, 63, 188],
    [17, 168, 205],
    [229, 229, 229],
    [102, 102, 102],
    [241, 76, 76],
    [35, 209, 139],
    [245, 245, 67],
    [59, 142, 234],
    [214, 112, 214],
    [41, 184, 219],
    [255, 255, 255],
];

fn indexed(index: u8) -> Rgb<u8> {
    match index {
        0..=15 => Rgb(ANSI[usize::from(index)]),
        16..=231 => {
            let i = index - 16;
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            Rgb([level(i / 36), level((i / 6) % 6), level(i % 6)])
        }
        232..=255 => {
            let gray = 8 + (index - 232) * 10;
            Rgb([gray, gray, gray])
        }
    }
}

/// Maps a terminal color to RGB; `Reset` resolves to `default`.
pub fn color_rgb(color: Color, default: Rgb<u8>) -> Rgb<u8> {
    match color {
        Color::Reset => default,
        Color::Black => indexed(0),
        Color::Red => indexed(1),
        Color::Green => indexed(2),
        Color::Yellow => indexed(3),
        Color::Blue => indexed(4),
        Color::Magenta => indexed(5),
        Color::Cyan => indexed(6),
        Color::Gray => indexed(7),
        Color::DarkGray => indexed(8),
        Color::LightRed => indexed(9),
        Color::LightGreen => indexed(10),
        Color::LightYellow => indexed(11),
        Color::LightBlue => indexed(12),
        Color::LightMagenta => indexed(13),
        Color::LightCyan => indexed(14),
        Color::White => indexed(15),
        Color::Indexed(i) => indexed(i),
        Color::Rgb(r, g, b) => Rgb([r, g, b]),
    }
}

/// Size in pixels of the raster for `buffer` at `scale`.
pub fn raster_size(buffer: &Buffer, scale: u32) -> (u32, u32) {
    (
        u32::from(buffer.area.width) * CELL_WIDTH * scale,
        u32::from(buffer.area.height) * CELL_HEIGHT * scale,
    )
}

/// Rasterizes every cell of `buffer`. A zero `scale` is treated as 1.
pub fn rasterize(buffer: &Buffer, scale: u32) -> RgbImage {
    let scale = scale.max(1);
    let (width, height) = raster_size(buffer, scale);
    let mut image = RgbImage::from_pixel(width, height, PAPER);
    let area = buffer.area;

    for row in 0..area.height {
        for col in 0..area.width {
            if let Some(cell) = buffer.cell((area.x + col, area.y + row)) {
                paint_cell(&mut image, cell, u32::from(col), u32::from(row), scale);
            }
        }
    }

    image
}

fn paint_cell(image: &mut RgbImage, cell: &Cell, col: u32, row: u32, scale: u32) {
    let mut fg = color_rgb(cell.fg, INK);
    let mut bg = color_rgb(cell.bg, PAPER);
    if cell.modifier.contains(Modifier::REVERSED) {
        std::mem::swap(&mut fg, &mut bg);
    }

    let mut rows = glyph(cell.symbol().chars().next().unwrap_or(' '));
    if cell.modifier.contains(Modifier::BOLD) {
        for bits in rows.iter_mut() {
            *bits |= *bits << 1;
        }
    }
    let crossed = cell.modifier.contains(Modifier::CROSSED_OUT);
    let underlined = cell.modifier.contains(Modifier::UNDERLINED);

    let origin_x = col * CELL_WIDTH * scale;
    let origin_y = row * CELL_HEIGHT * scale;

    for ty in 0..CELL_HEIGHT {
        let bits = rows[(ty / 2) as usize];
        let rule = (crossed && ty == CELL_HEIGHT / 2) || (underlined && ty == CELL_HEIGHT - 1);
        for tx in 0..CELL_WIDTH {
            let on = rule || bits & (1 << tx) != 0;
            let color = if on { fg } else { bg };
            fill(image, origin_x + tx * scale, origin_y + ty * scale, scale, color);
        }
    }
}

fn fill(image: &mut RgbImage, x: u32, y: u32, size: u32, color: Rgb<u8>) {
    for dy in 0..size {
        for dx in 0..size {
            image.put_pixel(x + dx, y + dy, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn test_size_follows_cells_and_scale() {
        let buffer = Buffer::empty(Rect::new(0, 0, 10, 3));
        assert_eq!(raster_size(&buffer, 4), (320, 192));
        let image = rasterize(&buffer, 4);
        assert_eq!(image.dimensions(), (320, 192));
    }

    #[test]
    fn test_blank_buffer_is_paper() {
        let buffer = Buffer::empty(Rect::new(0, 0, 2, 1));
        let image = rasterize(&buffer, 1);
        assert!(image.pixels().all(|p| *p == PAPER));
    }

    #[test]
    fn test_glyph_uses_foreground() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 1, 1));
        buffer.set_string(0, 0, "#", Style::default().fg(Color::Red));
        let image = rasterize(&buffer, 1);
        assert!(image.pixels().any(|p| *p == indexed(1)));
    }

    #[test]
    fn test_background_fills_cell() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 1, 1));
        buffer.set_string(0, 0, " ", Style::default().bg(Color::Blue));
        let image = rasterize(&buffer, 2);
        assert!(image.pixels().all(|p| *p == indexed(4)));
    }

    #[test]
    fn test_crossed_out_draws_rule() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 1, 1));
        buffer.set_string(
            0,
            0,
            " ",
            Style::default().add_modifier(Modifier::CROSSED_OUT),
        );
        let image = rasterize(&buffer, 1);
        for x in 0..CELL_WIDTH {
            assert_eq!(*image.get_pixel(x, CELL_HEIGHT / 2), INK);
        }
    }

    #[test]
    fn test_offset_area_is_read_relative() {
        let mut buffer = Buffer::empty(Rect::new(5, 7, 1, 1));
        buffer.set_string(5, 7, " ", Style::default().bg(Color::Green));
        let image = rasterize(&buffer, 1);
        assert_eq!(*image.get_pixel(0, 0), indexed(2));
    }

    #[test]
    fn test_color_cube() {
        assert_eq!(indexed(16), Rgb([0, 0, 0]));
        assert_eq!(indexed(231), Rgb([255, 255, 255]));
        assert_eq!(indexed(232), Rgb([8, 8, 8]));
        assert_eq!(color_rgb(Color::Rgb(1, 2, 3), INK), Rgb([1, 2, 3]));
    }
}
