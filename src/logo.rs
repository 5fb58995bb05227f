//! Placeholder logo: a solid banner with the app name drawn on it.

use std::fs;
use std::path::Path;

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};

use crate::errors::ScribeError;

/// Where `scribe logo` writes the image, and where the page serves it from.
pub const LOGO_PATH: &str = "logo4.jpg";
/// Preferred TrueType font, looked up relative to the working directory.
pub const FONT_PATH: &str = "Arial Bold.ttf";

pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 200;
const BACKGROUND: Rgb<u8> = Rgb([0xDD, 0x33, 0x00]);
const TEXT_COLOR: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
const TEXT: &str = "AI Content Writer";
const TEXT_ORIGIN: (i32, i32) = (50, 70);
const FONT_SIZE: f32 = 40.0;
/// Each bitmap font pixel becomes a square this many pixels wide.
const BITMAP_SCALE: i32 = 2;

/// Which font ended up drawing the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoFont {
    TrueType,
    Builtin,
}

/// Draw the logo and write it to `output`. The format follows the file extension.
///
/// A font that cannot be read or parsed is replaced by the built-in bitmap font.
pub fn create_logo(output: &Path, font_path: &Path) -> Result<LogoFont, ScribeError> {
    let mut canvas = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    let used = match load_font(font_path) {
        Some(font) => {
            draw_truetype(&mut canvas, &font, TEXT_ORIGIN, TEXT);
            LogoFont::TrueType
        }
        None => {
            draw_bitmap(&mut canvas, TEXT_ORIGIN, TEXT);
            LogoFont::Builtin
        }
    };

    canvas.save(output)?;
    log::info!("Wrote {}x{} logo to {}", WIDTH, HEIGHT, output.display());
    Ok(used)
}

fn load_font(path: &Path) -> Option<FontVec> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            log::debug!("Font {} unavailable ({}), using built-in font", path.display(), e);
            return None;
        }
    };
    match FontVec::try_from_vec(data) {
        Ok(font) => Some(font),
        Err(e) => {
            log::debug!("Font {} is invalid ({}), using built-in font", path.display(), e);
            None
        }
    }
}

fn draw_truetype(canvas: &mut RgbImage, font: &FontVec, origin: (i32, i32), text: &str) {
    let scale = PxScale::from(FONT_SIZE);
    let scaled = font.as_scaled(scale);
    let mut caret = point(origin.0 as f32, origin.1 as f32 + scaled.ascent());
    let mut previous: Option<GlyphId> = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret.x += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, caret);
        caret.x += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                let px = bounds.min.x as i32 + x as i32;
                let py = bounds.min.y as i32 + y as i32;
                blend(canvas, px, py, coverage);
            });
        }
    }
}

fn draw_bitmap(canvas: &mut RgbImage, origin: (i32, i32), text: &str) {
    let advance = 8 * BITMAP_SCALE;
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = BASIC_FONTS.get(c) else {
            continue;
        };
        let left = origin.0 + i as i32 * advance;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..8 {
                // Bit 0 is the leftmost pixel.
                if bits & (1 << col) == 0 {
                    continue;
                }
                for dy in 0..BITMAP_SCALE {
                    for dx in 0..BITMAP_SCALE {
                        let px = left + col * BITMAP_SCALE + dx;
                        let py = origin.1 + row as i32 * BITMAP_SCALE + dy;
                        blend(canvas, px, py, 1.0);
                    }
                }
            }
        }
    }
}

fn blend(canvas: &mut RgbImage, x: i32, y: i32, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    for (channel, text) in pixel.0.iter_mut().zip(TEXT_COLOR.0) {
        let mixed = *channel as f32 * (1.0 - coverage) + text as f32 * coverage;
        *channel = mixed.round() as u8;
    }
}
