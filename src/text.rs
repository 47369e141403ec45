//! Tick label fonts and text rasterization.

use std::fmt;

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::error::{DialError, DialResult};
use crate::raster::Bitmap;

/// Palette slot used for glyph coverage in rasterized label bitmaps.
pub(crate) const LABEL_INDEX: u8 = 1;

/// Fixed cell metrics reported by cell-based fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBox {
    pub width: u32,
    pub height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
}

/// A font that can rasterize tick label strings.
///
/// Implementations advertise their vertical metric through one of two
/// capabilities: a fixed cell [`bounding_box`](LabelFont::bounding_box) or an
/// [`ascent`](LabelFont::ascent). A font providing neither cannot place
/// labels.
pub trait LabelFont: fmt::Debug + Send + Sync {
    /// Fixed cell box, for cell-based fonts.
    fn bounding_box(&self) -> Option<GlyphBox> {
        None
    }

    /// Ascent above the baseline, for metric-based fonts.
    fn ascent(&self) -> Option<f32> {
        None
    }

    /// Render `text` into an indexed bitmap with glyph pixels set to the
    /// label palette slot.
    fn rasterize(&self, text: &str) -> Bitmap;
}

/// Label height for `font` at `scale`, or 0 when there are no labels to
/// place. Fails with [`DialError::UnsupportedFont`] when the font advertises
/// neither metric capability.
pub(crate) fn font_height(
    font: &dyn LabelFont,
    scale: f64,
    has_labels: bool,
) -> DialResult<i32> {
    if !has_labels {
        return Ok(0);
    }
    if let Some(cell) = font.bounding_box() {
        Ok((scale * cell.height as f64) as i32)
    } else if let Some(ascent) = font.ascent() {
        Ok((scale * ascent as f64 + ascent as f64) as i32)
    } else {
        Err(DialError::UnsupportedFont)
    }
}

const CELL_WIDTH: u32 = 6; // 5 pixel glyph plus 1 pixel gap
const CELL_HEIGHT: u32 = 8;

/// Built-in 5x8 fixed-cell font covering the glyphs a gauge face needs:
/// digits, sign, decimal separators, percent, and colon. Characters outside
/// the set render as blank cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonoFont;

impl MonoFont {
    pub const fn new() -> Self {
        Self
    }

    /// Row bitmaps for a glyph, top to bottom, low 5 bits used.
    fn glyph(ch: char) -> Option<&'static [u8; 8]> {
        let rows: &[u8; 8] = match ch {
            '0' => &[0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E, 0x00],
            '1' => &[0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00],
            '2' => &[0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F, 0x00],
            '3' => &[0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E, 0x00],
            '4' => &[0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02, 0x00],
            '5' => &[0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E, 0x00],
            '6' => &[0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E, 0x00],
            '7' => &[0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08, 0x00],
            '8' => &[0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E, 0x00],
            '9' => &[0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C, 0x00],
            '-' => &[0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00],
            '+' => &[0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00, 0x00],
            '.' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00],
            ',' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
            '%' => &[0x19, 0x1A, 0x02, 0x04, 0x08, 0x0B, 0x13, 0x00],
            ':' => &[0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00, 0x00],
            ' ' => &[0x00; 8],
            _ => return None,
        };
        Some(rows)
    }
}

impl LabelFont for MonoFont {
    fn bounding_box(&self) -> Option<GlyphBox> {
        Some(GlyphBox {
            width: CELL_WIDTH,
            height: CELL_HEIGHT,
            x_offset: 0,
            y_offset: 0,
        })
    }

    fn rasterize(&self, text: &str) -> Bitmap {
        let cols = text.chars().count() as u32;
        let mut bitmap = Bitmap::new(cols * CELL_WIDTH, CELL_HEIGHT);
        for (col, ch) in text.chars().enumerate() {
            let Some(rows) = Self::glyph(ch) else {
                continue;
            };
            for (row, bits) in rows.iter().enumerate() {
                for bit in 0..5 {
                    if bits & (0x10 >> bit) != 0 {
                        bitmap.set(
                            col as i32 * CELL_WIDTH as i32 + bit,
                            row as i32,
                            LABEL_INDEX,
                        );
                    }
                }
            }
        }
        bitmap
    }
}

/// A vector font rasterized through `rusttype` at a fixed pixel size.
pub struct VectorFont {
    font: Font<'static>,
    px: f32,
}

impl VectorFont {
    /// Load a TTF/OTF from owned bytes, rendering at `px` pixels. Returns
    /// `None` when the data is not a usable font.
    pub fn from_vec(data: Vec<u8>, px: f32) -> Option<Self> {
        Font::try_from_vec(data).map(|font| Self { font, px })
    }

    pub fn size(&self) -> f32 {
        self.px
    }

    fn scale(&self) -> Scale {
        Scale::uniform(self.px)
    }
}

impl fmt::Debug for VectorFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorFont")
            .field("px", &self.px)
            .finish_non_exhaustive()
    }
}

impl LabelFont for VectorFont {
    fn ascent(&self) -> Option<f32> {
        Some(self.font.v_metrics(self.scale()).ascent)
    }

    fn rasterize(&self, text: &str) -> Bitmap {
        let v_metrics = self.font.v_metrics(self.scale());
        let glyphs: Vec<PositionedGlyph> = self
            .font
            .layout(text, self.scale(), point(0.0, v_metrics.ascent))
            .collect();
        let (min_x, max_x, min_y, max_y) = glyphs
            .iter()
            .filter_map(|g| g.pixel_bounding_box())
            .fold(
                (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
                |(min_x, max_x, min_y, max_y), bb| {
                    (
                        min_x.min(bb.min.x),
                        max_x.max(bb.max.x),
                        min_y.min(bb.min.y),
                        max_y.max(bb.max.y),
                    )
                },
            );
        if min_x > max_x || min_y > max_y {
            return Bitmap::new(0, 0);
        }
        let mut bitmap = Bitmap::new((max_x - min_x) as u32, (max_y - min_y) as u32);
        for glyph in glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    if coverage > 0.5 {
                        bitmap.set(
                            gx as i32 + bb.min.x - min_x,
                            gy as i32 + bb.min.y - min_y,
                            LABEL_INDEX,
                        );
                    }
                });
            }
        }
        bitmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct AscentOnly(f32);

    impl LabelFont for AscentOnly {
        fn ascent(&self) -> Option<f32> {
            Some(self.0)
        }

        fn rasterize(&self, _text: &str) -> Bitmap {
            Bitmap::new(0, 0)
        }
    }

    #[derive(Debug)]
    struct NoMetrics;

    impl LabelFont for NoMetrics {
        fn rasterize(&self, _text: &str) -> Bitmap {
            Bitmap::new(0, 0)
        }
    }

    #[test]
    fn mono_font_rasterizes_per_cell() {
        let raster = MonoFont::new().rasterize("25");
        assert_eq!(raster.width(), 12);
        assert_eq!(raster.height(), 8);
        let lit = (0..12)
            .flat_map(|x| (0..8).map(move |y| (x, y)))
            .filter(|&(x, y)| raster.get(x, y) == Some(LABEL_INDEX))
            .count();
        assert!(lit > 0);
    }

    #[test]
    fn unknown_characters_render_blank() {
        let raster = MonoFont::new().rasterize("@");
        assert_eq!(raster.width(), 6);
        for x in 0..6 {
            for y in 0..8 {
                assert_eq!(raster.get(x, y), Some(0));
            }
        }
    }

    #[test]
    fn cell_font_height_scales_the_cell() {
        assert_eq!(font_height(&MonoFont::new(), 1.0, true), Ok(8));
        assert_eq!(font_height(&MonoFont::new(), 2.0, true), Ok(16));
    }

    #[test]
    fn ascent_font_height_adds_the_raw_ascent() {
        assert_eq!(font_height(&AscentOnly(10.0), 2.0, true), Ok(30));
    }

    #[test]
    fn metric_free_fonts_are_unsupported() {
        assert_eq!(
            font_height(&NoMetrics, 1.0, true),
            Err(DialError::UnsupportedFont)
        );
        // No labels, no probe.
        assert_eq!(font_height(&NoMetrics, 1.0, false), Ok(0));
    }
}
