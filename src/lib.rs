// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

//! A circular dial gauge widget for small raster displays.
//!
//! The widget is a pure, synchronous function of configuration plus current
//! value to a pair of stacked layers: a static face raster (outline, ticks,
//! labels) painted once at construction, and a needle polygon recomputed on
//! every value change. Present the layers yourself through [`LayerStack`],
//! or open a window with [`Dial::show`].
//!
//! ```
//! use dial::{Dial, DialConfig, LayerStack};
//!
//! let config = DialConfig::builder()
//!     .x(0)
//!     .y(0)
//!     .width(150)
//!     .height(150)
//!     .padding(12)
//!     .build();
//! let mut dial = Dial::new(config)?;
//! dial.set_value(42.0);
//!
//! let mut stack = LayerStack::new();
//! dial.append_to(&mut stack);
//!
//! let mut frame = vec![0u8; 150 * 150 * 4];
//! stack.render(&mut frame, 150, 150);
//! # Ok::<(), dial::DialError>(())
//! ```

mod config;
mod error;
mod face;
mod geometry;
mod layer;
mod needle;
mod raster;
mod text;
mod window;

pub use config::{Color, DialConfig, DEFAULT_TICK_LABELS};
pub use error::{DialError, DialResult};
pub use geometry::{angle_for_tick, angle_for_value, dial_dimensions, point_on_circle, DialGeometry};
pub use layer::{Layer, LayerHandle, LayerStack};
pub use raster::{rotozoom, Bitmap, Palette};
pub use text::{GlyphBox, LabelFont, MonoFont, VectorFont};
pub use window::DialCommand;

use needle::Needle;
use tracing::debug;

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// The dial widget: a static face layer plus a repositionable needle layer.
#[derive(Debug)]
pub struct Dial {
    config: DialConfig,
    geometry: DialGeometry,
    face: LayerHandle,
    needle_layer: LayerHandle,
    needle: Needle,
}

impl Dial {
    /// Build the widget: derive the geometry, paint the face raster once,
    /// and position the needle at the starting value.
    pub fn new(config: DialConfig) -> DialResult<Self> {
        let font_height = text::font_height(
            config.tick_label_font.as_ref(),
            config.tick_label_scale,
            !config.major_tick_labels.is_empty(),
        )?;
        let geometry = geometry::dial_dimensions(config.width, config.height, config.padding)?;
        debug!(
            width = geometry.face_width,
            height = geometry.face_height,
            radius = geometry.radius,
            "sized dial face"
        );

        let mut bitmap = Bitmap::new(geometry.face_width, geometry.face_height);
        face::draw_ticks(
            &mut bitmap,
            geometry.center,
            geometry.radius,
            config.major_ticks,
            config.major_tick_stroke,
            config.major_tick_length,
        );
        face::draw_ticks(
            &mut bitmap,
            geometry.center,
            geometry.radius,
            face::minor_tick_total(config.major_ticks, config.minor_ticks),
            config.minor_tick_stroke,
            config.minor_tick_length,
        );
        face::draw_labels(
            &mut bitmap,
            geometry.center,
            geometry.radius,
            &config.major_tick_labels,
            config.tick_label_font.as_ref(),
            config.tick_label_scale,
            font_height,
        );
        face::draw_outline(&mut bitmap, geometry.center, geometry.radius);

        let mut palette = Palette::new(4);
        match config.background_color {
            Some(background) => palette.set(0, background),
            None => {
                palette.make_transparent(0);
                palette.set(0, Color::new(0, 0, 0));
            }
        }
        palette.set(1, config.tick_label_color);
        palette.set(2, config.tick_color);

        let face = Layer::raster(bitmap, palette, config.x, config.y).into_handle();

        let needle = Needle::new(geometry, &config);
        let mut needle_palette = Palette::new(1);
        needle_palette.set(0, config.needle_color);
        let needle_layer =
            Layer::shape(needle.points().to_vec(), needle_palette, config.x, config.y)
                .into_handle();

        Ok(Self {
            config,
            geometry,
            face,
            needle_layer,
            needle,
        })
    }

    /// The dial's current value.
    pub fn value(&self) -> f64 {
        self.needle.value()
    }

    /// Assign a new value, repositioning the needle layer. Re-assigning the
    /// current value leaves the polygon untouched.
    pub fn set_value(&mut self, value: f64) {
        if self.needle.set_value(value) {
            self.needle_layer
                .borrow_mut()
                .set_points(self.needle.points());
        }
    }

    /// Geometry derived at construction.
    pub fn geometry(&self) -> DialGeometry {
        self.geometry
    }

    /// Widget bounding box `(x, y, width, height)` in parent coordinates.
    pub fn bounding_box(&self) -> (i32, i32, u32, u32) {
        (
            self.config.x,
            self.config.y,
            self.geometry.face_width,
            self.geometry.face_height,
        )
    }

    /// The current needle polygon.
    pub fn needle_points(&self) -> [(i32, i32); 4] {
        *self.needle.points()
    }

    /// Append the face and needle layers, in stacking order, to a
    /// compositor.
    pub fn append_to(&self, stack: &mut LayerStack) {
        stack.push(self.face.clone());
        stack.push(self.needle_layer.clone());
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug)]
    struct NoMetrics;

    impl LabelFont for NoMetrics {
        fn rasterize(&self, _text: &str) -> Bitmap {
            Bitmap::new(0, 0)
        }
    }

    fn pixel(frame: &[u8], width: usize, x: usize, y: usize) -> (u8, u8, u8) {
        let idx = (y * width + x) * 4;
        (frame[idx], frame[idx + 1], frame[idx + 2])
    }

    #[test]
    fn default_construction_succeeds() {
        let dial = Dial::new(DialConfig::default()).unwrap();
        assert_eq!(dial.bounding_box(), (100, 100, 100, 100));
        assert_eq!(dial.geometry().radius, 45);
        assert_eq!(dial.value(), 0.0);
    }

    #[test]
    fn starting_value_comes_from_the_config() {
        let config = DialConfig::builder().value(60.0).build();
        let dial = Dial::new(config).unwrap();
        assert_eq!(dial.value(), 60.0);
    }

    #[test]
    fn invalid_dimensions_fail_construction() {
        let config = DialConfig::builder().width(10).height(10).padding(10).build();
        assert_eq!(
            Dial::new(config).unwrap_err(),
            DialError::InvalidDimension {
                width: 10,
                height: 10,
                padding: 10
            }
        );
    }

    #[test]
    fn metric_free_fonts_fail_construction_only_with_labels() {
        let config = DialConfig::builder()
            .tick_label_font(Arc::new(NoMetrics))
            .build();
        assert_eq!(Dial::new(config).unwrap_err(), DialError::UnsupportedFont);

        let config = DialConfig::builder()
            .tick_label_font(Arc::new(NoMetrics))
            .major_tick_labels(Vec::new())
            .build();
        assert!(Dial::new(config).is_ok());
    }

    #[test]
    fn transparent_background_leaves_the_frame_alone() {
        let config = DialConfig::builder().x(0).y(0).build();
        let dial = Dial::new(config).unwrap();
        let mut stack = LayerStack::new();
        dial.append_to(&mut stack);
        assert_eq!(stack.len(), 2);

        let mut frame = vec![9u8; 100 * 100 * 4];
        stack.render(&mut frame, 100, 100);
        // The corner is outside the dial circle; with no background color it
        // stays whatever the frame held before.
        assert_eq!(pixel(&frame, 100, 0, 0), (9, 9, 9));
    }

    #[test]
    fn opaque_background_paints_the_whole_face() {
        let config = DialConfig::builder()
            .x(0)
            .y(0)
            .background_color(Color::from_hex(0x202020))
            .build();
        let dial = Dial::new(config).unwrap();
        let mut stack = LayerStack::new();
        dial.append_to(&mut stack);

        let mut frame = vec![0u8; 100 * 100 * 4];
        stack.render(&mut frame, 100, 100);
        assert_eq!(pixel(&frame, 100, 0, 0), (0x20, 0x20, 0x20));
    }

    #[test]
    fn value_updates_move_the_needle_layer() {
        let config = DialConfig::builder().x(0).y(0).build();
        let mut dial = Dial::new(config).unwrap();
        let before = dial.needle_points();

        dial.set_value(0.0);
        assert_eq!(dial.needle_points(), before);

        dial.set_value(75.0);
        let after = dial.needle_points();
        assert_ne!(after, before);

        // The shape layer saw the same replacement.
        let mut stack = LayerStack::new();
        dial.append_to(&mut stack);
        let mut frame = vec![0u8; 100 * 100 * 4];
        stack.render(&mut frame, 100, 100);
        let needle = Color::from_hex(0x880000);
        let hit = frame
            .chunks_exact(4)
            .any(|px| (px[0], px[1], px[2]) == needle.as_tuple());
        assert!(hit, "needle color missing from the rendered frame");
    }
}
