//! Dial configuration: an explicit, typed parameter struct with documented
//! defaults, built through a generated builder.

use std::sync::Arc;

use bon::Builder;

use crate::text::{LabelFont, MonoFont};

/// Color representation for dial elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a 24-bit `0xRRGGBB` value.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Default major tick labels.
pub const DEFAULT_TICK_LABELS: [&str; 5] = ["0", "25", "50", "75", "100"];

/// Configuration for a [`Dial`](crate::Dial), immutable after construction.
///
/// Build one with [`DialConfig::builder()`]; every field has a default, so
/// `DialConfig::builder().build()` is a complete 100x100 dial.
#[derive(Debug, Clone, Builder)]
pub struct DialConfig {
    /// Pixel x-position of the widget.
    #[builder(default = 100)]
    pub x: i32,
    /// Pixel y-position of the widget.
    #[builder(default = 100)]
    pub y: i32,

    /// Requested width, in pixels.
    #[builder(default = 100)]
    pub width: u32,
    /// Requested height, in pixels. The face height is re-derived from the
    /// width so the dial stays circular; the request only participates in
    /// validation.
    #[builder(default = 100)]
    pub height: u32,
    /// Keep-out border around the dial, in pixels, leaving room for labels.
    #[builder(default = 5)]
    pub padding: u32,

    /// Needle stroke width, in pixels.
    #[builder(default = 3)]
    pub needle_width: u32,
    /// Gap between the dial circle and the needle tip, in pixels.
    #[builder(default = 10)]
    pub needle_pad: u32,
    /// Span the full diameter instead of center-to-rim.
    #[builder(default = false)]
    pub needle_full: bool,
    /// Needle fill color.
    #[builder(default = Color::from_hex(0x880000))]
    pub needle_color: Color,
    /// Keep the needle between `min_value` and `max_value`; unset it for
    /// unlimited rotation.
    #[builder(default = true)]
    pub limit_rotation: bool,

    /// Starting value; defaults to `min_value`.
    pub value: Option<f64>,
    /// The minimum value displayed on the dial.
    #[builder(default = 0.0)]
    pub min_value: f64,
    /// The maximum value displayed on the dial.
    #[builder(default = 100.0)]
    pub max_value: f64,

    /// Tick line and outline color.
    #[builder(default = Color::from_hex(0xFFFFFF))]
    pub tick_color: Color,
    /// Total number of major ticks.
    #[builder(default = 5)]
    pub major_ticks: u32,
    /// Major tick line stroke width, in pixels.
    #[builder(default = 4)]
    pub major_tick_stroke: u32,
    /// Major tick length, in pixels.
    #[builder(default = 10)]
    pub major_tick_length: u32,
    /// Strings for the major tick labels.
    #[builder(default = DEFAULT_TICK_LABELS.iter().map(|s| s.to_string()).collect())]
    pub major_tick_labels: Vec<String>,
    /// Number of minor ticks per major interval.
    #[builder(default = 5)]
    pub minor_ticks: u32,
    /// Minor tick line stroke width, in pixels.
    #[builder(default = 1)]
    pub minor_tick_stroke: u32,
    /// Minor tick length, in pixels.
    #[builder(default = 5)]
    pub minor_tick_length: u32,

    /// Font for the major tick labels.
    #[builder(default = Arc::new(MonoFont::new()) as Arc<dyn LabelFont>)]
    pub tick_label_font: Arc<dyn LabelFont>,
    /// Color for the major tick labels.
    #[builder(default = Color::from_hex(0xFFFFFF))]
    pub tick_label_color: Color,
    /// Rotate the major tick labels to match the tick angle. Rotation is
    /// currently applied unconditionally; the flag is recorded but not yet
    /// consulted by the label painter.
    #[builder(default = true)]
    pub rotate_tick_labels: bool,
    /// Scaling applied to the tick labels.
    #[builder(default = 1.0)]
    pub tick_label_scale: f64,

    /// Background color; `None` leaves the face transparent.
    pub background_color: Option<Color>,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
