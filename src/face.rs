//! Painting the static dial face: ticks, labels, and the outer circle.
//!
//! Everything here runs once, at construction; the face raster is never
//! repainted afterwards.

use std::f64::consts::PI;

use crate::geometry::{angle_for_tick, point_on_circle};
use crate::raster::{rotozoom, Bitmap};
use crate::text::LabelFont;

/// Palette slot for ticks and the outline.
pub(crate) const TICK_INDEX: u8 = 2;

/// Total minor tick count: `per_interval` subdivisions of each major
/// interval, sharing endpoints with the majors.
pub(crate) fn minor_tick_total(major_ticks: u32, per_interval: u32) -> u32 {
    per_interval * major_ticks.saturating_sub(1) + 1
}

/// Stamp `count` tick marks around the circle. A prototype strip is rotated
/// about its top-center pivot onto each anchor point; a degenerate count
/// draws nothing.
pub(crate) fn draw_ticks(
    face: &mut Bitmap,
    center: (i32, i32),
    radius: i32,
    count: u32,
    stroke: u32,
    length: u32,
) {
    if count <= 1 {
        return;
    }
    let mut strip = Bitmap::new(stroke, length);
    strip.fill(TICK_INDEX);
    let pivot_x = (stroke as f64 / 2.0).round() as i32;
    for index in 0..count {
        // Quantized to 1e-4 rad.
        let angle = (angle_for_tick(index, count) * 1e4).round() / 1e4;
        let (ax, ay) = point_on_circle(center, radius as f64, angle);
        rotozoom(
            face,
            &strip,
            ax.round() as i32,
            ay.round() as i32,
            pivot_x,
            0,
            angle,
            1.0,
            None,
        );
    }
}

/// Rasterize each label and stamp it just outside the tick circle, rotated
/// to its tick angle and scaled by `scale`.
pub(crate) fn draw_labels(
    face: &mut Bitmap,
    center: (i32, i32),
    radius: i32,
    labels: &[String],
    font: &dyn LabelFont,
    scale: f64,
    font_height: i32,
) {
    let count = labels.len() as u32;
    for (index, text) in labels.iter().enumerate() {
        let raster = font.rasterize(text);
        let angle = angle_for_tick(index as u32, count);
        let (ax, ay) = point_on_circle(center, (radius + font_height / 2) as f64, angle);
        rotozoom(
            face,
            &raster,
            ax.round() as i32,
            ay.round() as i32,
            (raster.width() / 2) as i32,
            (raster.height() / 2) as i32,
            angle,
            scale,
            None,
        );
    }
}

/// Outer circle outline, approximated by 360 one-degree segments.
pub(crate) fn draw_outline(face: &mut Bitmap, center: (i32, i32), radius: i32) {
    let mut points = Vec::with_capacity(361);
    for degree in 0..=360 {
        let angle = degree as f64 * PI / 180.0;
        points.push((
            center.0 + (radius as f64 * angle.cos()) as i32,
            center.1 + (radius as f64 * angle.sin()) as i32,
        ));
    }
    for pair in points.windows(2) {
        face.draw_line(pair[0].0, pair[0].1, pair[1].0, pair[1].1, TICK_INDEX);
    }
}
