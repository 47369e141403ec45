//! Pure trigonometry mapping dial parameters to pixel coordinates.
//!
//! Two angle conventions are in play and both are intentional: tick and
//! label anchors use [`point_on_circle`] (angle 0 at the top of the dial,
//! clockwise positive), while the needle model offsets its thickness with
//! the transposed sine/cosine pairing. Unifying them changes the rendered
//! output.

use std::f64::consts::PI;

use crate::error::{DialError, DialResult};

/// Degrees-to-radians factor.
pub(crate) const DEG: f64 = 2.0 * PI / 360.0;

/// Geometry derived once from the requested dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialGeometry {
    /// Dial center in face-local coordinates.
    pub center: (i32, i32),
    /// Radius of the tick circle, in pixels.
    pub radius: i32,
    /// Width of the face raster.
    pub face_width: u32,
    /// Height of the face raster, derived from the width.
    pub face_height: u32,
}

/// Size the face raster and locate the dial circle inside it.
///
/// The height is recomputed from the width so the dial stays circular; the
/// caller's height only participates in validation.
pub fn dial_dimensions(width: u32, height: u32, padding: u32) -> DialResult<DialGeometry> {
    let usable_w = width as i64 - 2 * padding as i64;
    let usable_h = height as i64 - 2 * padding as i64;
    if usable_w < 0 || usable_h < 0 {
        return Err(DialError::InvalidDimension {
            width,
            height,
            padding,
        });
    }

    let radius = (usable_w as f64 / 2.0).round() as i32;
    let center = (radius + padding as i32, radius + padding as i32);
    let face_height = (usable_w as f64).ceil() as u32 + 2 * padding;

    Ok(DialGeometry {
        center,
        radius,
        face_width: width,
        face_height,
    })
}

/// Angle of tick `index` out of `count`, sweeping -180 to +180 degrees.
///
/// A degenerate count places the single tick at the start of the sweep.
pub fn angle_for_tick(index: u32, count: u32) -> f64 {
    if count <= 1 {
        return -PI;
    }
    (-180.0 + index as f64 * 360.0 / (count as f64 - 1.0)) * DEG
}

/// Angle for a value, taken as a ratio of the range span `max - min`.
pub fn angle_for_value(value: f64, min_value: f64, max_value: f64) -> f64 {
    let position = value / (max_value - min_value);
    DEG * (-180.0 + 360.0 * position)
}

/// Point on the tick circle: angle 0 at the top, clockwise positive.
pub fn point_on_circle(center: (i32, i32), radius: f64, angle: f64) -> (f64, f64) {
    (
        center.0 as f64 + radius * angle.sin(),
        center.1 as f64 - radius * angle.cos(),
    )
}
