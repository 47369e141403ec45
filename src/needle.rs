//! Needle state: the current value and the polygon that points at it.

use crate::config::DialConfig;
use crate::geometry::{angle_for_value, DialGeometry};

/// The rotating needle. Holds the current value and the four-point polygon
/// pointing at it; the polygon is replaced wholesale whenever the value
/// changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Needle {
    value: f64,
    min_value: f64,
    max_value: f64,
    limit_rotation: bool,
    width: u32,
    pad: u32,
    /// 1.0 when the needle spans the full diameter, 0.0 otherwise.
    tail: f64,
    center: (i32, i32),
    radius: i32,
    points: [(i32, i32); 4],
}

impl Needle {
    pub(crate) fn new(geometry: DialGeometry, config: &DialConfig) -> Self {
        let mut needle = Self {
            value: config.value.unwrap_or(config.min_value),
            min_value: config.min_value,
            max_value: config.max_value,
            limit_rotation: config.limit_rotation,
            width: config.needle_width,
            pad: config.needle_pad,
            tail: if config.needle_full { 1.0 } else { 0.0 },
            center: geometry.center,
            radius: geometry.radius,
            points: [(0, 0); 4],
        };
        needle.reposition();
        needle
    }

    /// The raw assigned value, unclamped.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The current polygon: tail pair first, tip pair second.
    pub fn points(&self) -> &[(i32, i32); 4] {
        &self.points
    }

    /// Assign a new value and report whether the polygon was recomputed.
    /// Assigning the current value is a no-op.
    pub fn set_value(&mut self, value: f64) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        self.reposition();
        true
    }

    fn reposition(&mut self) {
        let value = if self.limit_rotation {
            self.value.min(self.max_value).max(self.min_value)
        } else {
            self.value
        };
        let angle = angle_for_value(value, self.min_value, self.max_value);

        let (cx, cy) = (self.center.0 as f64, self.center.1 as f64);
        let reach = (self.radius - self.pad as i32) as f64;
        // Thickness offset, perpendicular to the needle axis.
        let d_x = (self.width as f64 / 2.0) * angle.cos();
        let d_y = (self.width as f64 / 2.0) * angle.sin();
        let tail_x = reach * angle.sin() * self.tail;
        let tail_y = reach * angle.cos() * self.tail;
        let tip_x = reach * angle.sin();
        let tip_y = reach * angle.cos();

        self.points = [
            (
                (cx - tail_x - d_x).round() as i32,
                (cy + tail_y - d_y).round() as i32,
            ),
            (
                (cx - tail_x + d_x).round() as i32,
                (cy + tail_y + d_y).round() as i32,
            ),
            (
                (cx + tip_x + d_x).round() as i32,
                (cy - tip_y + d_y).round() as i32,
            ),
            (
                (cx + tip_x - d_x).round() as i32,
                (cy - tip_y - d_y).round() as i32,
            ),
        ];
    }
}
