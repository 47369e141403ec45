//! Stacked visual layers and the compositor that flattens them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::Color;
use crate::raster::{Bitmap, Palette};

/// A shared, mutable handle to a layer in a stack.
pub type LayerHandle = Rc<RefCell<Layer>>;

/// One visual layer: an indexed raster or a filled polygon shape, each with
/// its own palette and position.
#[derive(Debug, Clone)]
pub enum Layer {
    Raster {
        bitmap: Bitmap,
        palette: Palette,
        x: i32,
        y: i32,
    },
    Shape {
        points: Vec<(i32, i32)>,
        palette: Palette,
        x: i32,
        y: i32,
    },
}

impl Layer {
    pub fn raster(bitmap: Bitmap, palette: Palette, x: i32, y: i32) -> Self {
        Layer::Raster {
            bitmap,
            palette,
            x,
            y,
        }
    }

    pub fn shape(points: Vec<(i32, i32)>, palette: Palette, x: i32, y: i32) -> Self {
        Layer::Shape {
            points,
            palette,
            x,
            y,
        }
    }

    pub fn into_handle(self) -> LayerHandle {
        Rc::new(RefCell::new(self))
    }

    /// Replace a shape layer's point list wholesale. No-op on raster layers.
    pub fn set_points(&mut self, new_points: &[(i32, i32)]) {
        if let Layer::Shape { points, .. } = self {
            points.clear();
            points.extend_from_slice(new_points);
        }
    }
}

/// An ordered list of layers presented together, bottom first.
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    layers: Vec<LayerHandle>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layer: LayerHandle) {
        self.layers.push(layer);
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Flatten the stack into an RGBA8 frame of `width` x `height` pixels.
    /// Pixels in transparent palette slots leave the frame untouched.
    pub fn render(&self, frame: &mut [u8], width: usize, height: usize) {
        for layer in &self.layers {
            match &*layer.borrow() {
                Layer::Raster {
                    bitmap,
                    palette,
                    x,
                    y,
                } => render_raster(frame, width, height, bitmap, palette, *x, *y),
                Layer::Shape {
                    points,
                    palette,
                    x,
                    y,
                } => render_shape(frame, width, height, points, palette, *x, *y),
            }
        }
    }
}

fn put_pixel(frame: &mut [u8], width: usize, height: usize, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
        return;
    }
    let idx = (y as usize * width + x as usize) * 4;
    if idx + 4 <= frame.len() {
        frame[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, 0xff]);
    }
}

fn render_raster(
    frame: &mut [u8],
    width: usize,
    height: usize,
    bitmap: &Bitmap,
    palette: &Palette,
    x: i32,
    y: i32,
) {
    for by in 0..bitmap.height() as i32 {
        for bx in 0..bitmap.width() as i32 {
            let slot = bitmap.get(bx, by).unwrap_or(0) as usize;
            if palette.is_transparent(slot) {
                continue;
            }
            put_pixel(frame, width, height, x + bx, y + by, palette.color(slot));
        }
    }
}

fn render_shape(
    frame: &mut [u8],
    width: usize,
    height: usize,
    points: &[(i32, i32)],
    palette: &Palette,
    x: i32,
    y: i32,
) {
    if points.len() < 3 || palette.is_transparent(0) {
        return;
    }
    let color = palette.color(0);
    let min_x = points.iter().map(|p| p.0).min().unwrap_or(0);
    let max_x = points.iter().map(|p| p.0).max().unwrap_or(0);
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);
    for py in min_y..=max_y {
        for px in min_x..=max_x {
            if point_in_polygon(points, px, py) {
                put_pixel(frame, width, height, x + px, y + py, color);
            }
        }
    }
}

/// Inside test for a convex polygon: every edge cross product shares a sign,
/// whichever winding the points arrived in.
fn point_in_polygon(points: &[(i32, i32)], px: i32, py: i32) -> bool {
    let mut positive = false;
    let mut negative = false;
    for (i, &(x0, y0)) in points.iter().enumerate() {
        let (x1, y1) = points[(i + 1) % points.len()];
        let cross = (x1 - x0) as i64 * (py - y0) as i64 - (y1 - y0) as i64 * (px - x0) as i64;
        if cross > 0 {
            positive = true;
        }
        if cross < 0 {
            negative = true;
        }
        if positive && negative {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &[u8], width: usize, x: usize, y: usize) -> (u8, u8, u8, u8) {
        let idx = (y * width + x) * 4;
        (frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3])
    }

    #[test]
    fn transparent_slots_leave_the_frame_alone() {
        let bitmap = Bitmap::new(2, 2);
        let mut palette = Palette::new(1);
        palette.make_transparent(0);
        let mut stack = LayerStack::new();
        stack.push(Layer::raster(bitmap, palette, 0, 0).into_handle());

        let mut frame = vec![7u8; 2 * 2 * 4];
        stack.render(&mut frame, 2, 2);
        assert_eq!(pixel(&frame, 2, 0, 0), (7, 7, 7, 7));
    }

    #[test]
    fn opaque_raster_pixels_overwrite_the_frame() {
        let mut bitmap = Bitmap::new(2, 1);
        bitmap.set(1, 0, 0);
        let mut palette = Palette::new(1);
        palette.set(0, Color::from_hex(0x123456));
        let mut stack = LayerStack::new();
        stack.push(Layer::raster(bitmap, palette, 1, 0).into_handle());

        let mut frame = vec![0u8; 4 * 1 * 4];
        stack.render(&mut frame, 4, 1);
        assert_eq!(pixel(&frame, 4, 0, 0), (0, 0, 0, 0));
        assert_eq!(pixel(&frame, 4, 1, 0), (0x12, 0x34, 0x56, 0xff));
        assert_eq!(pixel(&frame, 4, 2, 0), (0x12, 0x34, 0x56, 0xff));
    }

    #[test]
    fn shapes_fill_their_polygon() {
        let mut palette = Palette::new(1);
        palette.set(0, Color::from_hex(0xff0000));
        let layer = Layer::shape(vec![(1, 1), (5, 1), (5, 4), (1, 4)], palette, 0, 0);
        let handle = layer.into_handle();
        let mut stack = LayerStack::new();
        stack.push(handle.clone());

        let mut frame = vec![0u8; 8 * 8 * 4];
        stack.render(&mut frame, 8, 8);
        assert_eq!(pixel(&frame, 8, 3, 2), (0xff, 0, 0, 0xff));
        assert_eq!(pixel(&frame, 8, 0, 0), (0, 0, 0, 0));
        assert_eq!(pixel(&frame, 8, 6, 5), (0, 0, 0, 0));

        // Replacing the point list moves the fill.
        handle.borrow_mut().set_points(&[(4, 4), (7, 4), (7, 7), (4, 7)]);
        let mut moved = vec![0u8; 8 * 8 * 4];
        stack.render(&mut moved, 8, 8);
        assert_eq!(pixel(&moved, 8, 3, 2), (0, 0, 0, 0));
        assert_eq!(pixel(&moved, 8, 6, 5), (0xff, 0, 0, 0xff));
    }

    #[test]
    fn either_polygon_winding_fills() {
        let mut palette = Palette::new(1);
        palette.set(0, Color::from_hex(0x00ff00));
        // Counter-clockwise order of the same rectangle.
        let layer = Layer::shape(vec![(1, 4), (5, 4), (5, 1), (1, 1)], palette, 0, 0);
        let mut stack = LayerStack::new();
        stack.push(layer.into_handle());

        let mut frame = vec![0u8; 8 * 8 * 4];
        stack.render(&mut frame, 8, 8);
        assert_eq!(pixel(&frame, 8, 3, 2), (0, 0xff, 0, 0xff));
    }

    #[test]
    fn shapes_clip_at_the_frame_edge() {
        let mut palette = Palette::new(1);
        palette.set(0, Color::from_hex(0x0000ff));
        let layer = Layer::shape(vec![(-4, -4), (2, -4), (2, 2), (-4, 2)], palette, 0, 0);
        let mut stack = LayerStack::new();
        stack.push(layer.into_handle());

        let mut frame = vec![0u8; 4 * 4 * 4];
        stack.render(&mut frame, 4, 4);
        assert_eq!(pixel(&frame, 4, 0, 0), (0, 0, 0xff, 0xff));
        assert_eq!(pixel(&frame, 4, 2, 2), (0, 0, 0xff, 0xff));
        assert_eq!(pixel(&frame, 4, 3, 3), (0, 0, 0, 0));
    }
}
