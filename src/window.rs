//! Windowed presentation of a dial through winit and pixels.

use std::sync::mpsc::Receiver;
use std::time::Instant;

use pixels::{Pixels, SurfaceTexture};
use tracing::debug;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::layer::LayerStack;
use crate::Dial;

/// Command enum for driving a displayed dial
#[derive(Debug, Clone)]
pub enum DialCommand {
    SetValue(f64),
}

/// Backdrop behind transparent face pixels.
const BACKDROP: (u8, u8, u8) = (0x10, 0x10, 0x10);

const MAX_FRAMERATE: f64 = 60.0;

impl Dial {
    /// Open a window showing the dial at its configured position.
    pub fn show(self, title: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.run_window(title, None)
    }

    /// Open a window and feed the dial from a command channel. Commands are
    /// drained without blocking once per frame.
    pub fn show_with_commands(
        self,
        title: &str,
        receiver: Receiver<DialCommand>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.run_window(title, Some(receiver))
    }

    fn run_window(
        mut self,
        title: &str,
        receiver: Option<Receiver<DialCommand>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (x, y, face_width, face_height) = self.bounding_box();
        let logical_width = (x.max(0) as u32 * 2 + face_width).max(1);
        let logical_height = (y.max(0) as u32 * 2 + face_height).max(1);

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(
                logical_width as f64,
                logical_height as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)?;
        let window = std::sync::Arc::new(window);
        let window_clone = window.clone();

        let mut stack = LayerStack::new();
        self.append_to(&mut stack);

        let size = window.inner_size();
        let mut fb_width = size.width as usize;
        let mut fb_height = size.height as usize;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;
        debug!(width = fb_width, height = fb_height, "opened dial window");

        let frame_duration = std::time::Duration::from_secs_f64(1.0 / MAX_FRAMERATE);
        let mut last_frame = Instant::now();

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Poll);
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        fb_width = new_size.width as usize;
                        fb_height = new_size.height as usize;
                        let _ = pixels.resize_buffer(new_size.width, new_size.height);
                        let _ = pixels.resize_surface(new_size.width, new_size.height);
                    }
                    WindowEvent::RedrawRequested => {
                        if let Some(ref receiver) = receiver {
                            while let Ok(command) = receiver.try_recv() {
                                match command {
                                    DialCommand::SetValue(value) => self.set_value(value),
                                }
                            }
                        }

                        let frame = pixels.frame_mut();
                        for chunk in frame.chunks_exact_mut(4) {
                            chunk.copy_from_slice(&[BACKDROP.0, BACKDROP.1, BACKDROP.2, 0xff]);
                        }
                        stack.render(frame, fb_width, fb_height);
                        let _ = pixels.render();
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() >= frame_duration {
                        window_clone.request_redraw();
                        last_frame = Instant::now();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}
