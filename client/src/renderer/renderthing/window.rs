use std::{sync::Arc, time::Duration};

use anyhow::Context;
use log::{info, warn};
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu::TextureFormat};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId},
};

use super::{frame::RenderFrame, sleeper::Sleeper};

pub(super) struct RendererWindow {
    config: RendererWindowConfig,
    resumed_window: Option<ResumedWindow>,
    sleeper: Sleeper,
    error: Option<anyhow::Error>,
}

impl RendererWindow {
    pub fn new(config: RendererWindowConfig) -> Self {
        let sleeper = Sleeper::new(config.frame_interval);

        Self {
            config,
            resumed_window: None,
            sleeper,
            error: None,
        }
    }

    /// The error that made the event loop exit, if any.
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        warn!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_resumed_window(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> anyhow::Result<ResumedWindow> {
        let window = Arc::new({
            let window_size =
                LogicalSize::new(self.config.width as f64, self.config.height as f64);

            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(self.config.title.clone())
                        .with_inner_size(window_size),
                )
                .context("Creating window")?
        });

        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            // The buffer keeps the board's size; pixels scales it up to the surface.
            PixelsBuilder::new(
                self.config.buffer_width,
                self.config.buffer_height,
                surface_texture,
            )
            .texture_format(TextureFormat::Rgba8UnormSrgb)
            .build()
            .context("Creating pixels buffer")?
        };

        Ok(ResumedWindow { window, pixels })
    }
}

pub struct RendererWindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub buffer_width: u32,
    pub buffer_height: u32,
    pub frame_interval: Duration,
    pub draw_callback: Box<dyn FnMut(RenderFrame)>,
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl ApplicationHandler for RendererWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resumed_window.is_some() {
            return;
        }

        match self.create_resumed_window(event_loop) {
            Ok(resumed_window) => {
                resumed_window.window.request_redraw();
                self.resumed_window = Some(resumed_window);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(ResumedWindow { window, pixels }) = self.resumed_window.as_mut() else {
            return;
        };

        match event {
            WindowEvent::RedrawRequested => {
                let next_frame = RenderFrame {
                    width: self.config.buffer_width,
                    height: self.config.buffer_height,
                    buffer: pixels.frame_mut(),
                };

                (self.config.draw_callback)(next_frame);

                // Let pixels do the actual hard work
                if let Err(e) = pixels.render().context("Rendering with pixels") {
                    self.fail(event_loop, e);
                    return;
                }

                self.sleeper.sleep();
                window.request_redraw();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                // Minimized windows report a zero size, which the surface can't take.
                if width == 0 || height == 0 {
                    return;
                }

                if let Err(e) = pixels
                    .resize_surface(width, height)
                    .context("Resizing pixels surface")
                {
                    self.fail(event_loop, e);
                    return;
                }

                window.request_redraw();
            }
            WindowEvent::CloseRequested => {
                info!("Quit requested");
                event_loop.exit();
            }
            _ => {}
        }
    }
}
