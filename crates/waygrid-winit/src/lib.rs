//! Winit graphical frontend for waygrid.
//!
//! Opens a native window and drives a [`Model`] with translated input,
//! rendering each [`ViewFrame`] through:
//! - [`winit`] for window creation and input events
//! - [`softbuffer`] for CPU-based pixel presentation
//! - [`fontdue`] for button labels and the status banner
//!
//! While the model returns [`Effect::Animate`], the driver delivers a
//! [`Msg::Tick`] per presented frame, which is how search-animation replay
//! is paced.

mod input;
mod renderer;

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use waygrid_core::{
    Effect, Model, Point, ViewFrame, VisualizerConfig,
    messages::{MouseAction, Msg},
};

use renderer::FrameRenderer;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the winit frontend.
pub struct WinitConfig {
    /// Window title.
    pub title: String,
    /// Grid dimension, cell pixel size, and palette.
    pub viz: VisualizerConfig,
    /// Window size in pixels. The grid area occupies the top
    /// `viz.grid_px()` square; the rest is the control band.
    pub window_width: i32,
    pub window_height: i32,
    /// Font bytes (TTF/OTF) for button labels and the banner. Without a
    /// font, text is skipped and rectangles still render.
    pub font_data: Option<Vec<u8>>,
    /// Font size in pixels.
    pub font_size: f32,
}

impl Default for WinitConfig {
    fn default() -> Self {
        let viz = VisualizerConfig::default();
        Self {
            title: "waygrid".into(),
            viz,
            window_width: viz.grid_px(),
            window_height: viz.grid_px() + 100,
            font_data: None,
            font_size: 18.0,
        }
    }
}

// ---------------------------------------------------------------------------
// WinitDriver
// ---------------------------------------------------------------------------

/// Winit-based graphical driver.
///
/// Owns the main-thread event loop and runs a boxed [`Model`] to completion.
pub struct WinitDriver {
    config: WinitConfig,
}

impl WinitDriver {
    pub fn new(config: WinitConfig) -> Self {
        Self { config }
    }

    /// Run the event loop until the model returns [`Effect::End`] or the
    /// window is closed.
    pub fn run(self, model: Box<dyn Model>) -> Result<(), Box<dyn std::error::Error>> {
        let event_loop = EventLoop::new()?;
        let frame = ViewFrame::new(self.config.viz.dimension);
        let mut app = WinitApp {
            config: self.config,
            model,
            frame,
            state: None,
            cursor: Point::ZERO,
            animating: false,
        };
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// WinitApp — ApplicationHandler
// ---------------------------------------------------------------------------

struct WinitApp {
    config: WinitConfig,
    model: Box<dyn Model>,
    frame: ViewFrame,
    state: Option<WinitState>,
    /// Last cursor position in physical pixels, so click events carry real
    /// coordinates.
    cursor: Point,
    animating: bool,
}

struct WinitState {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    renderer: FrameRenderer,
    surface_width: u32,
    surface_height: u32,
}

impl WinitApp {
    /// Feed a message to the model and track its effect request.
    fn dispatch(&mut self, msg: Msg, event_loop: &ActiveEventLoop) {
        match self.model.update(msg) {
            Some(Effect::End) => event_loop.exit(),
            Some(Effect::Animate) => self.animating = true,
            None => self.animating = false,
        }
    }

    fn render(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        self.frame.reset();
        self.model.draw(&mut self.frame);
        state.renderer.render(&self.frame);

        let (width, height) = (state.surface_width, state.surface_height);
        if width == 0 || height == 0 {
            return;
        }
        let mut buf = match state.surface.buffer_mut() {
            Ok(b) => b,
            Err(e) => {
                log::warn!("surface buffer unavailable: {e}");
                return;
            }
        };
        state
            .renderer
            .blit_to_buffer(&mut buf, width as usize, height as usize);
        buf.present().ok();

        if self.animating {
            state.window.request_redraw();
        }
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return; // already initialized
        }

        let width = self.config.window_width.max(1) as u32;
        let height = self.config.window_height.max(1) as u32;

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("failed to create window"),
        );

        let context =
            softbuffer::Context::new(window.clone()).expect("failed to create softbuffer context");
        let mut surface = softbuffer::Surface::new(&context, window.clone())
            .expect("failed to create softbuffer surface");
        surface
            .resize(
                NonZeroU32::new(width).unwrap_or(NonZeroU32::new(1).unwrap()),
                NonZeroU32::new(height).unwrap_or(NonZeroU32::new(1).unwrap()),
            )
            .ok();

        let renderer = FrameRenderer::new(
            self.config.viz,
            width as usize,
            height as usize,
            self.config.font_data.as_deref(),
            self.config.font_size,
        );

        self.state = Some(WinitState {
            window,
            surface,
            renderer,
            surface_width: width,
            surface_height: height,
        });

        self.dispatch(Msg::Init, event_loop);
        self.render();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.dispatch(Msg::Quit, event_loop);
                event_loop.exit();
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(state) = self.state.as_mut() {
                    state.surface_width = width;
                    state.surface_height = height;
                    state
                        .surface
                        .resize(
                            NonZeroU32::new(width).unwrap_or(NonZeroU32::new(1).unwrap()),
                            NonZeroU32::new(height).unwrap_or(NonZeroU32::new(1).unwrap()),
                        )
                        .ok();
                }
                self.render();
            }

            WindowEvent::RedrawRequested => {
                if self.animating {
                    self.dispatch(Msg::Tick, event_loop);
                }
                self.render();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(msg) = input::translate_keyboard(&event) {
                    self.dispatch(msg, event_loop);
                    self.render();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as i32, position.y as i32);
                self.dispatch(
                    Msg::Mouse {
                        action: MouseAction::Move,
                        pos: self.cursor,
                        time: Instant::now(),
                    },
                    event_loop,
                );
                self.render();
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                if let Some(action) = input::translate_mouse_button(btn_state, button) {
                    self.dispatch(
                        Msg::Mouse {
                            action,
                            pos: self.cursor,
                            time: Instant::now(),
                        },
                        event_loop,
                    );
                    self.render();
                }
            }

            _ => {}
        }
    }
}
