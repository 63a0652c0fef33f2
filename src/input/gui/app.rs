//! Main GUI application loop.

use std::error::Error;
use std::time::Instant;

use egui::Context;
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiWinitState;
use log::{debug, error, warn};
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::session::ExplorerSession;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::screen_size::ScreenSize;
use crate::core::viewport::ViewportWarning;
use crate::input::gui::overlay::{build_overlay, render_with_overlay};
use crate::input::sidebar::{PointerState, Sidebar};

struct App {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
    session: ExplorerSession,
    sidebar: Sidebar,
    pointer: PointerState,
    last_update: Instant,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl App {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        session: ExplorerSession,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
            sidebar: Sidebar::with_slider(session.slider()),
            session,
            pointer: PointerState::default(),
            last_update: Instant::now(),
            egui_ctx,
            egui_state,
        })
    }

    /// Advances the session by the wall-clock time since the last frame.
    fn update(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update).as_secs_f64();
        self.last_update = now;

        let input = self.sidebar.frame_input(&mut self.pointer);
        let report = self
            .session
            .update(elapsed, input.zoom_rate_input, input.toggle_requested);

        if let Some(ViewportWarning::NonFiniteElapsed) = report.warning {
            warn!("skipped zoom update for non-finite frame time");
        }
    }

    /// Renders the fractal, then the sidebar, into the pixels frame.
    fn draw(&mut self) -> Result<(), Box<dyn Error>> {
        let screen = ScreenSize::new(self.width, self.height)?;
        let buffer = self.session.render_frame(screen)?;
        let frame = self.pixels.frame_mut();

        for (src, dst) in buffer
            .buffer()
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(frame.chunks_exact_mut(BYTES_PER_PIXEL))
        {
            dst[..3].copy_from_slice(&src[..3]);
            dst[3] = 255;
        }

        self.sidebar.draw(
            frame,
            self.width,
            self.session.zoom_rate(),
            self.session.viewport().limits().max_zoom_rate,
        );

        Ok(())
    }

    fn render(&mut self, window: &Window) -> Result<(), Box<dyn Error>> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.update();
        self.draw()?;

        let raw_input = self.egui_state.take_egui_input(window);
        let telemetry = self.session.telemetry();
        let egui_output = self
            .egui_ctx
            .run(raw_input, |ctx| build_overlay(ctx, &telemetry));

        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        render_with_overlay(
            &self.pixels,
            &mut self.egui_renderer,
            &self.egui_ctx,
            egui_output,
            [self.width, self.height],
        )?;

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
            self.pixels.resize_surface(width, height)?;
            self.pixels.resize_buffer(width, height)?;
            debug!("resized to {}x{}", width, height);
        }

        Ok(())
    }

    /// Handles a window event, forwarding it to egui first.
    ///
    /// Pointer events egui consumed are passed on as captured, so clicks on
    /// the overlay do not drive the sidebar.
    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let response = self.egui_state.on_window_event(window, event);

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.move_to(
                    (position.x as i32, position.y as i32),
                    response.consumed,
                );
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.leave();
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.pointer
                    .set_pressed(*state == ElementState::Pressed, response.consumed);
            }
            _ => {}
        }
    }
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui(session: ExplorerSession) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractals")
            .with_inner_size(LogicalSize::new(640.0, 480.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = App::new(window, &event_loop, session)?;

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            app.handle_window_event(window, event);

            match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    if let Err(e) = app.render(window) {
                        error!("render error: {e}");
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(e) = app.resize(size.width, size.height) {
                        error!("resize error: {e}");
                        elwt.exit();
                    }
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                    let size = window.inner_size();
                    if let Err(e) = app.resize(size.width, size.height) {
                        error!("resize error: {e}");
                        elwt.exit();
                    }
                }
                _ => {}
            }
        }
        Event::AboutToWait => {
            // zoom is continuous, so every frame is a new frame
            window.request_redraw();
        }
        _ => {}
    })?;

    Ok(())
}
