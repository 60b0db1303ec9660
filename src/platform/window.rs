//! Native window surface (winit + wgpu)
//!
//! The event loop is pumped from the frame loop instead of owning the thread,
//! so the game keeps its plain `while surface.is_open()` structure.

use std::sync::Arc;
use std::time::Duration;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use super::{DrawRect, FramePacer, Key, PlatformError, RenderSurface, SurfaceEvent};
use crate::config::WorldConfig;
use crate::renderer::{RenderState, Vertex, shapes};

/// Event pumps allowed before giving up on window creation
const MAX_SETUP_PUMPS: u32 = 500;

/// Wait per setup pump while the window is coming up
const SETUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

impl From<PhysicalKey> for Key {
    fn from(key: PhysicalKey) -> Self {
        match key {
            PhysicalKey::Code(KeyCode::Space) => Key::Space,
            PhysicalKey::Code(KeyCode::KeyR) => Key::R,
            _ => Key::Other,
        }
    }
}

/// Map a raw window event to what the game cares about
fn surface_event(event: &WindowEvent) -> Option<SurfaceEvent> {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(SurfaceEvent::Closed),
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key,
                    state: ElementState::Pressed,
                    repeat: false,
                    ..
                },
            ..
        } => Some(SurfaceEvent::KeyPressed(Key::from(*physical_key))),
        _ => None,
    }
}

/// winit callback target: owns the window and GPU state, buffers events
struct WindowShell {
    title: String,
    world_size: Vec2,
    window: Option<Arc<Window>>,
    render: Option<RenderState>,
    events: Vec<SurfaceEvent>,
    init_error: Option<PlatformError>,
}

impl WindowShell {
    fn new(title: &str, world_size: Vec2) -> Self {
        Self {
            title: title.to_string(),
            world_size,
            window: None,
            render: None,
            events: Vec::new(),
            init_error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.world_size.x as u32,
                self.world_size.y as u32,
            ))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(attrs)?);
        log::info!(
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let render = pollster::block_on(RenderState::new(Arc::clone(&window), self.world_size))?;
        self.window = Some(window);
        self.render = Some(render);
        Ok(())
    }
}

impl ApplicationHandler for WindowShell {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            log::debug!("Window already exists");
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("Window setup failed: {}", e);
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::Resized(size) = event {
            if let Some(render) = self.render.as_mut() {
                render.resize(size.width, size.height);
            }
            return;
        }

        match surface_event(&event) {
            Some(SurfaceEvent::Closed) => {
                log::info!("Window close requested");
                self.events.push(SurfaceEvent::Closed);
            }
            Some(ev) => self.events.push(ev),
            None => {}
        }
    }
}

/// A desktop window presenting frames through wgpu
pub struct WindowSurface {
    event_loop: EventLoop<()>,
    shell: WindowShell,
    pacer: FramePacer,
    clear: [f32; 4],
    vertices: Vec<Vertex>,
    open: bool,
}

impl WindowSurface {
    /// Create the window and GPU state. Blocks until the window is ready.
    pub fn open(title: &str, world: &WorldConfig) -> Result<Self, PlatformError> {
        let mut event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let world_size = Vec2::new(world.window_width, world.window_height);
        let mut shell = WindowShell::new(title, world_size);

        for _ in 0..MAX_SETUP_PUMPS {
            let status = event_loop.pump_app_events(Some(SETUP_PUMP_TIMEOUT), &mut shell);
            if let Some(e) = shell.init_error.take() {
                return Err(e);
            }
            if let PumpStatus::Exit(code) = status {
                return Err(PlatformError::Exited(code));
            }
            if shell.render.is_some() {
                return Ok(Self {
                    event_loop,
                    shell,
                    pacer: FramePacer::new(),
                    clear: [0.0, 0.0, 0.0, 1.0],
                    vertices: Vec::new(),
                    open: true,
                });
            }
        }

        Err(PlatformError::NeverResumed(MAX_SETUP_PUMPS))
    }
}

impl RenderSurface for WindowSurface {
    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        // Surface before window
        self.shell.render = None;
        self.shell.window = None;
        log::info!("Window closed");
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        if !self.open {
            return Vec::new();
        }
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.shell);
        if let PumpStatus::Exit(code) = status {
            log::debug!("Event loop exited with code {}", code);
            self.shell.events.push(SurfaceEvent::Closed);
        }
        std::mem::take(&mut self.shell.events)
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.clear = color;
        self.vertices.clear();
    }

    fn draw(&mut self, rect: &DrawRect) {
        self.vertices.extend(shapes::draw_rect(rect));
    }

    fn present(&mut self) {
        if !self.open {
            return;
        }
        if let Some(render) = self.shell.render.as_mut() {
            match render.render(self.clear, &self.vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::debug!("Surface lost, reconfiguring");
                    render.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of GPU memory, frame dropped");
                }
                Err(e) => log::warn!("Frame dropped: {}", e),
            }
        }
        self.pacer.wait();
    }

    fn set_frame_rate_cap(&mut self, fps: u32) {
        self.pacer.set_cap(fps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from(PhysicalKey::Code(KeyCode::Space)), Key::Space);
        assert_eq!(Key::from(PhysicalKey::Code(KeyCode::KeyR)), Key::R);
        assert_eq!(Key::from(PhysicalKey::Code(KeyCode::Enter)), Key::Other);
    }

    #[test]
    fn test_close_events() {
        assert_eq!(
            surface_event(&WindowEvent::CloseRequested),
            Some(SurfaceEvent::Closed)
        );
        assert_eq!(surface_event(&WindowEvent::Destroyed), Some(SurfaceEvent::Closed));
        assert_eq!(surface_event(&WindowEvent::Focused(true)), None);
    }
}
