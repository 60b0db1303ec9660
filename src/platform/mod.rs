//! Platform abstraction layer
//!
//! The game talks to the outside world only through [`RenderSurface`]:
//! - Input: discrete key presses and a close request, drained once per frame
//! - Output: clear, draw filled rectangles, present
//! - Pacing: `present()` holds the thread until the frame cap allows the next frame
//!
//! Implementations:
//! - [`WindowSurface`]: native window (winit) rendered with wgpu
//! - [`HeadlessSurface`]: records frames in memory, replays scripted input

pub mod headless;
pub mod pacer;
pub mod window;

use glam::Vec2;

pub use headless::{Frame, HeadlessSurface};
pub use pacer::FramePacer;
pub use window::WindowSurface;

/// Keys the platform reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    R,
    /// Anything the game does not bind
    Other,
}

/// Events drained from the surface each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// User or OS asked the window to close
    Closed,
    /// A key went down (auto-repeat excluded)
    KeyPressed(Key),
}

/// A filled axis-aligned rectangle in world units (top-left origin, +y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub position: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

/// Window/GPU initialization failures. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("GPU device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,

    #[error("window was not created after {0} event pumps")]
    NeverResumed(u32),

    #[error("event loop exited during setup (code {0})")]
    Exited(i32),
}

/// A drawable, pollable output target
pub trait RenderSurface {
    fn is_open(&self) -> bool;

    /// Stop accepting frames; `is_open()` is false afterwards
    fn close(&mut self);

    /// Drain every event that arrived since the previous call
    fn poll_events(&mut self) -> Vec<SurfaceEvent>;

    /// Start a new frame filled with `color`
    fn clear(&mut self, color: [f32; 4]);

    fn draw(&mut self, rect: &DrawRect);

    /// Show the frame, then wait out the rest of the frame interval
    fn present(&mut self);

    /// Cap presentation at `fps` frames per second (0 = uncapped)
    fn set_frame_rate_cap(&mut self, fps: u32);
}
