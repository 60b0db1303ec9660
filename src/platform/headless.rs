//! In-memory render surface
//!
//! Records every presented frame and replays scripted input, one batch of
//! events per `poll_events()` call. Lets the frame loop run without a display.

use std::collections::VecDeque;

use super::{DrawRect, RenderSurface, SurfaceEvent};

/// One presented frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub clear: [f32; 4],
    pub rects: Vec<DrawRect>,
}

/// A surface that draws into a frame log
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    open: bool,
    frame_rate_cap: Option<u32>,
    script: VecDeque<Vec<SurfaceEvent>>,
    pending: Frame,
    frames: Vec<Frame>,
    frame_limit: Option<usize>,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            open: true,
            frame_rate_cap: None,
            script: VecDeque::new(),
            pending: Frame::default(),
            frames: Vec::new(),
            frame_limit: None,
        }
    }

    /// Queue one batch of events per upcoming frame
    pub fn with_script(mut self, batches: impl IntoIterator<Item = Vec<SurfaceEvent>>) -> Self {
        self.script.extend(batches);
        self
    }

    /// Close automatically once `frames` frames have been presented
    pub fn close_after(mut self, frames: usize) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn frame_rate_cap(&self) -> Option<u32> {
        self.frame_rate_cap
    }
}

impl RenderSurface for HeadlessSurface {
    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        self.script.pop_front().unwrap_or_default()
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.pending = Frame {
            clear: color,
            rects: Vec::new(),
        };
    }

    fn draw(&mut self, rect: &DrawRect) {
        self.pending.rects.push(*rect);
    }

    fn present(&mut self) {
        if !self.open {
            return;
        }
        self.frames.push(std::mem::take(&mut self.pending));
        if self.frame_limit.is_some_and(|limit| self.frames.len() >= limit) {
            self.open = false;
        }
    }

    fn set_frame_rate_cap(&mut self, fps: u32) {
        self.frame_rate_cap = (fps > 0).then_some(fps);
    }
}
