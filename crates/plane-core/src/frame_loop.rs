//! Per-frame scheduling with an explicit stop.
//!
//! The host drives [`RenderLoop::tick`] once per display refresh and stops
//! rescheduling as soon as it returns [`LoopControl::Stop`].

use crate::constants::FPS_LOG_PERIOD_SEC;
use crate::error::Result;
use crate::viewer::{FrameInput, Viewer};
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

/// Draws a frame through the rendering backend.
pub trait SceneRenderer<T> {
    fn render(&mut self, frame: FrameInput<'_, T>) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Cloneable handle that ends a [`RenderLoop`]. Single-threaded.
#[derive(Clone, Debug, Default)]
pub struct StopToken(Rc<Cell<bool>>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug)]
struct FrameStats {
    window_start: Option<Instant>,
    window_frames: u32,
}

impl FrameStats {
    fn record(&mut self, now: Instant) {
        let start = *self.window_start.get_or_insert(now);
        self.window_frames += 1;
        let elapsed = (now - start).as_secs_f32();
        if elapsed >= FPS_LOG_PERIOD_SEC {
            log::debug!("[frame] {:.1} fps", self.window_frames as f32 / elapsed);
            self.window_start = Some(now);
            self.window_frames = 0;
        }
    }
}

#[derive(Debug)]
pub struct RenderLoop {
    stop: StopToken,
    frames: u64,
    stats: FrameStats,
}

impl RenderLoop {
    pub fn new(stop: StopToken) -> Self {
        Self {
            stop,
            frames: 0,
            stats: FrameStats {
                window_start: None,
                window_frames: 0,
            },
        }
    }

    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    /// Frames rendered so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Push tone onto the selected plane, then render the whole scene once.
    /// Render errors are logged and the loop keeps going.
    pub fn tick<T, R>(&mut self, viewer: &mut Viewer<T>, renderer: &mut R) -> LoopControl
    where
        R: SceneRenderer<T>,
    {
        if self.stop.is_stopped() {
            return LoopControl::Stop;
        }
        viewer.push_tone_to_selected();
        if let Err(e) = renderer.render(viewer.frame_input()) {
            log::error!("render error: {}", e);
        }
        self.frames += 1;
        self.stats.record(Instant::now());
        LoopControl::Continue
    }
}
