//! Draw-call boundary
//!
//! The engine emits one draw call per active entity per tick, in entity-class
//! order, then a present barrier and a fixed end-of-frame wait. What happens
//! with those calls (waveform playback on the instrument, a plot, nothing) is
//! the renderer's business; sprite geometry never enters the core.

use std::time::Duration;

use glam::Vec2;

use crate::Turns;

/// Receives the per-tick draw stream.
pub trait Renderer {
    /// Draw a sprite at a position, rotated by `angle` turns.
    fn draw_rotated(&mut self, sprite: &str, pos: Vec2, angle: Turns);

    /// Draw an unrotated sprite.
    fn draw(&mut self, sprite: &str, pos: Vec2) {
        self.draw_rotated(sprite, pos, 0.0);
    }

    /// End-of-frame barrier: everything drawn this tick is complete.
    fn present(&mut self);

    /// Fixed wait before the next tick. The wait belongs to the renderer,
    /// not the simulation clock; simulated time advances by the configured
    /// timestep regardless.
    fn wait(&mut self) {}
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub sprite: String,
    pub pos: Vec2,
    pub angle: Option<Turns>,
}

/// Records every frame's draw calls; used by tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Vec<DrawCall>>,
    current: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent completed frame, if any.
    pub fn last_frame(&self) -> Option<&[DrawCall]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl Renderer for RecordingRenderer {
    fn draw_rotated(&mut self, sprite: &str, pos: Vec2, angle: Turns) {
        self.current.push(DrawCall {
            sprite: sprite.to_owned(),
            pos,
            angle: Some(angle),
        });
    }

    fn draw(&mut self, sprite: &str, pos: Vec2) {
        self.current.push(DrawCall {
            sprite: sprite.to_owned(),
            pos,
            angle: None,
        });
    }

    fn present(&mut self) {
        self.frames.push(std::mem::take(&mut self.current));
    }
}

/// Logs draw calls at trace level and optionally sleeps between frames,
/// standing in for the instrument's fixed playback wait.
#[derive(Debug)]
pub struct LogRenderer {
    frame_wait: Option<Duration>,
    frame: u64,
}

impl LogRenderer {
    pub fn new(frame_wait: Option<Duration>) -> Self {
        Self {
            frame_wait,
            frame: 0,
        }
    }
}

impl Renderer for LogRenderer {
    fn draw_rotated(&mut self, sprite: &str, pos: Vec2, angle: Turns) {
        log::trace!("draw {sprite} at ({:.3}, {:.3}) angle {angle:.3}", pos.x, pos.y);
    }

    fn draw(&mut self, sprite: &str, pos: Vec2) {
        log::trace!("draw {sprite} at ({:.3}, {:.3})", pos.x, pos.y);
    }

    fn present(&mut self) {
        self.frame += 1;
        log::trace!("present frame {}", self.frame);
    }

    fn wait(&mut self) {
        if let Some(wait) = self.frame_wait {
            std::thread::sleep(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_renderer_splits_frames_on_present() {
        let mut r = RecordingRenderer::new();
        r.draw("border", Vec2::ZERO);
        r.draw_rotated("ship", Vec2::new(0.1, 0.2), 0.25);
        r.present();
        r.draw("border", Vec2::ZERO);
        r.present();

        assert_eq!(r.frames.len(), 2);
        assert_eq!(r.frames[0].len(), 2);
        assert_eq!(r.frames[0][1].sprite, "ship");
        assert_eq!(r.frames[0][1].angle, Some(0.25));
        assert_eq!(r.frames[1].len(), 1);
    }
}
