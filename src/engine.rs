use anyhow::Result;
use raylib::prelude::*;
use std::path::PathBuf;

/// Host seam between the raylib frame loop and an album implementation.
pub trait Engine: Sized {
    type Settings;

    fn new(settings: Self::Settings) -> Self;
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> Result<()>;
    /// Draws one frame at time `now` (seconds). Returns false once there is nothing left to show.
    fn render_frame(&mut self, now: f64, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool;
}
