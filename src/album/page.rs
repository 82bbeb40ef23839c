use std::path::PathBuf;

/// One image's slot in the album.
#[derive(Debug, Clone)]
pub struct Page {
    pub index: usize,
    pub path: PathBuf,

    pub visible: bool,

    offset: (f32, f32),

    rotation: f32,
    target_rotation: f32,
    target_time: f64,
    last_update: f64,
}

impl Page {
    pub fn new(index: usize, path: PathBuf, offset: (f32, f32)) -> Self {
        Self {
            index,
            path,
            visible: false,
            offset,
            rotation: 0.0,
            target_rotation: 0.0,
            target_time: 0.0,
            last_update: 0.0,
        }
    }

    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn target_rotation(&self) -> f32 {
        self.target_rotation
    }

    pub fn target_time(&self) -> f64 {
        self.target_time
    }

    /// Jump straight to `angle`, cancelling any animation in flight.
    pub fn set_rotation(&mut self, angle: f32) {
        self.rotation = angle;
        self.target_rotation = angle;
    }

    /// Request a turn to `angle`, to be completed by `deadline`.
    pub fn rotate_to(&mut self, angle: f32, deadline: f64) {
        self.target_rotation = angle;
        self.target_time = deadline;
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation != self.target_rotation
    }

    /// Advance the animation to frame time `now`.
    pub fn update(&mut self, now: f64) {
        if self.is_rotating() {
            if now >= self.target_time {
                self.rotation = self.target_rotation;
            } else {
                let remaining = self.target_time - self.last_update;
                let step = ((now - self.last_update) / remaining) as f32;
                self.rotation += (self.target_rotation - self.rotation) * step.clamp(0.0, 1.0);
            }
        }
        self.last_update = now;
    }
}
