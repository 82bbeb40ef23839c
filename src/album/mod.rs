pub mod engine;
pub mod layout;
pub mod page;
pub mod slideshow;
pub mod state;

pub use engine::AlbumEngine;
pub use slideshow::Slideshow;

use crate::constants::DEFAULT_TIME_PER_SLIDE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlbumSettings {
    pub time_per_slide: f64,
    pub auto_advance: bool,
}

impl Default for AlbumSettings {
    fn default() -> Self {
        Self {
            time_per_slide: DEFAULT_TIME_PER_SLIDE,
            auto_advance: false,
        }
    }
}
