pub mod album;
pub mod constants;
pub mod engine;
pub mod input;
pub mod texture_loader;

pub use album::{AlbumEngine, AlbumSettings, Slideshow};
pub use engine::Engine;
