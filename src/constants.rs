pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const TURN_DURATION: f64 = 1.0;           // Time for a page to turn over (seconds)
pub const DEFAULT_TIME_PER_SLIDE: f64 = 5.0;  // Delay between pages in auto-advance mode (seconds)

pub const RING_RADIUS: f32 = 0.02;            // Radius of the binding rings, in page widths
pub const START_ANGLE: f32 = 0.0;             // Ring angle of the first page (radians)

pub const PAGE_WIDTH_RATIO: f32 = 0.45;       // Page width as a fraction of the render width
pub const PAGE_HEIGHT_RATIO: f32 = 0.85;      // Page height as a fraction of the render height
pub const PHOTO_MARGIN: f32 = 0.04;           // Border kept around the photo, as a fraction of the page
