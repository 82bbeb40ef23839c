use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use raylib::prelude::*;
use tracing::{info, warn};

use crate::album::AlbumSettings;
use crate::album::layout::fit_photo;
use crate::album::page::Page;
use crate::album::slideshow::Slideshow;
use crate::constants::*;
use crate::input::poll_commands;
use crate::texture_loader::load_texture_with_exif_rotation;

const PAPER: Color = Color::new(236, 232, 222, 255);
const PAPER_BACK: Color = Color::new(190, 186, 178, 255);
const CAPTION: Color = Color::new(255, 255, 0, 255);

/// Horizontal footprint of a page hinged at `hinge_x` and turned by `angle`,
/// seen from the front: `(left, width, mirrored)`.
pub fn project_page(hinge_x: f32, page_width: f32, angle: f32) -> (f32, f32, bool) {
    let span = page_width * angle.cos();
    (hinge_x + span.min(0.0), span.abs(), span < 0.0)
}

/// Drawing order: turned pages first (lowest index at the bottom), then the
/// unturned stack from the back so the lowest index ends up on top.
pub fn draw_order(pages: &[Page]) -> Vec<usize> {
    let (mut turned, mut unturned): (Vec<usize>, Vec<usize>) =
        pages.iter().map(|p| p.index).partition(|i| pages[*i].rotation().cos() < 0.0);
    turned.sort_unstable();
    unturned.sort_unstable_by(|a, b| b.cmp(a));
    turned.extend(unturned);
    turned
}

/// Caption shown on a page whose image could not be loaded.
pub fn missing_caption(page: &Page) -> String {
    let name = page
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("Cannot load {}", name)
}

/// Left edge that centres a run of `text_width` pixels on `center_x`.
pub fn centered_left(center_x: f32, text_width: i32) -> i32 {
    center_x as i32 - text_width / 2
}

pub struct AlbumEngine {
    settings: AlbumSettings,
    slideshow: Option<Slideshow>,
    textures: Vec<Option<Texture2D>>,
}

impl AlbumEngine {
    fn draw_page(&self, d: &mut RaylibDrawHandle, page: &Page) {
        let page_width = RENDER_WIDTH as f32 * PAGE_WIDTH_RATIO;
        let page_height = RENDER_HEIGHT as f32 * PAGE_HEIGHT_RATIO;
        let page_top = (RENDER_HEIGHT as f32 - page_height) * 0.5;

        let (offset_x, _) = page.offset();
        let hinge_x = RENDER_WIDTH as f32 * 0.5 + offset_x * page_width;

        let (left, width, mirrored) = project_page(hinge_x, page_width, page.rotation());
        let outline = Rectangle::new(left, page_top, width, page_height);

        if !page.visible {
            d.draw_rectangle_lines_ex(outline, 2.0, Color::GRAY);
            return;
        }

        d.draw_rectangle_rec(outline, if mirrored { PAPER_BACK } else { PAPER });

        let squash = width / page_width;
        let center = Vector2::new(left + width * 0.5, page_top + page_height * 0.5);

        match self.textures.get(page.index).and_then(|t| t.as_ref()) {
            Some(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;
                let (photo_width, photo_height) = fit_photo(
                    tex_width,
                    tex_height,
                    page_width * (1.0 - 2.0 * PHOTO_MARGIN),
                    page_height * (1.0 - 2.0 * PHOTO_MARGIN),
                );
                let dest_width = photo_width * squash;

                // A negative source width flips the photo for pages seen from behind
                let source_width = if mirrored { -tex_width } else { tex_width };

                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, source_width, tex_height),
                    Rectangle::new(center.x - dest_width * 0.5, center.y - photo_height * 0.5, dest_width, photo_height),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }
            None => {
                if squash > 0.5 {
                    let caption = missing_caption(page);
                    let font_size = (page_height / 20.0) as i32;
                    // Pixel width from the font, not the byte length of the name
                    let text_width = d.measure_text(&caption, font_size);
                    d.draw_text(&caption, centered_left(center.x, text_width), center.y as i32, font_size, CAPTION);
                }
            }
        }
    }

    fn draw_album(&self, d: &mut RaylibDrawHandle) {
        let Some(slideshow) = &self.slideshow else {
            return;
        };

        for index in draw_order(slideshow.pages()) {
            self.draw_page(d, &slideshow.pages()[index]);
        }

        let status = format!(
            "Page {}/{}   auto advance: {}",
            slideshow.current() + 1,
            slideshow.len(),
            if slideshow.is_auto_advancing() { "on" } else { "off" },
        );
        d.draw_text(&status, 20, RENDER_HEIGHT - 40, 20, Color::LIGHTGRAY);
    }
}

impl crate::engine::Engine for AlbumEngine {
    type Settings = AlbumSettings;

    fn new(settings: AlbumSettings) -> Self {
        Self {
            settings,
            slideshow: None,
            textures: Vec::new(),
        }
    }

    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> Result<()> {
        let mut loaded = 0;
        self.textures.clear();
        for path in &paths {
            match load_texture_with_exif_rotation(rl, thread, path) {
                Ok(texture) => {
                    loaded += 1;
                    self.textures.push(Some(texture));
                }
                Err(e) => {
                    warn!("Failed to load image: {:#}", e);
                    self.textures.push(None);
                }
            }
        }

        if loaded == 0 {
            bail!("None of the {} images could be loaded", paths.len());
        }
        info!(pages = paths.len(), loaded, "album ready");

        let slideshow = Slideshow::new(paths, self.settings.time_per_slide, self.settings.auto_advance)
            .ok_or_else(|| anyhow!("Album has no pages"))?;
        self.slideshow = Some(slideshow);
        Ok(())
    }

    fn render_frame(&mut self, now: f64, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool {
        let Some(slideshow) = self.slideshow.as_mut() else {
            return false;
        };

        // 1. Navigation requests, then the auto-advance clock
        for command in poll_commands(rl) {
            if slideshow.apply(command, now) {
                info!(?command, page = slideshow.current(), "navigation");
            }
        }
        // 2. Turn the pages, then hide the ones that have settled
        slideshow.advance_frame(now);

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);
            self.draw_album(&mut d);
        });

        true
    }
}
