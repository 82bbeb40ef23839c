use std::f32::consts::PI;
use std::path::PathBuf;

use crate::album::layout::RingLayout;
use crate::album::page::Page;
use crate::album::state::AutoAdvance;
use crate::constants::*;
use crate::input::Command;

/// Pages bound on a ring, and the navigation state that turns them.
pub struct Slideshow {
    pages: Vec<Page>,
    layout: RingLayout,

    current_page_index: usize,

    time_per_slide: f64,
    auto_advance: AutoAdvance,
}

impl Slideshow {
    /// Returns `None` when there is nothing to show.
    pub fn new(paths: Vec<PathBuf>, time_per_slide: f64, auto_advance: bool) -> Option<Self> {
        Self::with_ring(paths, RING_RADIUS, START_ANGLE, time_per_slide, auto_advance)
    }

    pub fn with_ring(
        paths: Vec<PathBuf>,
        radius: f32,
        start_angle: f32,
        time_per_slide: f64,
        auto_advance: bool,
    ) -> Option<Self> {
        if paths.is_empty() {
            return None;
        }

        let layout = RingLayout::new(paths.len(), radius, start_angle);
        let pages = paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| Page::new(i, path, layout.offset_for(i)))
            .collect();

        let mut slideshow = Self {
            pages,
            layout,
            current_page_index: 0,
            time_per_slide,
            auto_advance: if auto_advance { AutoAdvance::Armed } else { AutoAdvance::Off },
        };
        slideshow.recompute_visibility();
        Some(slideshow)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn current(&self) -> usize {
        self.current_page_index
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn layout(&self) -> &RingLayout {
        &self.layout
    }

    pub fn time_per_slide(&self) -> f64 {
        self.time_per_slide
    }

    pub fn auto_advance(&self) -> AutoAdvance {
        self.auto_advance
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_enabled()
    }

    pub fn advance(&mut self, now: f64) -> bool {
        self.goto_page(self.current_page_index + 1, now)
    }

    pub fn retreat(&mut self, now: f64) -> bool {
        if self.current_page_index == 0 {
            return false;
        }
        self.goto_page(self.current_page_index - 1, now)
    }

    /// Turn every page between the current one and `index`. Out of range or
    /// same-page requests do nothing.
    pub fn goto_page(&mut self, index: usize, now: f64) -> bool {
        if index >= self.pages.len() || index == self.current_page_index {
            return false;
        }

        let deadline = now + TURN_DURATION;
        if index > self.current_page_index {
            for page in &mut self.pages[self.current_page_index..index] {
                page.rotate_to(PI, deadline);
            }
        } else {
            for page in &mut self.pages[index..self.current_page_index] {
                page.rotate_to(0.0, deadline);
            }
        }

        self.pages[index].visible = true;
        self.current_page_index = index;
        true
    }

    /// Frame tick: run the auto-advance clock, then refresh visibility.
    pub fn tick(&mut self, now: f64) {
        match self.auto_advance {
            AutoAdvance::Off => {}
            AutoAdvance::Armed => {
                self.auto_advance = AutoAdvance::Running { last_transition: now };
            }
            AutoAdvance::Running { last_transition } => {
                if now - last_transition > self.time_per_slide {
                    self.auto_advance = AutoAdvance::Running { last_transition: now };
                    self.advance(now);
                }
            }
        }

        self.recompute_visibility();
    }

    pub fn toggle_auto_advance(&mut self, now: f64) {
        self.auto_advance = if self.auto_advance.is_enabled() {
            AutoAdvance::Off
        } else {
            AutoAdvance::Running { last_transition: now }
        };
    }

    /// Only turning pages and the current page are shown.
    pub fn recompute_visibility(&mut self) {
        let current = self.current_page_index;
        for page in self.pages.iter_mut() {
            page.visible = page.is_rotating() || page.index == current;
        }
    }

    /// Per-frame animation step for every page.
    pub fn update(&mut self, now: f64) {
        for page in self.pages.iter_mut() {
            page.update(now);
        }
    }

    /// Everything that happens once per frame: auto-advance clock, page
    /// turning, then visibility of the pages as they now stand.
    pub fn advance_frame(&mut self, now: f64) {
        self.tick(now);
        self.update(now);
        self.recompute_visibility();
    }

    pub fn apply(&mut self, command: Command, now: f64) -> bool {
        match command {
            Command::NextPage => self.advance(now),
            Command::PreviousPage => self.retreat(now),
            Command::FirstPage => self.goto_page(0, now),
            Command::LastPage => self.goto_page(self.pages.len() - 1, now),
            Command::ToggleAutoAdvance => {
                self.toggle_auto_advance(now);
                true
            }
        }
    }
}
