//! Drop grid and per-frame update for the falling-glyph rain

use super::canvas::RainSurface;
use super::glyphs::glyph_set;
use eframe::egui::{pos2, Color32};
use rand::Rng;
use tracing::debug;

/// Width of one glyph column, also the font size.
pub const CELL_SIZE: f32 = 18.0;
/// Alpha of the black overlay painted at the start of every tick.
pub const FADE_ALPHA: f32 = 0.06;
/// How far past the bottom edge a drop falls before it is recycled.
pub const RECYCLE_MARGIN: f32 = 20.0;

const SPEED_MIN: f32 = 0.6;
const SPEED_MAX: f32 = 3.0;
const SWITCH_MIN: u32 = 5;
const SWITCH_MAX: u32 = 35;
const JITTER_MIN: f32 = 0.5;
const JITTER_MAX: f32 = 2.0;

/// rgba(200, 220, 255, 0.9)
pub fn glyph_tint() -> Color32 {
    Color32::from_rgba_unmultiplied(200, 220, 255, 230)
}

/// One animated column.
#[derive(Debug, Clone, PartialEq)]
pub struct Raindrop {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub glyph: char,
    pub switch_interval: u32,
    pub frame_counter: u64,
}

/// What a single tick did, for tracing and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub switched: usize,
    pub recycled: usize,
}

pub struct RainEngine<R> {
    rng: R,
    glyphs: Vec<char>,
    width: f32,
    height: f32,
    drops: Vec<Raindrop>,
}

/// Uniform sample in `[lo, hi)`, or `lo` when the range is empty.
fn sample<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

pub fn column_count(width: f32) -> usize {
    (width.max(0.0) / CELL_SIZE).floor() as usize + 1
}

impl<R: Rng> RainEngine<R> {
    pub fn new(rng: R) -> Self {
        Self::with_glyphs(rng, glyph_set())
    }

    /// Engine sampling from a custom glyph set; an empty set falls back to the default.
    pub fn with_glyphs(rng: R, glyphs: Vec<char>) -> Self {
        let glyphs = if glyphs.is_empty() { glyph_set() } else { glyphs };
        Self {
            rng,
            glyphs,
            width: 0.0,
            height: 0.0,
            drops: Vec::new(),
        }
    }

    /// Replaces every drop with a fresh column set for the given viewport.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;

        let Self { rng, glyphs, drops, .. } = self;
        let count = column_count(width);
        drops.clear();
        drops.extend((0..count).map(|i| Raindrop {
            x: i as f32 * CELL_SIZE,
            y: sample(rng, -height, 0.0),
            speed: sample(rng, SPEED_MIN, SPEED_MAX),
            glyph: glyphs[rng.random_range(0..glyphs.len())],
            switch_interval: rng.random_range(SWITCH_MIN..SWITCH_MAX),
            frame_counter: 0,
        }));
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        debug!(width, height, columns = column_count(width), "Rebuilding rain columns");
        self.initialize(width, height);
    }

    /// Fade, then draw and advance every drop.
    pub fn tick<S: RainSurface + ?Sized>(&mut self, surface: &mut S) -> TickStats {
        surface.fade(FADE_ALPHA);

        let tint = glyph_tint();
        let bottom = self.height + RECYCLE_MARGIN;
        let recycle_floor = -RECYCLE_MARGIN - self.height * 0.5;
        let mut stats = TickStats::default();

        let Self { rng, glyphs, drops, .. } = self;
        for drop in drops.iter_mut() {
            drop.frame_counter += 1;
            if drop.frame_counter % u64::from(drop.switch_interval.max(1)) == 0 {
                drop.glyph = glyphs[rng.random_range(0..glyphs.len())];
                stats.switched += 1;
            }

            surface.draw_glyph(drop.glyph, pos2(drop.x, drop.y), tint);

            drop.y += drop.speed * sample(rng, JITTER_MIN, JITTER_MAX);
            if drop.y > bottom {
                drop.y = sample(rng, recycle_floor, -RECYCLE_MARGIN);
                stats.recycled += 1;
            }
        }
        stats
    }

    pub fn drops(&self) -> &[Raindrop] {
        &self.drops
    }

    #[cfg(test)]
    pub(crate) fn drops_mut(&mut self) -> &mut [Raindrop] {
        &mut self.drops
    }

    #[cfg(test)]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
