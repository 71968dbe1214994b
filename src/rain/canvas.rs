//! Drawing target for the rain and its egui implementation

use eframe::egui::{self, Align2, Color32, FontId, Pos2};

/// Something the rain can paint on. Within a tick the engine calls
/// [`RainSurface::fade`] once, then [`RainSurface::draw_glyph`] per drop.
pub trait RainSurface {
    /// Opaque clear to the background colour.
    fn clear(&mut self);
    /// Black overlay with the given alpha over the whole surface.
    fn fade(&mut self, alpha: f32);
    fn draw_glyph(&mut self, glyph: char, pos: Pos2, tint: Color32);
}

#[derive(Debug, Clone, Copy)]
struct Stamp {
    glyph: char,
    pos: Pos2,
    tint: Color32,
    weight: f32,
}

/// Retained trail buffer for egui.
///
/// egui repaints from scratch each frame, so instead of keeping pixels the
/// canvas keeps every glyph stamp with a weight. A fade multiplies all weights
/// by `1 - alpha`, which over a black background leaves the same colour as
/// blending a translucent black rectangle on top.
pub struct TrailCanvas {
    stamps: Vec<Stamp>,
    font: FontId,
    background: Color32,
}

impl TrailCanvas {
    /// Stamps fainter than one 8-bit step are dropped.
    pub const MIN_WEIGHT: f32 = 1.0 / 255.0;

    pub fn new(font: FontId) -> Self {
        Self {
            stamps: Vec::new(),
            font,
            background: Color32::BLACK,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Paint the background fill and all live stamps, oldest first.
    pub fn paint(&self, painter: &egui::Painter) {
        let clip = painter.clip_rect();
        painter.rect_filled(clip, 0.0, self.background);
        for stamp in &self.stamps {
            // Canvas text sits on its baseline; bottom-left is the closest anchor.
            painter.text(
                stamp.pos,
                Align2::LEFT_BOTTOM,
                stamp.glyph,
                self.font.clone(),
                stamp.tint.gamma_multiply(stamp.weight),
            );
        }
    }
}

impl RainSurface for TrailCanvas {
    fn clear(&mut self) {
        self.stamps.clear();
    }

    fn fade(&mut self, alpha: f32) {
        let keep = (1.0 - alpha).clamp(0.0, 1.0);
        self.stamps.retain_mut(|stamp| {
            stamp.weight *= keep;
            stamp.weight >= Self::MIN_WEIGHT
        });
    }

    fn draw_glyph(&mut self, glyph: char, pos: Pos2, tint: Color32) {
        self.stamps.push(Stamp {
            glyph,
            pos,
            tint,
            weight: 1.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn canvas() -> TrailCanvas {
        TrailCanvas::new(FontId::monospace(18.0))
    }

    #[test]
    fn fade_dims_existing_stamps() {
        let mut canvas = canvas();
        canvas.draw_glyph('あ', pos2(0.0, 0.0), Color32::WHITE);
        canvas.fade(0.06);
        assert!((canvas.stamps[0].weight - 0.94).abs() < 1e-6);
    }

    #[test]
    fn glyph_drawn_after_fade_is_at_full_strength() {
        let mut canvas = canvas();
        canvas.draw_glyph('ア', pos2(0.0, 0.0), Color32::WHITE);
        canvas.fade(0.06);
        canvas.draw_glyph('イ', pos2(18.0, 0.0), Color32::WHITE);
        assert_eq!(canvas.stamps[1].weight, 1.0);
        assert!(canvas.stamps[0].weight < 1.0);
    }

    #[test]
    fn invisible_stamps_are_culled() {
        let mut canvas = canvas();
        canvas.draw_glyph('中', pos2(0.0, 0.0), Color32::WHITE);
        // 0.94^n < 1/255 after 90 fades
        for _ in 0..89 {
            canvas.fade(0.06);
        }
        assert_eq!(canvas.len(), 1);
        canvas.fade(0.06);
        assert!(canvas.is_empty());
    }

    #[test]
    fn full_opacity_overlay_wipes_everything() {
        let mut canvas = canvas();
        canvas.draw_glyph('日', pos2(0.0, 0.0), Color32::WHITE);
        canvas.fade(1.0);
        assert!(canvas.is_empty());
    }

    #[test]
    fn clear_drops_all_stamps() {
        let mut canvas = canvas();
        for i in 0..10 {
            canvas.draw_glyph('人', pos2(i as f32, 0.0), Color32::WHITE);
        }
        canvas.clear();
        assert!(canvas.is_empty());
    }
}
