//! Loading screen shown before the view shell

use crate::constants::{
    LOADING_BAR_DURATION, LOADING_DURATION, LOADING_FADE_IN, LOADING_PULSE_PERIOD, OWNER,
};
use crate::theme;
use crate::timer::Timeout;
use eframe::egui;
use std::time::{Duration, Instant};
use tracing::debug;

/// One-shot hand-off timer plus the loading screen's animation clock.
pub struct LoadingSequence {
    started_at: Instant,
    timeout: Timeout,
}

impl LoadingSequence {
    pub fn start(now: Instant) -> Self {
        debug!(duration_ms = LOADING_DURATION.as_millis() as u64, "Loading sequence started");
        Self {
            started_at: now,
            timeout: Timeout::new(now, LOADING_DURATION),
        }
    }

    /// True exactly once, on the first poll after the duration has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let finished = self.timeout.poll(now);
        if finished {
            debug!("Loading sequence finished");
        }
        finished
    }

    /// Cancel the pending hand-off. Idempotent.
    pub fn teardown(&mut self) {
        self.timeout.cancel();
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.timeout.remaining(now)
    }

    fn elapsed(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.started_at).as_secs_f32()
    }

    /// Progress bar fill, linear over the bar duration.
    pub fn progress(&self, now: Instant) -> f32 {
        (self.elapsed(now) / LOADING_BAR_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn fade_in(&self, now: Instant) -> f32 {
        (self.elapsed(now) / LOADING_FADE_IN.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Title opacity: 1 → 0.5 → 1 over each pulse period.
    pub fn pulse(&self, now: Instant) -> f32 {
        let phase = self.elapsed(now) / LOADING_PULSE_PERIOD.as_secs_f32();
        0.75 + 0.25 * (phase * std::f32::consts::TAU).cos()
    }
}

/// Centered title and progress bar over the rain.
pub fn render_loading(ctx: &egui::Context, sequence: &LoadingSequence, now: Instant) {
    let opacity = sequence.fade_in(now);

    egui::Area::new(egui::Id::new("loading_screen"))
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_opacity(opacity);
            ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(OWNER)
                        .size(theme::FONT_LOADING_TITLE)
                        .strong()
                        .color(theme::faded(theme::TEXT_PRIMARY, sequence.pulse(now))),
                );
                ui.add_space(theme::SPACING_XL);

                let (w, h) = theme::LOADING_BAR;
                let (rect, _) = ui.allocate_exact_size(egui::vec2(w, h), egui::Sense::hover());
                let painter = ui.painter();
                painter.rect_filled(rect, h / 2.0, theme::BAR_TRACK);
                let filled = egui::Rect::from_min_size(
                    rect.min,
                    egui::vec2(w * sequence.progress(now), h),
                );
                painter
                    .with_clip_rect(rect)
                    .rect_filled(filled, h / 2.0, theme::BAR_FILL);
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn signals_finished_exactly_once_after_1600ms() {
        let t0 = Instant::now();
        let mut seq = LoadingSequence::start(t0);
        assert!(!seq.poll(t0 + 1000 * MS));
        assert!(!seq.poll(t0 + 1599 * MS));
        assert!(seq.poll(t0 + 1600 * MS));
        assert!(!seq.poll(t0 + 1700 * MS));
        assert!(!seq.poll(t0 + 9000 * MS));
    }

    #[test]
    fn teardown_before_expiry_suppresses_signal() {
        let t0 = Instant::now();
        let mut seq = LoadingSequence::start(t0);
        seq.teardown();
        seq.teardown();
        assert!(!seq.poll(t0 + 2000 * MS));
        assert_eq!(seq.remaining(t0), None);
    }

    #[test]
    fn progress_fills_linearly_then_holds() {
        let t0 = Instant::now();
        let seq = LoadingSequence::start(t0);
        assert_eq!(seq.progress(t0), 0.0);
        assert!((seq.progress(t0 + 600 * MS) - 0.5).abs() < 1e-3);
        assert_eq!(seq.progress(t0 + 1200 * MS), 1.0);
        assert_eq!(seq.progress(t0 + 1500 * MS), 1.0);
    }

    #[test]
    fn pulse_swings_between_half_and_full() {
        let t0 = Instant::now();
        let seq = LoadingSequence::start(t0);
        assert!((seq.pulse(t0) - 1.0).abs() < 1e-3);
        assert!((seq.pulse(t0 + 1000 * MS) - 0.5).abs() < 1e-3);
        assert!((seq.pulse(t0 + 2000 * MS) - 1.0).abs() < 1e-3);
    }
}
