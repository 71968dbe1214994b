//! Falling-glyph rain painted behind the whole window

mod canvas;
mod engine;
mod glyphs;
mod scheduler;

pub use canvas::{RainSurface, TrailCanvas};
pub use engine::{RainEngine, TickStats, CELL_SIZE};
pub use scheduler::{EguiScheduler, FrameScheduler, FrameToken};

use eframe::egui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Stopped,
}

/// Self-rescheduling frame loop around a [`RainEngine`].
///
/// Every delivered frame runs one tick and requests the next one. The pending
/// request is the only handle on the loop; [`RainAnimation::teardown`]
/// cancels it and the loop ends.
pub struct RainAnimation<S, R> {
    engine: RainEngine<R>,
    scheduler: S,
    state: AnimationState,
    pending: Option<FrameToken>,
    viewport: egui::Vec2,
}

impl<S: FrameScheduler, R: Rng> RainAnimation<S, R> {
    pub fn new(scheduler: S, engine: RainEngine<R>) -> Self {
        Self {
            engine,
            scheduler,
            state: AnimationState::Stopped,
            pending: None,
            viewport: egui::Vec2::ZERO,
        }
    }

    /// Build the drop grid, clear the surface and request the first frame.
    /// Does nothing if already running.
    pub fn start<D: RainSurface + ?Sized>(&mut self, viewport: egui::Vec2, surface: &mut D) {
        if self.state == AnimationState::Running {
            return;
        }
        self.viewport = viewport;
        self.engine.initialize(viewport.x, viewport.y);
        surface.clear();
        self.state = AnimationState::Running;
        self.pending = Some(self.scheduler.request_frame());
        debug!(
            width = viewport.x,
            height = viewport.y,
            columns = self.engine.drops().len(),
            "Rain started"
        );
    }

    /// Rebuild for a new viewport. Ignored once stopped.
    pub fn resize<D: RainSurface + ?Sized>(&mut self, viewport: egui::Vec2, surface: &mut D) {
        if self.state != AnimationState::Running {
            return;
        }
        self.viewport = viewport;
        self.engine.on_resize(viewport.x, viewport.y);
        surface.clear();
    }

    /// Handle one host frame. Ticks only when the host delivers our pending request.
    pub fn on_frame<D: RainSurface + ?Sized>(
        &mut self,
        viewport: egui::Vec2,
        surface: &mut D,
    ) -> Option<TickStats> {
        if self.state != AnimationState::Running {
            return None;
        }
        if viewport != self.viewport {
            self.resize(viewport, surface);
        }

        let token = self.scheduler.poll_frame()?;
        if self.pending != Some(token) {
            return None;
        }

        let stats = self.engine.tick(surface);
        trace!(switched = stats.switched, recycled = stats.recycled, "Rain tick");
        self.pending = Some(self.scheduler.request_frame());
        Some(stats)
    }

    /// Cancel the pending frame and stop. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
        if self.state == AnimationState::Running {
            debug!("Rain stopped");
        }
        self.state = AnimationState::Stopped;
    }

    #[cfg(test)]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    #[cfg(test)]
    pub fn engine(&self) -> &RainEngine<R> {
        &self.engine
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

/// Rain bound to an egui context and painted on the background layer.
pub struct RainLayer {
    animation: RainAnimation<EguiScheduler, StdRng>,
    canvas: TrailCanvas,
}

impl RainLayer {
    pub fn new(ctx: &egui::Context) -> Self {
        let engine = RainEngine::new(StdRng::from_os_rng());
        Self {
            animation: RainAnimation::new(EguiScheduler::new(ctx.clone()), engine),
            canvas: TrailCanvas::new(egui::FontId::monospace(CELL_SIZE)),
        }
    }

    pub fn start(&mut self, ctx: &egui::Context) {
        let viewport = ctx.screen_rect().size();
        self.animation.start(viewport, &mut self.canvas);
    }

    /// Advance one frame and paint behind every panel and area.
    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.animation.is_running() {
            return;
        }
        let screen = ctx.screen_rect();
        self.animation.on_frame(screen.size(), &mut self.canvas);

        let painter = ctx
            .layer_painter(egui::LayerId::background())
            .with_clip_rect(screen);
        self.canvas.paint(&painter);
    }

    pub fn teardown(&mut self) {
        self.animation.teardown();
        self.canvas.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::engine::column_count;
    use super::engine::tests::{Call, RecordingSurface};
    use super::scheduler::ManualScheduler;
    use super::*;

    fn animation(seed: u64) -> RainAnimation<ManualScheduler, StdRng> {
        RainAnimation::new(
            ManualScheduler::default(),
            RainEngine::new(StdRng::seed_from_u64(seed)),
        )
    }

    #[test]
    fn start_clears_surface_and_requests_one_frame() {
        let mut rain = animation(1);
        let mut surface = RecordingSurface::default();
        rain.start(egui::vec2(360.0, 200.0), &mut surface);

        assert_eq!(rain.state(), AnimationState::Running);
        assert_eq!(surface.calls, vec![Call::Clear]);
        assert_eq!(rain.scheduler().pending(), 1);
        assert_eq!(rain.engine().drops().len(), column_count(360.0));
    }

    #[test]
    fn each_frame_ticks_once_and_reschedules() {
        let mut rain = animation(2);
        let mut surface = RecordingSurface::default();
        let viewport = egui::vec2(180.0, 200.0);
        rain.start(viewport, &mut surface);

        for _ in 0..5 {
            assert!(rain.on_frame(viewport, &mut surface).is_some());
            assert_eq!(rain.scheduler().pending(), 1);
        }
        assert_eq!(rain.scheduler().requested, 6);
        let fades = surface.calls.iter().filter(|c| matches!(c, Call::Fade(_))).count();
        assert_eq!(fades, 5);
    }

    #[test]
    fn teardown_before_first_tick_leaves_nothing_pending() {
        let mut rain = animation(3);
        let mut surface = RecordingSurface::default();
        let viewport = egui::vec2(640.0, 480.0);
        rain.start(viewport, &mut surface);
        rain.teardown();
        rain.teardown();

        assert_eq!(rain.state(), AnimationState::Stopped);
        assert_eq!(rain.scheduler().pending(), 0);
        assert_eq!(rain.scheduler().cancelled, 1);
        assert!(rain.on_frame(viewport, &mut surface).is_none());
        assert_eq!(rain.scheduler().pending(), 0);
    }

    #[test]
    fn teardown_without_start_is_harmless() {
        let mut rain = animation(4);
        rain.teardown();
        assert_eq!(rain.scheduler().cancelled, 0);
        assert_eq!(rain.state(), AnimationState::Stopped);
    }

    #[test]
    fn viewport_change_rebuilds_before_ticking() {
        let mut rain = animation(5);
        let mut surface = RecordingSurface::default();
        rain.start(egui::vec2(900.0, 600.0), &mut surface);
        surface.calls.clear();

        let smaller = egui::vec2(300.0, 200.0);
        rain.on_frame(smaller, &mut surface);
        assert_eq!(surface.calls[0], Call::Clear);
        assert_eq!(surface.calls[1], Call::Fade(super::engine::FADE_ALPHA));
        assert_eq!(rain.engine().drops().len(), column_count(300.0));
    }

    #[test]
    fn back_to_back_resizes_keep_only_the_last_size() {
        let mut rain = animation(6);
        let mut surface = RecordingSurface::default();
        rain.start(egui::vec2(1800.0, 900.0), &mut surface);
        rain.resize(egui::vec2(540.0, 300.0), &mut surface);
        rain.resize(egui::vec2(1000.0, 700.0), &mut surface);

        assert_eq!(rain.engine().drops().len(), column_count(1000.0));
        assert_eq!(rain.engine().size(), (1000.0, 700.0));
        assert_eq!(rain.scheduler().pending(), 1);
    }

    #[test]
    fn resize_after_teardown_is_ignored() {
        let mut rain = animation(7);
        let mut surface = RecordingSurface::default();
        rain.start(egui::vec2(360.0, 360.0), &mut surface);
        rain.teardown();
        rain.resize(egui::vec2(36.0, 36.0), &mut surface);
        assert_eq!(rain.engine().drops().len(), column_count(360.0));
    }

    #[test]
    fn second_start_while_running_is_a_no_op() {
        let mut rain = animation(8);
        let mut surface = RecordingSurface::default();
        rain.start(egui::vec2(360.0, 360.0), &mut surface);
        rain.start(egui::vec2(36.0, 36.0), &mut surface);
        assert_eq!(rain.scheduler().pending(), 1);
        assert_eq!(rain.engine().drops().len(), column_count(360.0));
    }

    #[test]
    fn restart_after_teardown_runs_again() {
        let mut rain = animation(9);
        let mut surface = RecordingSurface::default();
        let viewport = egui::vec2(100.0, 100.0);
        rain.start(viewport, &mut surface);
        rain.teardown();
        rain.start(viewport, &mut surface);
        assert!(rain.on_frame(viewport, &mut surface).is_some());
        assert_eq!(rain.scheduler().pending(), 1);
    }
}
