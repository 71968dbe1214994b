//! App module - contains the main application state and logic

pub mod images;
mod loading;
mod router;
mod views;

use crate::age::AgeCounter;
use crate::constants::*;
use crate::content;
use crate::rain::RainLayer;
use crate::settings::Settings;
use crate::theme;
use crate::timer::soonest;
use crate::types::{PageMeta, Route};
use crate::utils::get_cache_dir;
use eframe::egui;
use images::RemoteImages;
use loading::LoadingSequence;
use router::Router;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

pub(crate) use loading::render_loading;

// ============================================================================
// APP STATE
// ============================================================================

pub(crate) enum Phase {
    Loading(LoadingSequence),
    Shell,
}

pub struct App {
    pub(crate) phase: Phase,
    pub(crate) rain: RainLayer,
    pub(crate) router: Router,
    pub(crate) age: AgeCounter,
    pub(crate) meta: PageMeta,
    pub(crate) images: RemoteImages,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) started: bool,
    // Settings
    pub(crate) glyph_font_path: Option<String>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        initial_path: &str,
    ) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        install_fonts(&cc.egui_ctx, &settings);
        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Runtime::new()?;
        let now = Instant::now();

        Ok(Self {
            phase: Phase::Loading(LoadingSequence::start(now)),
            rain: RainLayer::new(&cc.egui_ctx),
            router: Router::new(initial_path, now),
            age: AgeCounter::new(BIRTH_YEAR),
            meta: PageMeta::default(),
            images: RemoteImages::new(get_cache_dir()),
            runtime,
            started: false,
            glyph_font_path: settings.glyph_font_path,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        })
    }

    /// First-frame setup: the loading rain and image downloads.
    pub(crate) fn on_first_frame(&mut self, ctx: &egui::Context) {
        self.started = true;
        self.rain.start(ctx);
        let urls = [LOGO_URL, PROFILE_URL]
            .into_iter()
            .chain(content::all_icon_urls());
        self.images.prefetch(&self.runtime, ctx, urls);
    }

    /// Loading screen is done: swap its rain for the shell's own instance.
    pub(crate) fn finish_loading(&mut self, ctx: &egui::Context, now: Instant) {
        if let Phase::Loading(sequence) = &mut self.phase {
            sequence.teardown();
        }
        self.rain.teardown();
        self.rain = RainLayer::new(ctx);
        self.rain.start(ctx);

        self.phase = Phase::Shell;
        self.router.remount(now);
        info!(route = self.router.current().path(), "Showing portfolio");
    }

    /// Mount hooks for a freshly shown view.
    pub(crate) fn on_view_mounted(&mut self, ctx: &egui::Context, route: Route, now: Instant) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.meta.title.to_owned()));
        debug!(
            route = route.path(),
            title = self.meta.title,
            description = self.meta.description,
            "View mounted"
        );

        if route == Route::Home {
            self.age.mount(now, &chrono::Local::now());
        } else {
            self.age.unmount();
        }
    }

    /// Per-frame timer polling; returns when the next timer needs a frame.
    pub(crate) fn poll_timers(&mut self, ctx: &egui::Context, now: Instant) -> Option<std::time::Duration> {
        let finished = match &mut self.phase {
            Phase::Loading(sequence) => sequence.poll(now),
            Phase::Shell => false,
        };
        if finished {
            self.finish_loading(ctx, now);
        }

        if matches!(self.phase, Phase::Shell) {
            if let Some(route) = self.router.take_mount() {
                self.on_view_mounted(ctx, route, now);
            }
            self.age.poll(now, &chrono::Local::now());
        }

        let loading = match &self.phase {
            Phase::Loading(sequence) => sequence.remaining(now),
            Phase::Shell => None,
        };
        soonest([loading, self.age.remaining(now)])
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            glyph_font_path: self.glyph_font_path.clone(),
        };
        settings.save(&self.data_dir);
    }

    /// Release every timer, frame loop and background task. Idempotent.
    pub fn shutdown(&mut self) {
        if let Phase::Loading(sequence) = &mut self.phase {
            sequence.teardown();
        }
        self.age.unmount();
        self.rain.teardown();
        self.images.shutdown();
    }
}

/// Register Phosphor icons and, when available, a CJK font for the rain glyphs.
fn install_fonts(ctx: &egui::Context, settings: &Settings) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    match settings.glyph_font_or_probe() {
        Some(path) => match std::fs::read(&path) {
            Ok(bytes) => {
                fonts.font_data.insert(
                    "glyphs".to_owned(),
                    std::sync::Arc::new(egui::FontData::from_owned(bytes)),
                );
                // Fallback only: Latin text keeps the default faces
                for family in [egui::FontFamily::Monospace, egui::FontFamily::Proportional] {
                    fonts
                        .families
                        .entry(family)
                        .or_default()
                        .push("glyphs".to_owned());
                }
                info!(path = %path.display(), "Loaded glyph font");
            }
            Err(e) => warn!(error = %e, path = %path.display(), "Failed to read glyph font"),
        },
        None => warn!("No CJK font found; rain glyphs may render as boxes"),
    }

    ctx.set_fonts(fonts);
}
