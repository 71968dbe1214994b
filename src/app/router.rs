//! Client-side route state for the view shell

use crate::constants::{HOME_FADE_IN, VIEW_FADE_IN};
use crate::types::Route;
use std::time::{Duration, Instant};
use tracing::debug;

/// Tracks the visible view and when it mounted.
pub struct Router {
    current: Route,
    mounted_at: Instant,
    mount_pending: bool,
}

impl Router {
    pub fn new(initial_path: &str, now: Instant) -> Self {
        let current = Route::resolve(initial_path);
        if Route::parse(initial_path).is_none() {
            debug!(path = initial_path, "Unknown path, redirecting to home");
        }
        Self {
            current,
            mounted_at: now,
            mount_pending: true,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Resolve and show `path`; unknown paths redirect to home.
    pub fn navigate(&mut self, path: &str, now: Instant) -> Route {
        let route = Route::resolve(path);
        self.go(route, now);
        route
    }

    /// Show `route`. Re-selecting the current route does not remount it.
    pub fn go(&mut self, route: Route, now: Instant) {
        if route == self.current {
            return;
        }
        debug!(from = self.current.path(), to = route.path(), "Navigating");
        self.current = route;
        self.remount(now);
    }

    /// Treat the current view as freshly mounted (fade-in restarts).
    pub fn remount(&mut self, now: Instant) {
        self.mounted_at = now;
        self.mount_pending = true;
    }

    /// Yields the current route once per mount so the owner can run mount hooks.
    pub fn take_mount(&mut self) -> Option<Route> {
        std::mem::take(&mut self.mount_pending).then_some(self.current)
    }

    pub fn fade_duration(&self) -> Duration {
        match self.current {
            Route::Home => HOME_FADE_IN,
            _ => VIEW_FADE_IN,
        }
    }

    /// Opacity of the current view's fade-in, 0..=1.
    pub fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.mounted_at);
        (elapsed.as_secs_f32() / self.fade_duration().as_secs_f32()).clamp(0.0, 1.0)
    }

    /// True while the fade-in is still running.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.opacity(now) < 1.0
    }
}
