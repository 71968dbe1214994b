//! Frame scheduling seam between the animation and its host

use eframe::egui;

/// Handle for one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

pub trait FrameScheduler {
    /// Ask the host for one more frame.
    fn request_frame(&mut self) -> FrameToken;

    /// Withdraw a request. Unknown or already delivered tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Take the request the host is delivering now, if any.
    fn poll_frame(&mut self) -> Option<FrameToken>;
}

/// Schedules frames through egui repaint requests.
///
/// egui repaints the whole window on demand, so a pending request is
/// delivered on the next `update` call, whatever triggered it.
pub struct EguiScheduler {
    ctx: egui::Context,
    next_id: u64,
    pending: Option<FrameToken>,
}

impl EguiScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_id: 0,
            pending: None,
        }
    }
}

impl FrameScheduler for EguiScheduler {
    fn request_frame(&mut self) -> FrameToken {
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        self.pending = Some(token);
        self.ctx.request_repaint();
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }

    fn poll_frame(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }
}

/// Host-less scheduler: every poll delivers the oldest outstanding request.
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    next_id: u64,
    outstanding: std::collections::VecDeque<FrameToken>,
    pub requested: usize,
    pub cancelled: usize,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.outstanding.len()
    }
}

#[cfg(test)]
impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameToken {
        self.next_id += 1;
        self.requested += 1;
        let token = FrameToken(self.next_id);
        self.outstanding.push_back(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        let before = self.outstanding.len();
        self.outstanding.retain(|t| *t != token);
        if self.outstanding.len() != before {
            self.cancelled += 1;
        }
    }

    fn poll_frame(&mut self) -> Option<FrameToken> {
        self.outstanding.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn egui_scheduler_delivers_each_request_once() {
        let mut scheduler = EguiScheduler::new(egui::Context::default());
        let token = scheduler.request_frame();
        assert_eq!(scheduler.poll_frame(), Some(token));
        assert_eq!(scheduler.poll_frame(), None);
    }

    #[test]
    fn egui_scheduler_ignores_stale_cancel() {
        let mut scheduler = EguiScheduler::new(egui::Context::default());
        let old = scheduler.request_frame();
        let fresh = scheduler.request_frame();
        scheduler.cancel_frame(old);
        assert_eq!(scheduler.poll_frame(), Some(fresh));
    }

    #[test]
    fn egui_scheduler_cancel_withdraws_request() {
        let mut scheduler = EguiScheduler::new(egui::Context::default());
        let token = scheduler.request_frame();
        scheduler.cancel_frame(token);
        scheduler.cancel_frame(token);
        assert_eq!(scheduler.poll_frame(), None);
    }
}
