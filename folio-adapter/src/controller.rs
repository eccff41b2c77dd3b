use folio::{CarouselOptions, EdgeMask, Reconciler, WheelOutcome};

use crate::{Easing, Track, Tween};

/// Smooth-scroll configuration for [`Controller`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    pub scroll_duration_ms: u64,
    pub easing: Easing,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            scroll_duration_ms: 300,
            easing: Easing::EaseInOutCubic,
        }
    }
}

impl ControllerOptions {
    pub fn with_scroll_duration_ms(mut self, duration_ms: u64) -> Self {
        self.scroll_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// A framework-neutral controller that wraps a [`Reconciler`] together with the carousel's
/// item geometry and a smooth-scroll tween.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_size` / `on_scroll` when the UI reports layout or user scrolling
/// - `previous` / `next` / `select_dot` / `on_wheel` for discrete inputs
/// - `tick(now_ms)` each frame/timer tick
///
/// `tick` returns the offset the UI must apply to its scroll container while an animation is
/// running. Those offsets are already fed back into the reconciler; do not echo the resulting
/// native scroll events into `on_scroll`, which is reserved for user scrolling and cancels the
/// animation.
#[derive(Clone, Debug)]
pub struct Controller {
    reconciler: Reconciler,
    track: Track,
    options: ControllerOptions,
    viewport: u32,
    offset: u64,
    tween: Option<Tween>,
}

impl Controller {
    /// Creates a controller for the items laid out by `track`.
    ///
    /// `carousel.count` is overridden with `track.len()`.
    pub fn new(track: Track, mut carousel: CarouselOptions, options: ControllerOptions) -> Self {
        carousel.count = track.len();
        Self {
            reconciler: Reconciler::new(carousel),
            track,
            options,
            viewport: 0,
            offset: 0,
            tween: None,
        }
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.reconciler.selected()
    }

    pub fn edge_mask(&self) -> EdgeMask {
        self.reconciler.edge_mask()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.offset
    }

    pub fn viewport_size(&self) -> u32 {
        self.viewport
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call when the scroll container's size along the scroll axis changes.
    pub fn on_viewport_size(&mut self, viewport: u32) {
        if !self.reconciler.is_mounted() || self.viewport == viewport {
            return;
        }
        let first_layout = self.viewport == 0;
        self.viewport = viewport;
        let offset = match (first_layout, self.reconciler.selected()) {
            // Mount: start with the initial selection centered.
            (true, Some(selected)) => self
                .track
                .center_offset(selected, viewport)
                .unwrap_or(self.offset),
            _ => self.track.clamp_offset(self.offset, viewport),
        };
        self.relayout(offset);
    }

    /// Call when an item's measured size changes.
    pub fn on_item_resized(&mut self, index: usize, size: u32) {
        if !self.reconciler.is_mounted() {
            return;
        }
        self.track.resize_item(index, size);
        self.relayout(self.offset);
    }

    /// Call when the user scrolls the container (drag, touch, scrollbar).
    ///
    /// This cancels any active animation.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) -> Option<usize> {
        if !self.reconciler.is_mounted() {
            return None;
        }
        self.cancel_animation();
        self.apply_offset(offset, now_ms)
    }

    pub fn on_wheel(&mut self, delta: f32, now_ms: u64) -> WheelOutcome {
        self.reconciler.on_wheel(delta, now_ms)
    }

    pub fn previous(&mut self, now_ms: u64) -> Option<usize> {
        self.reconciler.previous(now_ms)
    }

    pub fn next(&mut self, now_ms: u64) -> Option<usize> {
        self.reconciler.next(now_ms)
    }

    pub fn select_dot(&mut self, index: usize, now_ms: u64) -> Option<usize> {
        self.reconciler.select_dot(index, now_ms)
    }

    /// Advances the controller.
    ///
    /// - Feeds the running tween's current offset to the reconciler.
    /// - Expires the discrete-scroll window (never while a tween is running).
    /// - Turns a pending scroll request into a tween (or retargets the running one).
    /// - If a tween is active, applies its current offset and returns it.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        if !self.reconciler.is_mounted() {
            return None;
        }
        // The frame goes first so it re-arms the window before the expiry check.
        if let Some(tween) = self.tween {
            self.animate(tween.sample(now_ms), now_ms);
        }
        self.reconciler.tick(now_ms);

        if let Some(req) = self.reconciler.take_scroll_request(now_ms) {
            if let Some(to) = self.track.center_offset(req.index, self.viewport) {
                self.start_tween(to, now_ms);
            }
        }

        let tween = self.tween?;
        let offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        self.animate(offset, now_ms);
        Some(self.offset)
    }

    /// Cancels the animation and unmounts the reconciler. Every later call is a no-op.
    pub fn unmount(&mut self) {
        self.cancel_animation();
        self.reconciler.unmount();
    }

    pub fn is_mounted(&self) -> bool {
        self.reconciler.is_mounted()
    }

    fn start_tween(&mut self, to: u64, now_ms: u64) {
        let duration = self.options.scroll_duration_ms;
        match &mut self.tween {
            Some(tween) => tween.retarget(now_ms, to, duration),
            None => {
                self.tween = Some(Tween::new(
                    self.offset,
                    to,
                    now_ms,
                    duration,
                    self.options.easing,
                ))
            }
        }
    }

    /// Moves the viewport to `offset` and reports the scroll to the reconciler.
    fn apply_offset(&mut self, offset: u64, now_ms: u64) -> Option<usize> {
        self.move_viewport(offset);
        let progress = self.track.progress(self.offset, self.viewport);
        self.reconciler.on_scroll_progress_changed(progress, now_ms)
    }

    /// Moves the viewport to an animation frame's offset.
    fn animate(&mut self, offset: u64, now_ms: u64) {
        self.move_viewport(offset);
        let progress = self.track.progress(self.offset, self.viewport);
        self.reconciler.on_animation_frame(progress, now_ms);
    }

    /// Moves the viewport after a layout change; the selection is left alone.
    fn relayout(&mut self, offset: u64) {
        self.move_viewport(offset);
        let progress = self.track.progress(self.offset, self.viewport);
        self.reconciler.on_layout_changed(progress);
    }

    fn move_viewport(&mut self, offset: u64) {
        self.offset = self.track.clamp_offset(offset, self.viewport);
        for i in 0..self.track.len() {
            let ratio = self.track.intersection_ratio(i, self.offset, self.viewport);
            self.reconciler.on_visibility_changed(i, ratio);
        }
    }
}
