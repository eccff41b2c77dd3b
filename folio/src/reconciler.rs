use crate::state::CarouselState;
use crate::{
    CarouselOptions, EdgeMask, Mode, ScrollProgress, ScrollRequest, SelectionChange,
    SelectionSource, VisibilityTracker, WheelOutcome,
};

/// Owns the selected index of a scroll carousel and reconciles every input source against it.
///
/// Discrete inputs (previous/next buttons, indicator dots, mouse wheel) set the selection
/// directly and open a short *discrete-scroll window* (`Mode::Directed`). While the window is
/// open the adapter is asked to smooth-scroll the selected item into view, and the scroll events
/// produced by that animation only push the window's deadline out. Once the window lapses
/// (`Mode::Free`), scroll events select the first item the visibility tracker reports as in
/// view.
///
/// The reconciler holds no timers or UI objects. The adapter passes a monotonic `now_ms` to
/// every call and calls [`Reconciler::tick`] from its frame/timer loop.
#[derive(Clone, Debug)]
pub struct Reconciler {
    options: CarouselOptions,
    selected: usize,
    mode: Mode,
    pending_scroll: Option<ScrollRequest>,
    visibility: VisibilityTracker,
    progress: ScrollProgress,
    mounted: bool,
}

impl Reconciler {
    pub fn new(options: CarouselOptions) -> Self {
        let selected = options
            .initial_selected
            .min(options.count.saturating_sub(1));
        fdebug!(
            count = options.count,
            selected,
            window_ms = options.discrete_window_ms,
            "Reconciler::new"
        );
        Self {
            visibility: VisibilityTracker::new(options.count, options.visibility_threshold),
            selected,
            mode: Mode::Free,
            pending_scroll: None,
            progress: ScrollProgress::FITS,
            mounted: true,
            options,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    /// The selected index, or `None` when there are no items.
    pub fn selected(&self) -> Option<usize> {
        (self.options.count > 0).then_some(self.selected)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_directed(&self) -> bool {
        self.mode.is_directed()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the UI should render navigation controls at all.
    pub fn can_navigate(&self) -> bool {
        self.mounted && self.options.count > 0
    }

    pub fn can_go_previous(&self) -> bool {
        self.can_navigate() && self.selected > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.can_navigate() && self.selected + 1 < self.options.count
    }

    pub fn visibility(&self) -> &VisibilityTracker {
        &self.visibility
    }

    pub fn progress(&self) -> ScrollProgress {
        self.progress
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(SelectionChange) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    pub fn set_discrete_window_ms(&mut self, window_ms: u64) {
        self.options.discrete_window_ms = window_ms;
    }

    /// A serializable snapshot of the observable state.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            selected: self.selected(),
            mode: self.mode,
            edge_mask: self.edge_mask(),
        }
    }

    /// Selects `index` (clamped into range) as a discrete input.
    ///
    /// Returns the new selection, or `None` for an empty or unmounted carousel.
    pub fn select_discrete(&mut self, index: usize, now_ms: u64) -> Option<usize> {
        self.discrete(index, SelectionSource::Direct, now_ms)
    }

    /// "Previous" button. Does not wrap around at the first item.
    pub fn previous(&mut self, now_ms: u64) -> Option<usize> {
        let target = self.selected.saturating_sub(1);
        self.discrete(target, SelectionSource::Previous, now_ms)
    }

    /// "Next" button. Does not wrap around at the last item.
    pub fn next(&mut self, now_ms: u64) -> Option<usize> {
        let target = self.selected.saturating_add(1);
        self.discrete(target, SelectionSource::Next, now_ms)
    }

    /// Indicator dot click.
    pub fn select_dot(&mut self, index: usize, now_ms: u64) -> Option<usize> {
        self.discrete(index, SelectionSource::Dot, now_ms)
    }

    /// Mouse wheel over the carousel.
    ///
    /// Any non-zero delta on the primary axis steps one item in its direction. The event is
    /// always consumed while the carousel is mounted and non-empty, so the page does not scroll
    /// underneath it.
    pub fn on_wheel(&mut self, delta: f32, now_ms: u64) -> WheelOutcome {
        if !self.can_navigate() {
            return WheelOutcome {
                prevent_default: false,
                selected: None,
            };
        }
        ftrace!(delta, now_ms, "Reconciler::on_wheel");
        let selected = if delta > 0.0 {
            self.discrete(
                self.selected.saturating_add(1),
                SelectionSource::Wheel,
                now_ms,
            )
        } else if delta < 0.0 {
            self.discrete(
                self.selected.saturating_sub(1),
                SelectionSource::Wheel,
                now_ms,
            )
        } else {
            // Zero or NaN: nothing to step, but the gesture still belongs to the carousel.
            Some(self.selected)
        };
        WheelOutcome {
            prevent_default: true,
            selected,
        }
    }

    /// Call on every scroll position update of the viewport (drag, touch, scrollbar, or the
    /// programmatic smooth scroll itself).
    ///
    /// Returns the new selection when passive sampling changed it.
    pub fn on_scroll_progress_changed(
        &mut self,
        progress: ScrollProgress,
        now_ms: u64,
    ) -> Option<usize> {
        if !self.mounted {
            return None;
        }
        self.progress = progress;
        if self.options.count == 0 {
            return None;
        }
        self.tick(now_ms);

        if self.mode.is_directed() {
            // Our own smooth scroll is still moving the viewport: keep the window open.
            self.arm(now_ms);
            return None;
        }

        let index = self.visibility.first_visible()?;
        if index == self.selected {
            return None;
        }
        self.set_selected(index, SelectionSource::Scroll);
        Some(index)
    }

    /// Call for scroll updates produced by the adapter's own smooth scroll.
    ///
    /// While `Directed`, a frame re-arms the window even when its deadline has already passed,
    /// so a long gap between frames cannot hand the rest of the animation to passive sampling.
    /// In `Free` mode this behaves like [`Reconciler::on_scroll_progress_changed`].
    pub fn on_animation_frame(&mut self, progress: ScrollProgress, now_ms: u64) -> Option<usize> {
        if !self.mounted {
            return None;
        }
        if self.mode.is_directed() {
            self.progress = progress;
            self.arm(now_ms);
            return None;
        }
        self.on_scroll_progress_changed(progress, now_ms)
    }

    /// Records scroll progress after a layout change (resize, image load) that moved no item
    /// under the user's control. Unlike `on_scroll_progress_changed`, this never changes the
    /// selection or the window.
    pub fn on_layout_changed(&mut self, progress: ScrollProgress) {
        if !self.mounted {
            return;
        }
        self.progress = progress;
    }

    /// Forwards an intersection ratio for `index` to the visibility tracker.
    pub fn on_visibility_changed(&mut self, index: usize, ratio: f32) {
        if !self.mounted {
            return;
        }
        self.visibility.report(index, ratio);
    }

    /// Expires the discrete-scroll window once its deadline has passed.
    ///
    /// Returns `true` when this call moved the reconciler from `Directed` to `Free`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Mode::Directed { deadline_ms } = self.mode else {
            return false;
        };
        if now_ms < deadline_ms {
            return false;
        }
        self.mode = Mode::Free;
        if self.pending_scroll.take().is_some() {
            fdebug!(now_ms, "Reconciler: scroll request expired before it was taken");
        }
        fdebug!(now_ms, deadline_ms, "Reconciler: Directed -> Free");
        true
    }

    /// Takes the pending scroll-into-view request, if any.
    ///
    /// Requests are coalesced: several discrete inputs before the adapter's next sync yield one
    /// request for the latest selection. Nothing is returned in `Free` mode, so free scrolling
    /// is never overridden.
    pub fn take_scroll_request(&mut self, now_ms: u64) -> Option<ScrollRequest> {
        if !self.mounted {
            return None;
        }
        self.tick(now_ms);
        if !self.mode.is_directed() {
            return None;
        }
        self.pending_scroll.take()
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }

    /// The fade overlay to draw at the visible edges.
    ///
    /// During a directed scroll the selection decides, so the mask does not flash the stale
    /// edge while the viewport is still travelling.
    pub fn edge_mask(&self) -> EdgeMask {
        if self.options.count == 0 || !self.progress.overflows() {
            return EdgeMask::NoneNeeded;
        }
        if self.mode.is_directed() {
            let last = self.options.count - 1;
            return if self.selected == 0 {
                EdgeMask::Start
            } else if self.selected == last {
                EdgeMask::End
            } else {
                EdgeMask::Middle
            };
        }
        if self.progress.is_at_start() {
            EdgeMask::Start
        } else if self.progress.is_at_end() {
            EdgeMask::End
        } else {
            EdgeMask::Middle
        }
    }

    /// Cancels the window timer, drops pending requests and detaches the visibility tracker.
    ///
    /// Every later call is a no-op.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.mode = Mode::Free;
        self.pending_scroll = None;
        self.visibility.detach();
        fdebug!("Reconciler::unmount");
    }

    fn discrete(
        &mut self,
        index: usize,
        source: SelectionSource,
        now_ms: u64,
    ) -> Option<usize> {
        if !self.can_navigate() {
            return None;
        }
        let clamped = index.min(self.options.count - 1);
        if clamped != index {
            ftrace!(index, clamped, "Reconciler: discrete index clamped");
        }
        self.arm(now_ms);
        self.pending_scroll = Some(ScrollRequest {
            index: clamped,
            requested_at_ms: now_ms,
        });
        self.set_selected(clamped, source);
        Some(clamped)
    }

    fn arm(&mut self, now_ms: u64) {
        let deadline_ms = now_ms.saturating_add(self.options.discrete_window_ms);
        if !self.mode.is_directed() {
            fdebug!(now_ms, deadline_ms, "Reconciler: Free -> Directed");
        }
        self.mode = Mode::Directed { deadline_ms };
    }

    fn set_selected(&mut self, index: usize, source: SelectionSource) {
        debug_assert!(index < self.options.count, "selection out of range");
        if index == self.selected {
            return;
        }
        let previous = self.selected;
        self.selected = index;
        ftrace!(previous, selected = index, ?source, "Reconciler: selection changed");
        if let Some(cb) = &self.options.on_change {
            cb(SelectionChange {
                previous,
                selected: index,
                source,
            });
        }
    }
}
