use alloc::sync::Arc;

use crate::{Photo, SelectionChange};

/// Default lifetime of the discrete-scroll window.
pub const DEFAULT_DISCRETE_WINDOW_MS: u64 = 200;

/// Default intersection ratio at which an item counts as "in view".
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.9;

/// A callback fired after every change of the selected index.
pub type OnChangeCallback = Arc<dyn Fn(SelectionChange) + Send + Sync>;

/// Configuration for [`crate::Reconciler`].
#[derive(Clone)]
pub struct CarouselOptions {
    pub count: usize,
    /// Selection at mount. Clamped into range by `Reconciler::new`.
    pub initial_selected: usize,

    /// How long a discrete input (button, dot, wheel) suppresses passive selection.
    ///
    /// Any scroll event observed while the window is open pushes the deadline out again, so the
    /// window outlives the smooth-scroll animation it guards.
    pub discrete_window_ms: u64,

    /// Intersection ratio in `[0, 1]` at which an item counts as visible.
    pub visibility_threshold: f32,

    pub on_change: Option<OnChangeCallback>,
}

impl CarouselOptions {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            initial_selected: 0,
            discrete_window_ms: DEFAULT_DISCRETE_WINDOW_MS,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            on_change: None,
        }
    }

    /// Options sized for a list of photos.
    pub fn for_photos(photos: &[Photo]) -> Self {
        Self::new(photos.len())
    }

    pub fn with_initial_selected(mut self, initial_selected: usize) -> Self {
        self.initial_selected = initial_selected;
        self
    }

    pub fn with_discrete_window_ms(mut self, window_ms: u64) -> Self {
        self.discrete_window_ms = window_ms;
        self
    }

    pub fn with_visibility_threshold(mut self, threshold: f32) -> Self {
        self.visibility_threshold = threshold;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(SelectionChange) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("initial_selected", &self.initial_selected)
            .field("discrete_window_ms", &self.discrete_window_ms)
            .field("visibility_threshold", &self.visibility_threshold)
            .finish_non_exhaustive()
    }
}
