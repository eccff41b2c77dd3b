use alloc::vec;
use alloc::vec::Vec;

use crate::options::DEFAULT_VISIBILITY_THRESHOLD;

/// Per-item "is this item sufficiently in view" flags.
///
/// Samples are fed asynchronously by the adapter (typically one intersection observer per item)
/// and can arrive in any order relative to scroll events. Readers get whatever snapshot is
/// current; nothing here tries to order samples against each other.
#[derive(Clone, Debug)]
pub struct VisibilityTracker {
    threshold: f32,
    visible: Vec<bool>,
    detached: bool,
}

impl VisibilityTracker {
    pub fn new(count: usize, threshold: f32) -> Self {
        let threshold = if threshold.is_nan() {
            fwarn!("VisibilityTracker: NaN threshold, using default");
            DEFAULT_VISIBILITY_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            visible: vec![false; count],
            detached: false,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Records an intersection ratio for `index`.
    ///
    /// Returns `true` when the item's visibility flipped. Reports for unknown indexes or after
    /// `detach` are ignored.
    pub fn report(&mut self, index: usize, ratio: f32) -> bool {
        let ratio = if ratio.is_nan() {
            fwarn!(index, "VisibilityTracker: NaN intersection ratio, treating as 0");
            0.0
        } else if !(0.0..=1.0).contains(&ratio) {
            fwarn!(index, ratio, "VisibilityTracker: ratio out of [0, 1], clamped");
            ratio.clamp(0.0, 1.0)
        } else {
            ratio
        };
        self.set_visible(index, ratio >= self.threshold)
    }

    /// Records a precomputed visibility flag for `index`.
    pub fn set_visible(&mut self, index: usize, visible: bool) -> bool {
        if self.detached {
            fwarn!(index, "VisibilityTracker: report after detach ignored");
            return false;
        }
        let Some(slot) = self.visible.get_mut(index) else {
            fwarn!(
                index,
                count = self.visible.len(),
                "VisibilityTracker: out-of-bounds report ignored"
            );
            return false;
        };
        if *slot == visible {
            return false;
        }
        *slot = visible;
        ftrace!(index, visible, "VisibilityTracker::set_visible");
        true
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Lowest index currently reported as visible.
    pub fn first_visible(&self) -> Option<usize> {
        self.visible.iter().position(|v| *v)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.visible.iter().copied()
    }

    /// Marks every item as not visible.
    pub fn clear(&mut self) {
        self.visible.iter_mut().for_each(|v| *v = false);
    }

    /// Stops accepting reports. Used when the owning carousel unmounts.
    pub fn detach(&mut self) {
        self.clear();
        self.detached = true;
    }
}
