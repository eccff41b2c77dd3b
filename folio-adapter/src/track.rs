use alloc::vec::Vec;

use folio::ScrollProgress;

/// Layout of carousel items along the scroll axis.
///
/// Offsets are measured from the start of the scroll content and include `padding_start`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Track {
    sizes: Vec<u32>,
    starts: Vec<u64>,
    gap: u32,
    padding_start: u32,
    padding_end: u32,
}

impl Track {
    pub fn new(sizes: impl IntoIterator<Item = u32>) -> Self {
        let mut t = Self {
            sizes: sizes.into_iter().collect(),
            ..Self::default()
        };
        t.rebuild();
        t
    }

    /// A track of `count` equally sized items.
    pub fn uniform(count: usize, size: u32) -> Self {
        Self::new(core::iter::repeat_n(size, count))
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self.rebuild();
        self
    }

    pub fn with_padding(mut self, padding_start: u32, padding_end: u32) -> Self {
        self.padding_start = padding_start;
        self.padding_end = padding_end;
        self.rebuild();
        self
    }

    /// Replaces the size of one item (e.g. after its image loaded).
    pub fn resize_item(&mut self, index: usize, size: u32) {
        let Some(slot) = self.sizes.get_mut(index) else {
            return;
        };
        if *slot == size {
            return;
        }
        *slot = size;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.starts.clear();
        let mut off = self.padding_start as u64;
        for (i, &size) in self.sizes.iter().enumerate() {
            self.starts.push(off);
            off = off.saturating_add(size as u64);
            if i + 1 < self.sizes.len() {
                off = off.saturating_add(self.gap as u64);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn item_start(&self, index: usize) -> Option<u64> {
        self.starts.get(index).copied()
    }

    pub fn item_size(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    pub fn item_end(&self, index: usize) -> Option<u64> {
        Some(self.item_start(index)?.saturating_add(self.item_size(index)? as u64))
    }

    pub fn total_size(&self) -> u64 {
        let content = match self.sizes.len() {
            0 => self.padding_start as u64,
            n => self.item_end(n - 1).unwrap_or(0),
        };
        content.saturating_add(self.padding_end as u64)
    }

    pub fn max_scroll_offset(&self, viewport: u32) -> u64 {
        self.total_size().saturating_sub(viewport as u64)
    }

    pub fn clamp_offset(&self, offset: u64, viewport: u32) -> u64 {
        offset.min(self.max_scroll_offset(viewport))
    }

    /// Scroll offset that centers item `index` in a viewport of size `viewport`, clamped to the
    /// scrollable range.
    pub fn center_offset(&self, index: usize, viewport: u32) -> Option<u64> {
        let start = self.item_start(index)?;
        let size = self.item_size(index)? as u64;
        let center = start.saturating_add(size / 2);
        let off = center.saturating_sub(viewport as u64 / 2);
        Some(self.clamp_offset(off, viewport))
    }

    /// Fraction of item `index` inside `[offset, offset + viewport)`.
    ///
    /// Zero-sized items report `1.0` when their position lies inside the viewport.
    pub fn intersection_ratio(&self, index: usize, offset: u64, viewport: u32) -> f32 {
        let (Some(start), Some(end)) = (self.item_start(index), self.item_end(index)) else {
            return 0.0;
        };
        let view_end = offset.saturating_add(viewport as u64);
        if start == end {
            return if start >= offset && start < view_end {
                1.0
            } else {
                0.0
            };
        }
        let lo = start.max(offset);
        let hi = end.min(view_end);
        if hi <= lo {
            return 0.0;
        }
        (hi - lo) as f32 / (end - start) as f32
    }

    pub fn progress(&self, offset: u64, viewport: u32) -> ScrollProgress {
        ScrollProgress::from_offset(offset, self.max_scroll_offset(viewport))
    }
}
