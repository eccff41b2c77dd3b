/// Horizontal drag distance (in px) past which a released drag flips to the neighbouring card.
pub const DEFAULT_DRAG_STEP_THRESHOLD: f32 = 80.0;

/// How a card is presented relative to the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardRole {
    Selected,
    /// Immediately before the selected card.
    Left,
    /// Immediately after the selected card.
    Right,
    Hidden,
}

impl CardRole {
    pub fn is_shown(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Target opacity of the card image.
    pub fn opacity(self) -> f32 {
        match self {
            Self::Selected => 1.0,
            Self::Left | Self::Right => 0.5,
            Self::Hidden => 0.0,
        }
    }
}

/// The paged "card" carousel: one selected card flanked by its two neighbours.
///
/// Buttons wrap around; drags do not.
#[derive(Clone, Debug)]
pub struct PagedCarousel {
    count: usize,
    selected: usize,
    drag_step_threshold: f32,
}

impl PagedCarousel {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            selected: 0,
            drag_step_threshold: DEFAULT_DRAG_STEP_THRESHOLD,
        }
    }

    pub fn with_drag_step_threshold(mut self, threshold: f32) -> Self {
        self.drag_step_threshold = threshold;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn selected(&self) -> Option<usize> {
        (self.count > 0).then_some(self.selected)
    }

    pub fn previous(&mut self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        self.selected = (self.selected + self.count - 1) % self.count;
        Some(self.selected)
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        self.selected = (self.selected + 1) % self.count;
        Some(self.selected)
    }

    /// Selects `index`, clamped into range (indicator dots).
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        self.selected = index.min(self.count - 1);
        Some(self.selected)
    }

    /// Handles the end of a horizontal drag with total offset `offset_x`.
    ///
    /// Dragging right reveals the previous card, dragging left the next one. Returns `true`
    /// when the selection moved.
    pub fn on_drag_end(&mut self, offset_x: f32) -> bool {
        if self.count == 0 {
            return false;
        }
        if offset_x > self.drag_step_threshold && self.selected > 0 {
            self.selected -= 1;
            true
        } else if offset_x < -self.drag_step_threshold && self.selected + 1 < self.count {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    pub fn role(&self, index: usize) -> CardRole {
        if self.count == 0 || index >= self.count {
            return CardRole::Hidden;
        }
        if index == self.selected {
            CardRole::Selected
        } else if index + 1 == self.selected {
            CardRole::Left
        } else if index == self.selected + 1 {
            CardRole::Right
        } else {
            CardRole::Hidden
        }
    }

    /// Clicking a shown card selects it; hidden cards ignore clicks.
    pub fn click(&mut self, index: usize) -> bool {
        if !self.role(index).is_shown() {
            return false;
        }
        self.selected = index;
        true
    }
}
