use alloc::string::String;

/// One displayable carousel item: an image reference and its caption.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Photo {
    /// Image reference, relative to the site root.
    pub src: String,
    /// Caption, also used as alt text.
    pub alt: String,
}

impl Photo {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Reconciler mode.
///
/// - `Free`: passive visibility sampling drives the selection.
/// - `Directed`: the selection drives the viewport; passive samples only re-arm the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    Free,
    Directed {
        /// Clock value at which the discrete-scroll window expires.
        deadline_ms: u64,
    },
}

impl Mode {
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed { .. })
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        match self {
            Self::Free => None,
            Self::Directed { deadline_ms } => Some(*deadline_ms),
        }
    }
}

/// Which fade overlay to draw at the visible edges of the carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeMask {
    /// Content fits without overflow.
    #[default]
    NoneNeeded,
    /// Scrolled fully to the start: fade the end edge only.
    Start,
    /// Somewhere in between: fade both edges.
    Middle,
    /// Scrolled fully to the end: fade the start edge only.
    End,
}

impl EdgeMask {
    /// CSS `mask-image` value for this mask along a horizontal track.
    pub fn css_gradient(self) -> &'static str {
        match self {
            Self::NoneNeeded => "none",
            Self::Start => "linear-gradient(90deg, #000, #000 0%, #000 90%, #0000)",
            Self::Middle => "linear-gradient(90deg, #0000, #000 10%, #000 90%, #0000)",
            Self::End => "linear-gradient(90deg, #0000, #000 10%, #000 100%, #000)",
        }
    }
}

/// The input that caused a selection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionSource {
    Previous,
    Next,
    Dot,
    Wheel,
    /// `Reconciler::select_discrete` called directly.
    Direct,
    /// Passive visibility sampling after a free scroll.
    Scroll,
}

impl SelectionSource {
    /// Whether this source arms the discrete-scroll window.
    pub fn is_discrete(self) -> bool {
        !matches!(self, Self::Scroll)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionChange {
    pub previous: usize,
    pub selected: usize,
    pub source: SelectionSource,
}

/// A request to smoothly scroll the item at `index` into the center of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    pub index: usize,
    /// Clock value of the discrete input that produced this request.
    pub requested_at_ms: u64,
}

/// Result of routing a wheel event through the reconciler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WheelOutcome {
    /// The adapter must suppress the default page scroll for this event.
    pub prevent_default: bool,
    /// Selection after handling the event (`None` for an empty or unmounted carousel).
    pub selected: Option<usize>,
}

/// Normalized horizontal scroll position of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ScrollProgressRepr"))]
pub struct ScrollProgress {
    value: f32,
    overflows: bool,
}

/// Wire form of [`ScrollProgress`]; deserialized values go through [`ScrollProgress::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
pub struct ScrollProgressRepr {
    pub value: f32,
    pub overflows: bool,
}

#[cfg(feature = "serde")]
impl From<ScrollProgressRepr> for ScrollProgress {
    fn from(repr: ScrollProgressRepr) -> Self {
        Self::new(repr.value, repr.overflows)
    }
}

impl ScrollProgress {
    /// Progress for content that fits without scrolling.
    pub const FITS: Self = Self {
        value: 0.0,
        overflows: false,
    };

    /// Builds a progress value, clamping into `[0, 1]` (NaN reads as `0`).
    pub fn new(value: f32, overflows: bool) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        Self { value, overflows }
    }

    /// Derives progress from an absolute offset and the maximum scroll offset.
    pub fn from_offset(offset: u64, max_offset: u64) -> Self {
        if max_offset == 0 {
            return Self::FITS;
        }
        let offset = offset.min(max_offset);
        Self::new(offset as f32 / max_offset as f32, true)
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn overflows(&self) -> bool {
        self.overflows
    }

    pub fn is_at_start(&self) -> bool {
        self.value <= 0.0
    }

    pub fn is_at_end(&self) -> bool {
        self.value >= 1.0
    }
}
