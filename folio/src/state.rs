use crate::{EdgeMask, Mode};

/// A lightweight, serializable snapshot of a carousel's observable state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Useful for
/// driving a view layer that renders from plain data, or for logging a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub selected: Option<usize>,
    pub mode: Mode,
    pub edge_mask: EdgeMask,
}
