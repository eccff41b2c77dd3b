//! Headless state for the photo components of a portfolio site.
//!
//! For an adapter that drives a [`Reconciler`] from item geometry and smooth-scroll tweens, see
//! the `folio-adapter` crate.
//!
//! The centrepiece is [`Reconciler`], the selection state machine of a scroll-snapping photo
//! carousel. Buttons, indicator dots, the mouse wheel and free scrolling (drag, touch,
//! scrollbar) all funnel through it, and it decides per event whether the selection drives the
//! viewport or the viewport drives the selection.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - a monotonic clock (`now_ms`) on every call
//! - per-item intersection ratios
//! - scroll progress updates
//!
//! and to apply what comes back: scroll-into-view requests, prevent-default decisions and the
//! edge fade mask.
//!
//! Also included: the paged card carousel ([`PagedCarousel`]) and the frame/image style
//! partitioner ([`partition`]).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod paged;
pub mod partition;
mod reconciler;
mod state;
mod types;
mod visibility;

#[cfg(test)]
mod tests;

pub use options::{
    CarouselOptions, DEFAULT_DISCRETE_WINDOW_MS, DEFAULT_VISIBILITY_THRESHOLD, OnChangeCallback,
};
pub use paged::{CardRole, DEFAULT_DRAG_STEP_THRESHOLD, PagedCarousel};
pub use partition::{Partition, PhotoStyle, PropValue, StyleBucket, partition};
pub use reconciler::Reconciler;
pub use state::CarouselState;
pub use types::{
    EdgeMask, Mode, Photo, ScrollProgress, ScrollRequest, SelectionChange, SelectionSource,
    WheelOutcome,
};
pub use visibility::VisibilityTracker;
