//! Adapter utilities for the `folio` crate.
//!
//! The `folio` crate owns selection state and decides what should happen. This crate provides
//! the framework-neutral pieces an adapter needs to make it happen:
//!
//! - Item track geometry (centering offsets, intersection ratios, scroll progress)
//! - Tween-based smooth scroll-into-view (adapter-driven)
//! - A [`Controller`] tying both to a [`folio::Reconciler`]
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod track;
mod tween;


pub use controller::{Controller, ControllerOptions};
pub use track::Track;
pub use tween::{Easing, Tween};
