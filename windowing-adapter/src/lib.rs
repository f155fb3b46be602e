//! Adapter utilities for the `windowing` crate.
//!
//! The `windowing` crate is stateless and focuses on the range and slice math. This crate
//! provides small, framework-neutral helpers commonly needed by hosts:
//!
//! - A controller owning the current viewport config and scroll state
//! - Scroll-to-index with alignment
//! - Scroll anchoring (keep the same item on screen when the collection is refreshed)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;


pub use anchor::{ScrollAnchor, capture_anchor, resolve_anchor};
pub use controller::{Align, WindowController};
