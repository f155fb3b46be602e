//! Fixed-height viewport windowing for large lists.
//!
//! For host-side helpers (scroll state ownership, scroll-to-index, anchoring), see the
//! `windowing-adapter` crate.
//!
//! Rendering thousands of rows is wasteful when only a screenful is on screen. This crate
//! provides the two pure pieces needed to avoid it:
//! - [`compute_range`]: scroll offset + viewport geometry → overscanned index range
//! - [`render`]: collection + range → the keyed slice, its top offset, and the full height
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - the container height and the (fixed) row height
//! - the scroll offset
//! - a per-item render callback
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod key;
pub mod monitor;
mod range;
mod slice;
mod types;


pub use error::{ConfigField, WindowError};
pub use key::Keyed;
#[cfg(feature = "std")]
pub use monitor::render_window_monitored;
#[cfg(feature = "diagnostics")]
pub use monitor::RenderLog;
pub use monitor::{NoopMonitor, RenderMetrics, RenderMonitor};
pub use range::compute_range;
pub use slice::{RenderFrame, RenderItem, render, render_window, render_with};
pub use types::{RenderedRow, ScrollState, ViewportConfig, VisibleRange, WindowedItem};

#[doc(hidden)]
pub use key::WindowKey;
