//! A headless viewport windower for virtual lists with a uniform item extent.
//!
//! For host lifecycle bindings (scoped scroll/resize subscriptions), see the
//! `windower-adapter` crate.
//!
//! Given an item count, a fixed per-item extent, a viewport extent and a scroll offset, this
//! crate computes:
//! - the contiguous `[start, end)` index window to materialize, buffered on both sides
//! - the items of that window paired with their absolute index
//! - per-item offsets (and CSS-style transforms) for absolute positioning
//! - the total scrollable extent for the spacer element
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport extent (height for vertical lists, width for horizontal ones)
//! - scroll offset
//! - the item count (and the item slice when asking for visible items)
//!
//! ```
//! use windower::{ViewportState, WindowConfig, Windower};
//!
//! let mut w = Windower::new(WindowConfig::new(30), 1000);
//! w.apply_viewport(ViewportState::new(3000, 300));
//!
//! let range = w.visible_range();
//! assert_eq!((range.start, range.end), (95, 115));
//! assert_eq!(w.total_extent(), 30_000);
//! assert_eq!(w.item_transform(95).to_string(), "translateY(2850px)");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod state;
mod types;
mod window;
mod windower;


pub use config::{DEFAULT_BUFFER, DEFAULT_FALLBACK_LEN, WindowConfig};
pub use state::ViewportState;
pub use types::{Align, Axis, ItemTransform, VisibleItem, VisibleRange};
pub use window::{
    compute_item_offset, compute_item_transform, compute_total_extent, compute_visible_range,
    index_at_offset, max_scroll_offset, scroll_to_index_offset, slice_visible_items,
    visible_items_iter,
};
pub use windower::{OnChangeCallback, Windower};
