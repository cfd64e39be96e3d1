//! Pure windowing functions.
//!
//! Everything here is a function of its arguments only. [`crate::Windower`] wraps these with
//! state and change notification, but hosts that already own their scroll state can call them
//! directly.

use alloc::vec::Vec;
use core::cmp;

use crate::{Align, ItemTransform, ViewportState, VisibleItem, VisibleRange, WindowConfig};

fn to_index(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}

fn to_offset(v: usize) -> u64 {
    u64::try_from(v).unwrap_or(u64::MAX)
}

/// Computes the index window to materialize for `viewport`.
///
/// The window starts `buffer` items before the first visible item and spans the items that fit
/// in the viewport plus `buffer` on each side, clamped into `[0, item_count]`. The length is
/// measured from the clamped start, so at the top of the list the leading buffer is spent
/// after the viewport instead of being dropped.
///
/// The scroll offset is clamped to [`max_scroll_offset`] first: overscrolling shows the last
/// page rather than an empty window.
///
/// An unmeasured viewport (`viewport_extent == 0`) yields `[0, min(item_count, fallback_len))`.
pub fn compute_visible_range(
    viewport: ViewportState,
    config: &WindowConfig,
    item_count: usize,
) -> VisibleRange {
    if !viewport.is_measured() {
        return VisibleRange {
            start: 0,
            end: cmp::min(item_count, config.fallback_len),
        };
    }

    let extent = config.extent();
    let scroll_offset = viewport
        .scroll_offset
        .min(max_scroll_offset(viewport, config, item_count));

    let first = to_index(scroll_offset / u64::from(extent));
    let on_screen = to_index(u64::from(viewport.viewport_extent.div_ceil(extent)));
    let visible_count = on_screen.saturating_add(config.buffer.saturating_mul(2));

    let start = first.saturating_sub(config.buffer);
    let end = cmp::min(item_count, start.saturating_add(visible_count));
    VisibleRange {
        start: cmp::min(start, end),
        end,
    }
}

/// Returns the items in `range` paired with their absolute index.
///
/// `range` is clamped to `source.len()`, so a range computed for a stale count never panics.
pub fn slice_visible_items<T>(source: &[T], range: VisibleRange) -> Vec<VisibleItem<&T>> {
    visible_items_iter(source, range).collect()
}

/// Allocation-free form of [`slice_visible_items`].
pub fn visible_items_iter<T>(
    source: &[T],
    range: VisibleRange,
) -> impl DoubleEndedIterator<Item = VisibleItem<&T>> + ExactSizeIterator {
    let clamped = range.clamp_to(source.len());
    if clamped != range {
        vwarn!(
            start = range.start,
            end = range.end,
            len = source.len(),
            "visible range exceeds source length, clamping"
        );
    }
    let start = clamped.start;
    source[clamped.start..clamped.end]
        .iter()
        .enumerate()
        .map(move |(i, item)| VisibleItem {
            item,
            index: start + i,
        })
}

/// Size of the scrollable content: `item_count * item_extent` (saturating).
pub fn compute_total_extent(item_count: usize, item_extent: u32) -> u64 {
    to_offset(item_count).saturating_mul(u64::from(item_extent))
}

/// Start offset of item `index` along the scroll axis: `index * item_extent` (saturating).
pub fn compute_item_offset(index: usize, item_extent: u32) -> u64 {
    to_offset(index).saturating_mul(u64::from(item_extent))
}

pub fn compute_item_transform(index: usize, config: &WindowConfig) -> ItemTransform {
    ItemTransform {
        axis: config.axis,
        offset: compute_item_offset(index, config.extent()),
    }
}

/// Index of the item covering `offset`, clamped to the last item. `None` for an empty list.
pub fn index_at_offset(offset: u64, config: &WindowConfig, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let index = to_index(offset / u64::from(config.extent()));
    Some(index.min(item_count - 1))
}

/// Largest scroll offset that still fills the viewport with content.
pub fn max_scroll_offset(viewport: ViewportState, config: &WindowConfig, item_count: usize) -> u64 {
    compute_total_extent(item_count, config.extent())
        .saturating_sub(u64::from(viewport.viewport_extent))
}

/// Scroll offset that brings item `index` into view with the given alignment.
///
/// `index` is clamped to the last item and the result to `[0, max_scroll_offset]`.
pub fn scroll_to_index_offset(
    index: usize,
    align: Align,
    viewport: ViewportState,
    config: &WindowConfig,
    item_count: usize,
) -> u64 {
    if item_count == 0 {
        return 0;
    }
    let extent = config.extent();
    let index = index.min(item_count - 1);
    let start = compute_item_offset(index, extent);
    let end = start.saturating_add(u64::from(extent));
    let view = u64::from(viewport.viewport_extent);

    let target = match align {
        Align::Start => start,
        Align::End => end.saturating_sub(view),
        Align::Center => {
            let center = start.saturating_add(u64::from(extent) / 2);
            center.saturating_sub(view / 2)
        }
        Align::Auto => {
            let cur = viewport.scroll_offset;
            if start >= cur && end <= viewport.scroll_end() {
                cur
            } else if start < cur {
                start
            } else {
                end.saturating_sub(view)
            }
        }
    };

    target.min(max_scroll_offset(viewport, config, item_count))
}
