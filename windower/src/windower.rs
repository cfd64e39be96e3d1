use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::window;
use crate::{Align, Axis, ItemTransform, ViewportState, VisibleItem, VisibleRange, WindowConfig};

/// A callback fired after the windower's inputs change.
///
/// Derived values (range, items, total extent) are recomputed on demand, so the callback can
/// query the windower directly.
pub type OnChangeCallback = Arc<dyn Fn(&Windower) + Send + Sync>;

/// A viewport windower for lists of uniform item extent.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or the items themselves.
/// - Your adapter drives it by reporting scroll offsets, viewport extents and the item count.
/// - Every query is recomputed from current state in O(1) (plus the window length when
///   slicing), so there is nothing to invalidate.
///
/// The item extent is fixed for the windower's lifetime. Host lifecycle bindings (scoped
/// scroll/resize subscriptions) live in the `windower-adapter` crate.
#[derive(Clone)]
pub struct Windower {
    config: WindowConfig,
    viewport: ViewportState,
    count: usize,
    on_change: Option<OnChangeCallback>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Windower {
    pub fn new(config: WindowConfig, count: usize) -> Self {
        let config = WindowConfig {
            item_extent: config.extent(),
            ..config
        };
        vdebug!(
            count,
            item_extent = config.item_extent,
            buffer = config.buffer,
            "Windower::new"
        );
        Self {
            config,
            viewport: ViewportState::default(),
            count,
            on_change: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn with_viewport(mut self, viewport: ViewportState) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn item_extent(&self) -> u32 {
        self.config.item_extent
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.viewport
    }

    pub fn scroll_offset(&self) -> u64 {
        self.viewport.scroll_offset
    }

    pub fn viewport_extent(&self) -> u32 {
        self.viewport.viewport_extent
    }

    pub fn is_measured(&self) -> bool {
        self.viewport.is_measured()
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Windower) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// A resize usually changes both the viewport extent and (after clamping) the scroll offset;
    /// batching keeps the host from re-rendering an intermediate window.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Updates the item count; call this whenever the item source grows or shrinks.
    pub fn set_count(&mut self, count: usize) {
        if self.count == count {
            return;
        }
        vtrace!(prev = self.count, count, "set_count");
        self.count = count;
        self.notify();
    }

    pub fn set_buffer(&mut self, buffer: usize) {
        if self.config.buffer == buffer {
            return;
        }
        self.config.buffer = buffer;
        self.notify();
    }

    pub fn set_fallback_len(&mut self, fallback_len: usize) {
        if self.config.fallback_len == fallback_len {
            return;
        }
        self.config.fallback_len = fallback_len;
        self.notify();
    }

    pub fn set_axis(&mut self, axis: Axis) {
        if self.config.axis == axis {
            return;
        }
        self.config.axis = axis;
        self.notify();
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.viewport.scroll_offset == offset {
            return;
        }
        vtrace!(offset, "set_scroll_offset");
        self.viewport.scroll_offset = offset;
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    pub fn set_viewport_extent(&mut self, extent: u32) {
        if self.viewport.viewport_extent == extent {
            return;
        }
        vtrace!(extent, "set_viewport_extent");
        self.viewport.viewport_extent = extent;
        self.notify();
    }

    /// Applies scroll offset and viewport extent in a single coalesced update.
    pub fn apply_viewport(&mut self, viewport: ViewportState) {
        self.batch_update(|w| {
            w.set_viewport_extent(viewport.viewport_extent);
            w.set_scroll_offset(viewport.scroll_offset);
        });
    }

    /// Restores a previously captured snapshot, clamping the offset to the current content.
    pub fn restore_viewport_state(&mut self, viewport: ViewportState) {
        self.batch_update(|w| {
            w.set_viewport_extent(viewport.viewport_extent);
            w.set_scroll_offset_clamped(viewport.scroll_offset);
        });
    }

    pub fn visible_range(&self) -> VisibleRange {
        window::compute_visible_range(self.viewport, &self.config, self.count)
    }

    /// Computes the window for a hypothetical viewport without touching current state.
    pub fn visible_range_for(&self, viewport: ViewportState) -> VisibleRange {
        window::compute_visible_range(viewport, &self.config, self.count)
    }

    /// Slices the current window out of `source`.
    ///
    /// `source` should have `count()` items; a shorter source is clamped rather than indexed
    /// out of bounds.
    pub fn visible_items<'a, T>(&self, source: &'a [T]) -> Vec<VisibleItem<&'a T>> {
        window::slice_visible_items(source, self.visible_range())
    }

    /// Allocation-free form of [`Self::visible_items`].
    pub fn for_each_visible_item<'a, T>(
        &self,
        source: &'a [T],
        mut f: impl FnMut(VisibleItem<&'a T>),
    ) {
        for it in window::visible_items_iter(source, self.visible_range()) {
            f(it);
        }
    }

    /// Collects the current window's indexes into `out` (clears `out` first).
    pub fn collect_visible_indexes(&self, out: &mut Vec<usize>) {
        out.clear();
        out.extend(self.visible_range().iter());
    }

    pub fn total_extent(&self) -> u64 {
        window::compute_total_extent(self.count, self.config.item_extent)
    }

    pub fn item_offset(&self, index: usize) -> u64 {
        window::compute_item_offset(index, self.config.item_extent)
    }

    pub fn item_transform(&self, index: usize) -> ItemTransform {
        window::compute_item_transform(index, &self.config)
    }

    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        window::index_at_offset(offset, &self.config, self.count)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        window::max_scroll_offset(self.viewport, &self.config, self.count)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        window::scroll_to_index_offset(index, align, self.viewport, &self.config, self.count)
    }

    /// Programmatically scrolls to an index (no animation).
    ///
    /// Returns the applied (clamped) offset. Hosts that own a real scroll container must also
    /// push this offset to it; see `windower_adapter::Mounted::scroll_to_index`.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }
}

impl core::fmt::Debug for Windower {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Windower")
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .field("count", &self.count)
            .field("on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}
