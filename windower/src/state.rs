/// A lightweight, serializable snapshot of the scroll container geometry.
///
/// `viewport_extent == 0` means the container has not been measured yet (e.g. before the
/// first layout pass). The windower then falls back to a fixed leading window so first paint
/// still has content.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: u64,
    pub viewport_extent: u32,
}

impl ViewportState {
    pub fn new(scroll_offset: u64, viewport_extent: u32) -> Self {
        Self {
            scroll_offset,
            viewport_extent,
        }
    }

    pub fn is_measured(&self) -> bool {
        self.viewport_extent > 0
    }

    /// One past the last offset covered by the viewport.
    pub fn scroll_end(&self) -> u64 {
        self.scroll_offset.saturating_add(u64::from(self.viewport_extent))
    }
}
