use crate::Axis;

/// Items rendered past each visible edge unless configured otherwise.
pub const DEFAULT_BUFFER: usize = 5;

/// Length of the leading window used while the viewport is still unmeasured.
pub const DEFAULT_FALLBACK_LEN: usize = 20;

/// Configuration for [`crate::Windower`] and the free windowing functions.
///
/// `item_extent` is the fixed size of every item along the scroll axis (e.g. row height for a
/// vertical list). It must be positive: constructors clamp it to at least 1, and every windowing
/// function clamps again so a hand-built zero never divides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    pub item_extent: u32,
    /// Extra items materialized beyond each visible edge.
    pub buffer: usize,
    /// Window length reported while `viewport_extent == 0`.
    pub fallback_len: usize,
    pub axis: Axis,
}

impl WindowConfig {
    pub fn new(item_extent: u32) -> Self {
        if item_extent == 0 {
            vwarn!("WindowConfig::new: item_extent must be positive, using 1");
        }
        Self {
            item_extent: item_extent.max(1),
            buffer: DEFAULT_BUFFER,
            fallback_len: DEFAULT_FALLBACK_LEN,
            axis: Axis::Vertical,
        }
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_fallback_len(mut self, fallback_len: usize) -> Self {
        self.fallback_len = fallback_len;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// `item_extent`, never zero.
    pub(crate) fn extent(&self) -> u32 {
        self.item_extent.max(1)
    }
}
