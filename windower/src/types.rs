use core::fmt;
use core::ops::Range;

/// Where an item should land in the viewport when scrolling to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    /// Keep the current offset if the item is fully visible, otherwise scroll the minimum
    /// distance (like `Start` for items before the viewport, `End` for items after it).
    Auto,
}

/// The scroll axis items are laid out along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// A contiguous `[start, end)` window of item indexes.
///
/// Ranges produced by this crate always satisfy `start <= end <= item_count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn iter(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Clamps both ends into `[0, len]`.
    pub fn clamp_to(self, len: usize) -> Self {
        let end = self.end.min(len);
        Self {
            start: self.start.min(end),
            end,
        }
    }
}

impl From<VisibleRange> for Range<usize> {
    fn from(r: VisibleRange) -> Self {
        r.start..r.end
    }
}

/// A windowed item paired with its absolute index in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleItem<T> {
    pub item: T,
    pub index: usize,
}

/// Absolute placement of a rendered item along the scroll axis.
///
/// `Display` renders a CSS-style translation (`translateY(90px)`), which is what a web host
/// applies to each absolutely positioned row inside the spacer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTransform {
    pub axis: Axis,
    pub offset: u64,
}

impl fmt::Display for ItemTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.axis {
            Axis::Vertical => write!(f, "translateY({}px)", self.offset),
            Axis::Horizontal => write!(f, "translateX({}px)", self.offset),
        }
    }
}
