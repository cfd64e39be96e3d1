use core::fmt;

/// Notifications a host delivers while a list is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    /// The scroll container's offset changed.
    Scroll,
    /// The scroll container (or the window hosting it) was resized.
    Resize,
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
        })
    }
}

/// The seam between the windower and a concrete UI runtime.
///
/// Implementations wrap whatever the runtime uses for a scroll container (a DOM element, a
/// TUI pane, a GPU widget) and its event registration. All methods are called on the UI thread.
pub trait ScrollHost {
    /// Handle returned by [`Self::subscribe`] and handed back to [`Self::unsubscribe`].
    type Subscription;
    type Error;

    /// Measured extent of the scroll container along the scroll axis.
    ///
    /// `None` when no container is attached. `Some(0)` is a container that has not been laid
    /// out yet.
    fn viewport_extent(&self) -> Option<u32>;

    /// Current scroll offset of the container.
    fn scroll_offset(&self) -> u64;

    /// Moves the container to `offset` (programmatic scroll).
    fn set_scroll_offset(&mut self, offset: u64);

    fn subscribe(&mut self, event: HostEvent) -> Result<Self::Subscription, Self::Error>;

    /// Releases a subscription. Called exactly once per successful [`Self::subscribe`].
    fn unsubscribe(&mut self, event: HostEvent, subscription: Self::Subscription);
}
