use windower::{Align, ViewportState, Windower};

use crate::{HostEvent, MountError, ScrollHost};

/// Binds `windower` to `host` for the lifetime of the returned guard.
///
/// Reads the container's measured extent and scroll offset into the windower, then subscribes
/// to scroll and resize notifications (in that order). If a subscription fails, the ones
/// already acquired are released before the error is returned.
pub fn mount<'a, H: ScrollHost>(
    host: &'a mut H,
    windower: &'a mut Windower,
) -> Result<Mounted<'a, H>, MountError<H::Error>> {
    let Some(extent) = host.viewport_extent() else {
        vwarn!("mount: host has no container attached");
        return Err(MountError::Detached);
    };
    let offset = host.scroll_offset();
    windower.apply_viewport(ViewportState::new(offset, extent));

    let mut mounted = Mounted {
        host,
        windower,
        scroll: None,
        resize: None,
    };
    // On error, dropping `mounted` releases whatever was acquired.
    mounted.scroll = Some(mounted.subscribe(HostEvent::Scroll)?);
    mounted.resize = Some(mounted.subscribe(HostEvent::Resize)?);

    vdebug!(extent, offset, "mounted");
    Ok(mounted)
}

/// A mounted list: owns the scroll/resize subscriptions and routes host events into the
/// windower.
///
/// The host's event loop calls [`Self::handle`] for each delivered notification. Dropping the
/// guard (or calling [`Self::unmount`]) releases both subscriptions exactly once.
pub struct Mounted<'a, H: ScrollHost> {
    host: &'a mut H,
    windower: &'a mut Windower,
    scroll: Option<H::Subscription>,
    resize: Option<H::Subscription>,
}

impl<H: ScrollHost> Mounted<'_, H> {
    fn subscribe(&mut self, event: HostEvent) -> Result<H::Subscription, MountError<H::Error>> {
        self.host
            .subscribe(event)
            .map_err(|source| MountError::Subscribe { event, source })
    }

    fn release(&mut self) {
        if let Some(sub) = self.scroll.take() {
            self.host.unsubscribe(HostEvent::Scroll, sub);
        }
        if let Some(sub) = self.resize.take() {
            self.host.unsubscribe(HostEvent::Resize, sub);
        }
    }

    pub fn windower(&self) -> &Windower {
        &*self.windower
    }

    /// Mutable access for updates that do not come from the host (e.g. `set_count` after the
    /// item source changed).
    pub fn windower_mut(&mut self) -> &mut Windower {
        &mut *self.windower
    }

    pub fn host(&self) -> &H {
        &*self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut *self.host
    }

    pub fn is_subscribed(&self, event: HostEvent) -> bool {
        match event {
            HostEvent::Scroll => self.scroll.is_some(),
            HostEvent::Resize => self.resize.is_some(),
        }
    }

    /// Routes a host notification into the windower.
    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::Scroll => self.on_scroll(),
            HostEvent::Resize => self.on_resize(),
        }
    }

    pub fn on_scroll(&mut self) {
        if self.host.viewport_extent().is_none() {
            return;
        }
        let offset = self.host.scroll_offset();
        vtrace!(offset, "on_scroll");
        self.windower.set_scroll_offset(offset);
    }

    /// Re-measures the container. The scroll offset is re-read too, since a resize can move it.
    pub fn on_resize(&mut self) {
        let Some(extent) = self.host.viewport_extent() else {
            return;
        };
        let offset = self.host.scroll_offset();
        vtrace!(extent, offset, "on_resize");
        self.windower.apply_viewport(ViewportState::new(offset, extent));
    }

    /// Scrolls both the windower and the host container to bring `index` into view.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.windower.scroll_to_index(index, align);
        self.host.set_scroll_offset(offset);
        offset
    }

    /// Scrolls both the windower and the host container to `offset` (clamped).
    pub fn scroll_to_offset(&mut self, offset: u64) -> u64 {
        self.windower.set_scroll_offset_clamped(offset);
        let applied = self.windower.scroll_offset();
        self.host.set_scroll_offset(applied);
        applied
    }

    /// Releases both subscriptions. Equivalent to dropping the guard.
    pub fn unmount(self) {
        vdebug!("unmount");
    }
}

impl<H: ScrollHost> Drop for Mounted<'_, H> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<H: ScrollHost> core::fmt::Debug for Mounted<'_, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mounted")
            .field("windower", &self.windower)
            .field("scroll", &self.scroll.is_some())
            .field("resize", &self.resize.is_some())
            .finish_non_exhaustive()
    }
}
