use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::error::Error as _;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::string::ToString;

use windower::{Align, VisibleRange, WindowConfig, Windower};

#[derive(Debug, thiserror::Error)]
#[error("subscription refused")]
struct Refused;

#[derive(Debug, Default)]
struct FakeHost {
    extent: Option<u32>,
    offset: u64,
    fail_on: Option<HostEvent>,
    next_id: u32,
    active: Vec<(HostEvent, u32)>,
    subscribed: usize,
    unsubscribed: usize,
}

impl FakeHost {
    fn attached(extent: u32, offset: u64) -> Self {
        Self {
            extent: Some(extent),
            offset,
            ..Self::default()
        }
    }
}

impl ScrollHost for FakeHost {
    type Subscription = u32;
    type Error = Refused;

    fn viewport_extent(&self) -> Option<u32> {
        self.extent
    }

    fn scroll_offset(&self) -> u64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    fn subscribe(&mut self, event: HostEvent) -> Result<u32, Refused> {
        if self.fail_on == Some(event) {
            return Err(Refused);
        }
        self.next_id += 1;
        self.active.push((event, self.next_id));
        self.subscribed += 1;
        Ok(self.next_id)
    }

    fn unsubscribe(&mut self, event: HostEvent, subscription: u32) {
        let pos = self
            .active
            .iter()
            .position(|&(e, id)| e == event && id == subscription)
            .expect("unsubscribe of unknown subscription");
        self.active.remove(pos);
        self.unsubscribed += 1;
    }
}

fn list(count: usize) -> Windower {
    Windower::new(WindowConfig::new(30), count)
}

#[test]
fn mount_measures_container_and_subscribes_both_events() {
    let mut host = FakeHost::attached(300, 3000);
    let mut w = list(1000);

    let mounted = mount(&mut host, &mut w).unwrap();
    assert!(mounted.is_subscribed(HostEvent::Scroll));
    assert!(mounted.is_subscribed(HostEvent::Resize));
    assert_eq!(mounted.host().active.len(), 2);
    assert_eq!(
        mounted.windower().visible_range(),
        VisibleRange { start: 95, end: 115 }
    );
    drop(mounted);

    assert!(host.active.is_empty());
    assert_eq!(host.subscribed, 2);
    assert_eq!(host.unsubscribed, 2);
    // The windower outlives the mount with its last state.
    assert_eq!(w.scroll_offset(), 3000);
}

#[test]
fn events_recompute_the_window() {
    let mut host = FakeHost::attached(0, 0);
    let mut w = list(1000);
    let mut mounted = mount(&mut host, &mut w).unwrap();

    // Not laid out yet: fallback window.
    assert_eq!(
        mounted.windower().visible_range(),
        VisibleRange { start: 0, end: 20 }
    );

    mounted.host_mut().extent = Some(300);
    mounted.handle(HostEvent::Resize);
    assert_eq!(mounted.windower().viewport_extent(), 300);

    mounted.host_mut().offset = 3000;
    mounted.handle(HostEvent::Scroll);
    assert_eq!(
        mounted.windower().visible_range(),
        VisibleRange { start: 95, end: 115 }
    );
}

#[test]
fn failed_subscription_releases_earlier_ones() {
    let mut host = FakeHost {
        fail_on: Some(HostEvent::Resize),
        ..FakeHost::attached(300, 0)
    };
    let mut w = list(10);

    let Err(err) = mount(&mut host, &mut w) else {
        panic!("mount should fail when the resize subscription is refused");
    };
    assert!(matches!(
        err,
        MountError::Subscribe {
            event: HostEvent::Resize,
            ..
        }
    ));
    assert_eq!(err.to_string(), "failed to subscribe to resize events");
    assert!(err.source().is_some());

    assert_eq!(host.subscribed, 1);
    assert_eq!(host.unsubscribed, 1);
    assert!(host.active.is_empty());
}

#[test]
fn detached_host_is_rejected_without_subscribing() {
    let mut host = FakeHost::default();
    let mut w = list(10);

    let Err(err) = mount(&mut host, &mut w) else {
        panic!("mount should fail without a container");
    };
    assert!(matches!(err, MountError::Detached));
    assert_eq!(host.subscribed, 0);
    assert_eq!(host.unsubscribed, 0);
}

#[test]
fn unmount_releases_exactly_once() {
    let mut host = FakeHost::attached(300, 0);
    let mut w = list(100);

    let mounted = mount(&mut host, &mut w).unwrap();
    mounted.unmount();

    assert_eq!(host.unsubscribed, 2);
    assert!(host.active.is_empty());
}

#[test]
fn scroll_to_index_moves_host_container() {
    let mut host = FakeHost::attached(300, 0);
    let mut w = list(1000);
    let mut mounted = mount(&mut host, &mut w).unwrap();

    let off = mounted.scroll_to_index(100, Align::Start);
    assert_eq!(off, 3000);
    assert_eq!(mounted.host().offset, 3000);
    assert_eq!(mounted.windower().visible_range().start, 95);

    // Clamped to total (30_000) - viewport (300).
    assert_eq!(mounted.scroll_to_offset(1_000_000), 29_700);
    assert_eq!(mounted.host().offset, 29_700);
}

#[test]
fn host_events_drive_on_change() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut w = list(1000);
    w.set_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &Windower| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));

    let mut host = FakeHost::attached(300, 0);
    let mut mounted = mount(&mut host, &mut w).unwrap();
    // Mount applies the measured viewport in one update.
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    // Same offset: nothing changed, no notification.
    mounted.handle(HostEvent::Scroll);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    mounted.host_mut().offset = 600;
    mounted.handle(HostEvent::Scroll);
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    // Resize moving both extent and offset is a single update.
    mounted.host_mut().extent = Some(600);
    mounted.host_mut().offset = 0;
    mounted.handle(HostEvent::Resize);
    assert_eq!(calls.load(Ordering::Relaxed), 3);
}

#[test]
fn events_after_detach_are_ignored() {
    let mut host = FakeHost::attached(300, 0);
    let mut w = list(1000);
    let mut mounted = mount(&mut host, &mut w).unwrap();

    mounted.host_mut().extent = None;
    mounted.host_mut().offset = 3000;
    mounted.handle(HostEvent::Scroll);
    mounted.handle(HostEvent::Resize);
    assert_eq!(mounted.windower().scroll_offset(), 0);
    assert_eq!(mounted.windower().viewport_extent(), 300);
}
