// Example: a minimal host that owns a scroll container and an event queue.
//
// A real adapter would forward DOM/TUI events into `Mounted::handle`; here the queue is filled
// by hand to simulate a user scrolling and resizing the window.
use std::collections::VecDeque;
use std::convert::Infallible;

use windower::{WindowConfig, Windower};
use windower_adapter::{HostEvent, ScrollHost, mount};

#[derive(Default)]
struct Pane {
    height: u32,
    scroll_top: u64,
    next_id: u32,
    listeners: Vec<(HostEvent, u32)>,
}

impl ScrollHost for Pane {
    type Subscription = u32;
    type Error = Infallible;

    fn viewport_extent(&self) -> Option<u32> {
        Some(self.height)
    }

    fn scroll_offset(&self) -> u64 {
        self.scroll_top
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_top = offset;
    }

    fn subscribe(&mut self, event: HostEvent) -> Result<u32, Infallible> {
        self.next_id += 1;
        self.listeners.push((event, self.next_id));
        println!("addEventListener({event}) -> #{}", self.next_id);
        Ok(self.next_id)
    }

    fn unsubscribe(&mut self, event: HostEvent, subscription: u32) {
        self.listeners.retain(|&(_, id)| id != subscription);
        println!("removeEventListener({event}) #{subscription}");
    }
}

fn main() {
    let mut pane = Pane {
        height: 300,
        ..Pane::default()
    };
    let mut list = Windower::new(WindowConfig::new(30), 1000);
    list.set_on_change(Some(|w: &Windower| {
        println!("  -> window {:?}", w.visible_range());
    }));

    let mut mounted = mount(&mut pane, &mut list).expect("pane is attached");

    let mut queue = VecDeque::from([
        (HostEvent::Scroll, 1500),
        (HostEvent::Scroll, 3000),
        (HostEvent::Resize, 3000),
    ]);
    while let Some((event, scroll_top)) = queue.pop_front() {
        mounted.host_mut().scroll_top = scroll_top;
        if event == HostEvent::Resize {
            mounted.host_mut().height = 600;
        }
        println!("{event} event");
        mounted.handle(event);
    }

    mounted.unmount();
    println!("listeners left: {}", pane.listeners.len());
}
