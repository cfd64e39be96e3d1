// Example: programmatic scrolling with the different alignments.
use windower::{Align, ViewportState, WindowConfig, Windower};

fn main() {
    let mut w = Windower::new(WindowConfig::new(24).with_buffer(2), 10_000)
        .with_viewport(ViewportState::new(0, 480));

    for align in [Align::Start, Align::Center, Align::End, Align::Auto] {
        let off = w.scroll_to_index(5_000, align);
        println!("{align:?}: offset={off} window={:?}", w.visible_range());
    }

    let off = w.scroll_to_index(usize::MAX, Align::Start);
    println!("past the end: offset={off} max={}", w.max_scroll_offset());
}
