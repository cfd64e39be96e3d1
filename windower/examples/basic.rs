// Example: window a 1000-row list and print what a host would render.
use windower::{ViewportState, WindowConfig, Windower};

struct Row {
    id: u32,
    title: String,
}

fn main() {
    let rows: Vec<Row> = (1..=1000)
        .map(|i| Row {
            id: 10_000_000 + i,
            title: format!("item {i}"),
        })
        .collect();

    let mut w = Windower::new(WindowConfig::new(30), rows.len());

    // Before layout the viewport is unmeasured: a fallback window keeps first paint non-empty.
    println!("unmeasured: {:?}", w.visible_range());

    w.apply_viewport(ViewportState::new(3000, 300));
    println!("spacer extent={}px", w.total_extent());
    for it in w.visible_items(&rows) {
        println!(
            "#{:<4} id={} {:<10} transform={}",
            it.index,
            it.item.id,
            it.item.title,
            w.item_transform(it.index)
        );
    }
}
