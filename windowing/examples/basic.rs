// Example: minimal usage of the range calculator and slice renderer.
use windowing::{ScrollState, ViewportConfig, compute_range, render};

fn main() {
    let items: Vec<(u64, String)> = (0..10_000).map(|i| (i, format!("part-{i}"))).collect();
    let config = ViewportConfig::new(400, 600).with_overscan(5);

    let range = compute_range(ScrollState::new(40_000), &config, items.len())
        .expect("valid viewport config");
    println!("range={range:?} last={:?}", range.last_index());

    let frame = render(&items, range, config.item_height, |it| it.item.1.as_str());
    println!(
        "offset_top={} total_height={} rendered={}",
        frame.offset_top,
        frame.total_height,
        frame.rows.len()
    );
    println!("first_visible={:?}", frame.rows.first());

    let err = compute_range(ScrollState::new(0), &ViewportConfig::new(0, 600), items.len());
    println!("zero item height: {err:?}");
}
