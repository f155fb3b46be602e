use windowing::{Keyed, ViewportConfig};
use windowing_adapter::WindowController;

#[derive(Debug)]
struct Part {
    sku: u64,
}

impl Keyed for Part {
    type Key = u64;

    fn key(&self) -> u64 {
        self.sku
    }
}

fn main() {
    // Example: keep the same part at the top of the viewport when newer parts are prepended.
    //
    // The host flow is typically:
    // 1) capture an anchor (key + offset_in_row) before the collection changes
    // 2) swap in the refreshed collection
    // 3) apply the anchor so the same item stays in the same place
    let before: Vec<Part> = (1000..1100).map(|sku| Part { sku }).collect();
    let mut c = WindowController::new(ViewportConfig::new(40, 400).with_overscan(3))
        .expect("valid viewport config");
    c.on_scroll_clamped(2_010, before.len());

    let anchor = c
        .capture_anchor(&before)
        .expect("scroll offset must be inside the content");
    println!("before prepend: off={} anchor={anchor:?}", c.scroll_offset());

    let after: Vec<Part> = (2000..2010)
        .chain(1000..1100)
        .map(|sku| Part { sku })
        .collect();
    let ok = c.apply_anchor(&after, &anchor);

    println!(
        "after prepend: ok={ok} off={} range={:?}",
        c.scroll_offset(),
        c.range(after.len())
    );
}
