use windowing::ViewportConfig;
use windowing_adapter::{Align, WindowController};

fn main() {
    // Example: drive a controller from scroll/resize events and render each frame.
    let parts: Vec<(u32, String)> = (0..10_000).map(|i| (i, format!("PN-{i:05}"))).collect();

    let mut c = WindowController::new(ViewportConfig::new(32, 480)).expect("valid config");

    // Burst of wheel events; only the latest offset matters.
    for offset in [120, 640, 1_280, 4_000] {
        c.on_scroll_clamped(offset, parts.len());
    }
    print_frame(&c, &parts);

    // Layout change: the container grew.
    c.on_resize(960).expect("non-zero height");
    print_frame(&c, &parts);

    // Jump to a part, e.g. after a search.
    let off = c.scroll_to_index(7_500, Align::Center, parts.len());
    println!("scroll_to_index(7500, Center) -> offset={off}");
    print_frame(&c, &parts);
}

fn print_frame(c: &WindowController, parts: &[(u32, String)]) {
    let frame = c
        .frame(parts, |it| {
            format!("<div style=\"top:{}px\">{}</div>", it.top, it.item.1)
        })
        .expect("valid config");
    println!(
        "range={:?} offset_top={} total_height={} first={:?}",
        frame.range,
        frame.offset_top,
        frame.total_height,
        frame.rows.first().map(|r| &r.unit)
    );
}
