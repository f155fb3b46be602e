// Example: record render timings while scrolling through a large list.
//
// Run with `--features diagnostics`.
use windowing::{RenderLog, ScrollState, ViewportConfig, render_window_monitored};

fn main() {
    let items: Vec<(u32, u32)> = (0..100_000).map(|i| (i, i * 7)).collect();
    let config = ViewportConfig::new(24, 720).with_overscan(8);
    let mut log = RenderLog::new(64);

    let max = config.total_height(items.len());
    let mut offset = 0u64;
    while offset < max {
        let frame = render_window_monitored(
            &items,
            ScrollState::new(offset),
            &config,
            |it| it.item.1,
            &mut log,
        )
        .expect("valid viewport config");
        debug_assert_eq!(frame.offset_top, frame.range.start_index as u64 * 24);
        offset += 97_531;
    }

    println!(
        "recorded={} kept={} last={:?} max_ms={:?} mean_ms={:?}",
        log.recorded(),
        log.len(),
        log.last(),
        log.max_duration_ms(),
        log.mean_duration_ms()
    );
}
