use core::cmp;

use crate::{ScrollState, ViewportConfig, VisibleRange, WindowError};

/// Maps a scroll position onto the overscanned run of rows that must be materialized.
///
/// The window starts at the row under `scroll.offset` and ends at the row boundary reached by
/// `scroll.offset + container_height` (rounded up), widened by `overscan` rows on each side and
/// clamped to `0..total_item_count`. An offset past the end of the content collapses the
/// window onto the tail of the list, so a non-empty collection always yields a non-empty range.
///
/// Returns [`VisibleRange::EMPTY`] when `total_item_count == 0`, and
/// [`WindowError::InvalidConfiguration`] when either height is zero.
pub fn compute_range(
    scroll: ScrollState,
    config: &ViewportConfig,
    total_item_count: usize,
) -> Result<VisibleRange, WindowError> {
    config.validate()?;
    if total_item_count == 0 {
        return Ok(VisibleRange::EMPTY);
    }

    let item_height = config.item_height as u64;
    let overscan = config.overscan;

    let first_visible = to_index(scroll.offset / item_height);
    let scroll_end = scroll.offset.saturating_add(config.container_height as u64);
    let boundary = to_index(scroll_end.div_ceil(item_height));

    let last = total_item_count - 1;
    let end_inclusive = cmp::min(last, boundary.saturating_add(overscan));
    let start = cmp::min(first_visible.saturating_sub(overscan), end_inclusive);

    wtrace!(
        offset = scroll.offset,
        start,
        end_inclusive,
        count = total_item_count,
        "compute_range"
    );

    Ok(VisibleRange {
        start_index: start,
        end_index: end_inclusive + 1,
    })
}

impl ViewportConfig {
    /// Shorthand for [`compute_range`] with this configuration.
    pub fn range_for(
        &self,
        scroll: ScrollState,
        total_item_count: usize,
    ) -> Result<VisibleRange, WindowError> {
        compute_range(scroll, self, total_item_count)
    }
}

fn to_index(rows: u64) -> usize {
    usize::try_from(rows).unwrap_or(usize::MAX)
}
