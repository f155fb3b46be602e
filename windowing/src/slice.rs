use alloc::vec::Vec;
use core::cmp;

use crate::key::KeySet;
use crate::{
    Keyed, RenderedRow, ScrollState, ViewportConfig, VisibleRange, WindowError, WindowedItem,
    compute_range,
};

/// A per-item rendering capability supplied by the host as a type rather than a closure.
///
/// The core never inspects the produced unit; it only keys it by the item's identity.
/// Use [`render_with`] to drive a renderer by reference.
pub trait RenderItem<T: Keyed> {
    type Unit;

    fn render_item(&mut self, item: WindowedItem<'_, T, T::Key>) -> Self::Unit;
}

/// The materialized window of a collection for one scroll position.
///
/// Placing `rows` at `offset_top` inside a spacer of `total_height` reproduces the layout a
/// full, unwindowed render would have produced.
pub struct RenderFrame<'a, T: Keyed, U> {
    /// The range actually sliced (after re-clamping against the collection length).
    pub range: VisibleRange,
    pub slice: &'a [T],
    pub rows: Vec<RenderedRow<T::Key, U>>,
    pub offset_top: u64,
    pub total_height: u64,
    pub item_height: u32,
}

impl<T, U> core::fmt::Debug for RenderFrame<'_, T, U>
where
    T: Keyed + core::fmt::Debug,
    T::Key: core::fmt::Debug,
    U: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderFrame")
            .field("range", &self.range)
            .field("slice", &self.slice)
            .field("rows", &self.rows)
            .field("offset_top", &self.offset_top)
            .field("total_height", &self.total_height)
            .field("item_height", &self.item_height)
            .finish()
    }
}

impl<'a, T: Keyed, U> RenderFrame<'a, T, U> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn visible_items(&self) -> usize {
        self.rows.len()
    }

    /// Height of the spacer that follows the rendered rows.
    pub fn offset_bottom(&self) -> u64 {
        let rendered = (self.rows.len() as u64).saturating_mul(self.item_height as u64);
        self.total_height
            .saturating_sub(self.offset_top)
            .saturating_sub(rendered)
    }

    pub fn row_by_key(&self, key: &T::Key) -> Option<&RenderedRow<T::Key, U>> {
        self.rows.iter().find(|row| &row.key == key)
    }
}

/// Slices `collection` to `range`, positions the slice, and calls `f` once per sliced item.
///
/// If the collection shrank after `range` was computed, the range is clamped to the current
/// length before slicing; the returned frame reports the clamped range.
pub fn render<'a, T, U>(
    collection: &'a [T],
    range: VisibleRange,
    item_height: u32,
    mut f: impl FnMut(WindowedItem<'a, T, T::Key>) -> U,
) -> RenderFrame<'a, T, U>
where
    T: Keyed,
{
    let len = collection.len();
    let range = clamp_to_len(range, len);
    let height = item_height as u64;

    let offset_top = (range.start_index as u64).saturating_mul(height);
    let total_height = (len as u64).saturating_mul(height);
    let slice = &collection[range.as_range()];

    let mut seen = KeySet::<T::Key>::new();
    let mut rows = Vec::with_capacity(slice.len());
    let mut top = offset_top;
    for (i, item) in slice.iter().enumerate() {
        let index = range.start_index + i;
        let key = item.key();
        if !seen.insert(key.clone()) {
            wwarn!(index, "render: duplicate item key inside the window");
        }
        let unit = f(WindowedItem {
            key: key.clone(),
            index,
            top,
            item,
        });
        rows.push(RenderedRow {
            key,
            index,
            top,
            unit,
        });
        top = top.saturating_add(height);
    }

    RenderFrame {
        range,
        slice,
        rows,
        offset_top,
        total_height,
        item_height,
    }
}

/// Same as [`render`], but drives a [`RenderItem`] implementation.
pub fn render_with<'a, T, R>(
    collection: &'a [T],
    range: VisibleRange,
    item_height: u32,
    renderer: &mut R,
) -> RenderFrame<'a, T, R::Unit>
where
    T: Keyed,
    R: RenderItem<T> + ?Sized,
{
    render(collection, range, item_height, |it| renderer.render_item(it))
}

/// Computes the range for `scroll` and renders it in one step.
pub fn render_window<'a, T, U>(
    collection: &'a [T],
    scroll: ScrollState,
    config: &ViewportConfig,
    f: impl FnMut(WindowedItem<'a, T, T::Key>) -> U,
) -> Result<RenderFrame<'a, T, U>, WindowError>
where
    T: Keyed,
{
    let range = compute_range(scroll, config, collection.len())?;
    Ok(render(collection, range, config.item_height, f))
}

fn clamp_to_len(range: VisibleRange, len: usize) -> VisibleRange {
    let end = cmp::min(range.end_index, len);
    let start = cmp::min(range.start_index, end);
    if end != range.end_index || start != range.start_index {
        wdebug!(
            start = range.start_index,
            end = range.end_index,
            len,
            "render: re-clamped stale range"
        );
    }
    VisibleRange {
        start_index: start,
        end_index: end,
    }
}
