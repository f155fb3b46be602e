use core::fmt;

use windowing::{Keyed, ScrollState, ViewportConfig};

/// A scroll anchor that can be used to preserve visual position across data changes.
///
/// Typical use cases:
/// - a parts list refreshed from the server while the user is halfway down
/// - newer records prepended above the current position
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// The distance from the anchor row's top to the scroll offset.
    pub offset_in_row: u64,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("key", &self.key)
            .field("offset_in_row", &self.offset_in_row)
            .finish()
    }
}

/// Captures an anchor for the row at the top of the viewport.
///
/// Returns `None` for an empty collection, a zero `item_height`, or an offset past the content.
pub fn capture_anchor<T: Keyed>(
    collection: &[T],
    scroll: ScrollState,
    config: &ViewportConfig,
) -> Option<ScrollAnchor<T::Key>> {
    let h = config.item_height as u64;
    if h == 0 {
        return None;
    }
    let index = usize::try_from(scroll.offset / h).ok()?;
    let item = collection.get(index)?;
    Some(ScrollAnchor {
        key: item.key(),
        offset_in_row: scroll.offset % h,
    })
}

/// Computes the scroll state that puts a previously captured anchor back at the top.
///
/// The host provides a `key_to_index` mapping for the *current* collection. The result is
/// clamped to the scrollable extent of `count` rows.
pub fn resolve_anchor<K>(
    anchor: &ScrollAnchor<K>,
    config: &ViewportConfig,
    count: usize,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> Option<ScrollState> {
    let index = key_to_index(&anchor.key)?;
    if index >= count {
        return None;
    }
    let h = config.item_height as u64;
    let top = (index as u64).saturating_mul(h);
    let target = top.saturating_add(anchor.offset_in_row.min(h.saturating_sub(1)));
    let max = config
        .total_height(count)
        .saturating_sub(config.container_height as u64);
    Some(ScrollState::new(target.min(max)))
}
