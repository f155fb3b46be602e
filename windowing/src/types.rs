use crate::error::{ConfigField, WindowError};

/// Fixed-height viewport geometry.
///
/// Heights are in pixels (or any other integer unit, as long as the scroll offset uses the
/// same one). Both heights must be non-zero; see [`ViewportConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportConfig {
    pub item_height: u32,
    pub container_height: u32,
    /// Extra rows materialized on each side of the visible rows.
    pub overscan: usize,
}

impl ViewportConfig {
    pub const DEFAULT_OVERSCAN: usize = 5;

    pub fn new(item_height: u32, container_height: u32) -> Self {
        Self {
            item_height,
            container_height,
            overscan: Self::DEFAULT_OVERSCAN,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_container_height(mut self, container_height: u32) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height;
        self
    }

    /// Rejects zero heights instead of clamping them, so host layout bugs stay visible.
    pub fn validate(&self) -> Result<(), WindowError> {
        if self.item_height == 0 {
            wwarn!(item_height = self.item_height, "ViewportConfig: zero item_height");
            return Err(WindowError::InvalidConfiguration {
                field: ConfigField::ItemHeight,
                value: self.item_height as u64,
            });
        }
        if self.container_height == 0 {
            wwarn!(
                container_height = self.container_height,
                "ViewportConfig: zero container_height"
            );
            return Err(WindowError::InvalidConfiguration {
                field: ConfigField::ContainerHeight,
                value: self.container_height as u64,
            });
        }
        Ok(())
    }

    /// Height of the full, unwindowed list.
    pub fn total_height(&self, count: usize) -> u64 {
        (count as u64).saturating_mul(self.item_height as u64)
    }

    /// Number of rows that fit in the container, counting a partially visible row.
    pub fn rows_per_viewport(&self) -> usize {
        if self.item_height == 0 {
            return 0;
        }
        let rows = (self.container_height as u64).div_ceil(self.item_height as u64);
        usize::try_from(rows).unwrap_or(usize::MAX)
    }
}

/// The latest scroll position reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
}

impl ScrollState {
    pub fn new(offset: u64) -> Self {
        Self { offset }
    }
}

/// A contiguous run of item indexes to materialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    /// The inclusive last index, or `None` for an empty range.
    pub fn last_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn as_range(&self) -> core::ops::Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }
}

/// One item handed to the per-item renderer.
#[derive(Debug)]
pub struct WindowedItem<'a, T, K> {
    pub key: K,
    /// Position in the full collection.
    pub index: usize,
    /// Start offset of the row in the full list.
    pub top: u64,
    pub item: &'a T,
}

/// The output of rendering one item, keyed by the item's identity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedRow<K, U> {
    pub key: K,
    pub index: usize,
    pub top: u64,
    pub unit: U,
}
