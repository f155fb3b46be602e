use windowing::{
    Keyed, RenderFrame, ScrollState, ViewportConfig, VisibleRange, WindowError, WindowedItem,
    compute_range, render_window,
};

use crate::{ScrollAnchor, capture_anchor, resolve_anchor};

/// Where a scrolled-to row should land inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Scroll the minimum distance needed to bring the row fully into view.
    #[default]
    Auto,
}

/// A framework-neutral controller that owns the mutable inputs of the windowing functions.
///
/// This type does not hold any UI objects or the collection itself. Hosts drive it by calling:
/// - `on_scroll` when the scroll container reports a new offset
/// - `on_resize` / `set_config` when the layout changes
/// - `frame(collection, renderer)` when it is time to render
///
/// Events are applied in arrival order and only the latest scroll offset is kept, so a frame is
/// always computed from the newest state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowController {
    config: ViewportConfig,
    scroll: ScrollState,
}

impl WindowController {
    pub fn new(config: ViewportConfig) -> Result<Self, WindowError> {
        config.validate()?;
        Ok(Self {
            config,
            scroll: ScrollState::default(),
        })
    }

    pub fn with_scroll(mut self, scroll: ScrollState) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll.offset
    }

    /// Replaces the viewport config.
    ///
    /// An invalid config is rejected and the previous one stays in effect.
    pub fn set_config(&mut self, config: ViewportConfig) -> Result<(), WindowError> {
        config.validate()?;
        if config != self.config {
            adebug!(
                item_height = config.item_height,
                container_height = config.container_height,
                overscan = config.overscan,
                "WindowController::set_config"
            );
            self.config = config;
        }
        Ok(())
    }

    /// Call this when the scroll container's height changes.
    pub fn on_resize(&mut self, container_height: u32) -> Result<(), WindowError> {
        self.set_config(self.config.with_container_height(container_height))
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.config.overscan = overscan;
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    pub fn on_scroll(&mut self, offset: u64) {
        self.scroll = ScrollState::new(offset);
    }

    /// Same as `on_scroll`, but clamps the offset to the scrollable extent of `count` rows.
    ///
    /// Returns the applied offset.
    pub fn on_scroll_clamped(&mut self, offset: u64, count: usize) -> u64 {
        let offset = self.clamp_scroll_offset(offset, count);
        self.on_scroll(offset);
        offset
    }

    pub fn total_height(&self, count: usize) -> u64 {
        self.config.total_height(count)
    }

    pub fn max_scroll_offset(&self, count: usize) -> u64 {
        self.total_height(count)
            .saturating_sub(self.config.container_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64, count: usize) -> u64 {
        offset.min(self.max_scroll_offset(count))
    }

    /// The window for the current scroll state over `count` rows.
    pub fn range(&self, count: usize) -> Result<VisibleRange, WindowError> {
        compute_range(self.scroll, &self.config, count)
    }

    /// Renders the window of `collection` for the current scroll state.
    pub fn frame<'a, T, U>(
        &self,
        collection: &'a [T],
        f: impl FnMut(WindowedItem<'a, T, T::Key>) -> U,
    ) -> Result<RenderFrame<'a, T, U>, WindowError>
    where
        T: Keyed,
    {
        render_window(collection, self.scroll, &self.config, f)
    }

    /// Same as `frame`, but times the render pass and reports it to `monitor`.
    #[cfg(feature = "std")]
    pub fn frame_monitored<'a, T, U, M>(
        &self,
        collection: &'a [T],
        f: impl FnMut(WindowedItem<'a, T, T::Key>) -> U,
        monitor: &mut M,
    ) -> Result<RenderFrame<'a, T, U>, WindowError>
    where
        T: Keyed,
        M: windowing::RenderMonitor + ?Sized,
    {
        windowing::render_window_monitored(collection, self.scroll, &self.config, f, monitor)
    }

    /// Computes the scroll offset that brings row `index` into view (clamped).
    ///
    /// `index` is clamped to the last row. Returns 0 for an empty collection.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align, count: usize) -> u64 {
        if count == 0 {
            return 0;
        }
        let index = index.min(count - 1);
        let h = self.config.item_height as u64;
        let view = self.config.container_height as u64;
        let start = (index as u64).saturating_mul(h);
        let end = start.saturating_add(h);

        let target = match align {
            Align::Start => start,
            Align::End => end.saturating_sub(view),
            Align::Center => start.saturating_add(h / 2).saturating_sub(view / 2),
            Align::Auto => {
                let cur = self.scroll.offset;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start
                } else {
                    end.saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target, count)
    }

    /// Programmatically scrolls to a row.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align, count: usize) -> u64 {
        let offset = self.scroll_to_index_offset(index, align, count);
        self.on_scroll(offset);
        offset
    }

    pub fn capture_anchor<T: Keyed>(&self, collection: &[T]) -> Option<ScrollAnchor<T::Key>> {
        capture_anchor(collection, self.scroll, &self.config)
    }

    /// Restores a previously captured anchor against the current `collection`.
    ///
    /// Returns `true` when the anchored item was found and the scroll offset was updated.
    pub fn apply_anchor<T: Keyed>(
        &mut self,
        collection: &[T],
        anchor: &ScrollAnchor<T::Key>,
    ) -> bool {
        let resolved = resolve_anchor(anchor, &self.config, collection.len(), |key| {
            collection.iter().position(|item| &item.key() == key)
        });
        let Some(scroll) = resolved else {
            adebug!("apply_anchor: anchored item no longer present");
            return false;
        };
        self.scroll = scroll;
        true
    }
}
