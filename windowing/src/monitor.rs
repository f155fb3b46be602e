//! Render diagnostics.
//!
//! Monitors only observe a render pass; they never affect the produced frame. Production
//! builds use [`NoopMonitor`]. The [`RenderLog`] recorder is only compiled with the
//! `diagnostics` feature.

#[cfg(feature = "diagnostics")]
use alloc::collections::VecDeque;

/// Scalars captured for one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderMetrics {
    pub total_items: usize,
    pub visible_items: usize,
    pub render_duration_ms: f64,
}

/// A sink for render metrics. Implementations must not panic.
pub trait RenderMonitor {
    fn record(&mut self, metrics: RenderMetrics);
}

/// Discards every sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopMonitor;

impl RenderMonitor for NoopMonitor {
    #[inline]
    fn record(&mut self, _metrics: RenderMetrics) {}
}

impl<M: RenderMonitor + ?Sized> RenderMonitor for &mut M {
    fn record(&mut self, metrics: RenderMetrics) {
        (**self).record(metrics);
    }
}

/// Bounded history of recent render passes.
#[cfg(feature = "diagnostics")]
#[derive(Clone, Debug)]
pub struct RenderLog {
    samples: VecDeque<RenderMetrics>,
    capacity: usize,
    recorded: u64,
}

#[cfg(feature = "diagnostics")]
impl RenderLog {
    pub const DEFAULT_CAPACITY: usize = 120;

    /// Creates a log keeping at most `capacity` samples (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            recorded: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total number of samples recorded, including evicted ones.
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    pub fn last(&self) -> Option<RenderMetrics> {
        self.samples.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderMetrics> {
        self.samples.iter()
    }

    pub fn max_duration_ms(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|m| m.render_duration_ms)
            .reduce(f64::max)
    }

    pub fn mean_duration_ms(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f64 = self.samples.iter().map(|m| m.render_duration_ms).sum();
        Some(sum / self.samples.len() as f64)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(feature = "diagnostics")]
impl Default for RenderLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(feature = "diagnostics")]
impl RenderMonitor for RenderLog {
    fn record(&mut self, metrics: RenderMetrics) {
        wtrace!(
            total_items = metrics.total_items,
            visible_items = metrics.visible_items,
            render_duration_ms = metrics.render_duration_ms,
            "render pass"
        );
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(metrics);
        self.recorded = self.recorded.saturating_add(1);
    }
}

/// Same as [`crate::render_window`], but times the pass and reports it to `monitor`.
#[cfg(feature = "std")]
pub fn render_window_monitored<'a, T, U, M>(
    collection: &'a [T],
    scroll: crate::ScrollState,
    config: &crate::ViewportConfig,
    f: impl FnMut(crate::WindowedItem<'a, T, T::Key>) -> U,
    monitor: &mut M,
) -> Result<crate::RenderFrame<'a, T, U>, crate::WindowError>
where
    T: crate::Keyed,
    M: RenderMonitor + ?Sized,
{
    let started = std::time::Instant::now();
    let frame = crate::render_window(collection, scroll, config, f)?;
    monitor.record(RenderMetrics {
        total_items: collection.len(),
        visible_items: frame.visible_items(),
        render_duration_ms: started.elapsed().as_secs_f64() * 1000.0,
    });
    Ok(frame)
}
