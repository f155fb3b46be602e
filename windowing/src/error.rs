use thiserror::Error;

/// The [`crate::ViewportConfig`] field that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigField {
    ItemHeight,
    ContainerHeight,
}

impl core::fmt::Display for ConfigField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::ItemHeight => "item_height",
            Self::ContainerHeight => "container_height",
        })
    }
}

/// Errors produced while computing a window.
///
/// A shrinking collection between range computation and slicing is not an error: the slice
/// renderer re-clamps the range and carries on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum WindowError {
    /// A viewport dimension is not strictly positive.
    #[error("invalid viewport configuration: {field} must be positive (got {value})")]
    InvalidConfiguration { field: ConfigField, value: u64 },
}
