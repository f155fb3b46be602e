#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<K> = BTreeSet<K>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait WindowKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> WindowKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait WindowKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> WindowKey for K {}

/// An item with a stable identity.
///
/// Rendered rows are keyed by this value rather than by position, because the position of an
/// item inside the window shifts on every scroll.
pub trait Keyed {
    type Key: WindowKey;

    fn key(&self) -> Self::Key;
}

impl<T: Keyed + ?Sized> Keyed for &T {
    type Key = T::Key;

    fn key(&self) -> Self::Key {
        (**self).key()
    }
}

impl<K: WindowKey, V> Keyed for (K, V) {
    type Key = K;

    fn key(&self) -> K {
        self.0.clone()
    }
}
