//! Typed references into the economy's entity arenas

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Index of an entity of type `T` inside an [`Economy`](super::Economy).
///
/// References are only minted by [`EconomyBuilder`](super::EconomyBuilder),
/// so a reference is always valid for the economy it was built into.
pub struct EntityRef<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> EntityRef<T> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Position in the owning arena
    pub fn index(self) -> usize {
        self.index
    }

    /// Iterate an arena together with the reference of each entry
    pub fn enumerate(items: &[T]) -> impl Iterator<Item = (EntityRef<T>, &T)> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| (EntityRef::new(index), item))
    }
}

impl<T> Clone for EntityRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityRef<T> {}

impl<T> PartialEq for EntityRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for EntityRef<T> {}

impl<T> PartialOrd for EntityRef<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for EntityRef<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T> Hash for EntityRef<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for EntityRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityRef({})", self.index)
    }
}
