//! Traits and structs for the record sets that can be clustered.

mod table;

pub use table::Table;

/// A finite, randomly indexable collection of items.
///
/// Indices are stable for the duration of a clustering call and the items are
/// never mutated by the clustering core.
///
/// The ordered-axis scan additionally relies on the items being sorted so
/// that, from any fixed center, the distance is non-decreasing in the index
/// gap. This is not checked; see [`audit_ordering`](crate::audit_ordering).
///
/// We provide a blanket implementation of this trait for any type that
/// implements `AsRef<[I]>`, so `Vec<I>`, slices and arrays are datasets out of
/// the box.
pub trait Dataset<I> {
    /// Returns a reference to an indexed item from the dataset.
    ///
    /// The implementor may choose to panic if the index is out of bounds.
    fn get(&self, index: usize) -> &I;

    /// Returns the number of items in the dataset.
    fn cardinality(&self) -> usize;

    /// Whether the dataset has no items.
    fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }
}

/// Blanket implementation of `Dataset` for any type that implements
/// `AsRef<[I]>`.
impl<I, D: AsRef<[I]>> Dataset<I> for D {
    fn get(&self, index: usize) -> &I {
        &self.as_ref()[index]
    }

    fn cardinality(&self) -> usize {
        self.as_ref().len()
    }
}
