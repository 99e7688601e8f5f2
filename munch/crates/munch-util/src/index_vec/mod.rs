//! IndexVec - A vector indexed by a specific type.
//!
//! [`IndexVec`] is an append-mostly arena: elements are pushed once and then
//! addressed through the handle returned by [`IndexVec::push`]. Handles are
//! typed, so an index into one arena cannot be used against another.
//!
//! # Example
//!
//! ```
//! use munch_util::index_vec::{IndexVec, Idx};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! struct StateId(u32);
//!
//! impl Idx for StateId {
//!     fn from_usize(idx: usize) -> Self { StateId(idx as u32) }
//!     fn index(self) -> usize { self.0 as usize }
//! }
//!
//! let mut states: IndexVec<StateId, &str> = IndexVec::new();
//! let id = states.push("start");
//! assert_eq!(states[id], "start");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Trait for types that can be used as indices
///
/// Implementations convert to and from `usize`. Most callers should use
/// [`define_idx!`](crate::define_idx) instead of implementing this by hand.
pub trait Idx: Copy + Eq + PartialEq {
    /// Convert from usize to index type
    ///
    /// # Panics
    ///
    /// Implementations may panic if the value does not fit the index type.
    fn from_usize(idx: usize) -> Self;

    /// Convert index to usize for array indexing
    fn index(self) -> usize;
}

/// A vector indexed by a specific type
///
/// # Type Parameters
///
/// - `I`: The index type (must implement [`Idx`])
/// - `T`: The element type
#[derive(Clone, PartialEq, Eq)]
pub struct IndexVec<I, T> {
    raw: Vec<T>,
    _marker: PhantomData<fn(&I)>,
}

impl<I, T> IndexVec<I, T> {
    /// Create an empty IndexVec
    #[inline]
    pub fn new() -> Self {
        Self {
            raw: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the vector
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the vector contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl<I: Idx, T> IndexVec<I, T> {
    /// Append an element and return its index
    ///
    /// # Examples
    ///
    /// ```
    /// use munch_util::{define_idx, IndexVec};
    ///
    /// define_idx!(CharId);
    ///
    /// let mut vec: IndexVec<CharId, char> = IndexVec::new();
    /// assert_eq!(vec.push('a'), CharId(0));
    /// assert_eq!(vec.push('b'), CharId(1));
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> I {
        let idx = I::from_usize(self.raw.len());
        self.raw.push(value);
        idx
    }

    /// Get a reference to the element at `index`, or `None` if out of bounds
    #[inline]
    pub fn get(&self, index: I) -> Option<&T> {
        self.raw.get(index.index())
    }
}

impl<I: Idx, T> Index<I> for IndexVec<I, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: I) -> &T {
        &self.raw[index.index()]
    }
}

impl<I: Idx, T> IndexMut<I> for IndexVec<I, T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut T {
        &mut self.raw[index.index()]
    }
}

impl<I, T> Default for IndexVec<I, T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T: fmt::Debug> fmt::Debug for IndexVec<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.raw.iter()).finish()
    }
}

/// Macro to define index types easily
///
/// Generates a newtype wrapper around `u32` that implements [`Idx`], along
/// with the derives needed to use it as a map key or in assertions.
///
/// # Examples
///
/// ```
/// use munch_util::index_vec::IndexVec;
/// use munch_util::define_idx;
///
/// define_idx!(TokenId);
///
/// let mut vec: IndexVec<TokenId, i32> = IndexVec::new();
/// let idx = vec.push(42);
/// assert_eq!(vec[idx], 42);
/// ```
#[macro_export]
macro_rules! define_idx {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $crate::index_vec::Idx for $name {
            fn from_usize(idx: usize) -> Self {
                assert!(idx <= u32::MAX as usize, "Index {} exceeds u32::MAX", idx);
                $name(idx as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}
