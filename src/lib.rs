#![deny(unused_imports)]
#![deny(missing_docs)]

//! Meldable priority queues for Rust.
//!
//! This crate provides two min-heaps that support merging two heaps
//! in addition to the usual `insert`, `find_min` and `delete_min`:
//!
//! - `PairingHeap`: an addressable pairing heap. Inserting an item returns a
//!   `Handle` that can later be used to `adjust` (increase or decrease) or
//!   `delete` that item, or to look it up again. Nodes are stored densely
//!   within a `Stash`.
//! - `LeftistHeap`: a rank balanced binary tree that supports the plain
//!   operations only.
//!
//! Both heaps implement the common `Heap` trait.
//!
//! Every type that is `Ord` can be stored right away. Other types can be stored
//! by implementing the `Item` trait.
//!
//! ```
//! use meldable_heaps::PairingHeap;
//!
//! let mut heap = PairingHeap::new();
//! heap.insert(4);
//! let three = heap.insert(3);
//! heap.insert(5);
//! assert!(heap.adjust(three, 6).is_some());
//! assert_eq!(heap.delete_min(), Some(4));
//! assert_eq!(heap.delete_min(), Some(5));
//! assert_eq!(heap.delete_min(), Some(6));
//! assert_eq!(heap.delete_min(), None);
//! ```

extern crate stash;
extern crate itertools;
#[macro_use]
extern crate log;

#[cfg(test)]
extern crate rand;

use std::cmp::Ordering;
use std::fmt;

pub mod pairing;
pub mod leftist;

pub use pairing::PairingHeap;
pub use leftist::LeftistHeap;

/// Represents the ordering capability every item stored in a heap must provide.
///
/// `compare` returns `Less`, `Equal` or `Greater` and must describe a strict
/// weak ordering. The heaps never mutate stored items.
///
/// This trait is implicitly implemented already for all types that are `Ord`.
/// Types that are not `Ord` may implement it directly.
pub trait Item {
	/// Compares `self` with `other`.
	fn compare(&self, other: &Self) -> Ordering;
}

impl<T> Item for T where T: Ord {
	#[inline]
	fn compare(&self, other: &Self) -> Ordering {
		self.cmp(other)
	}
}

/// Errors that can be caused while addressing items of a `PairingHeap` by `Handle`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
	/// The handle was issued by a different heap instance.
	ForeignHandle,
	/// The handled item was removed or the heap was cleared since the handle was issued.
	StaleHandle
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Error::ForeignHandle => write!(f, "handle belongs to a different heap"),
			Error::StaleHandle   => write!(f, "handle refers to an item that is no longer stored")
		}
	}
}

impl ::std::error::Error for Error {}

/// Generic `Result` type for handle based `PairingHeap` methods.
pub type Result<T> = ::std::result::Result<T, Error>;

/// The operation set shared by all meldable heaps of this crate.
///
/// All heaps are min-heaps: `find_min` and `delete_min` address the item
/// that compares smallest. Operations on an empty heap return `None`.
pub trait Heap<T>: Sized
	where T: Item
{
	/// What `insert` hands back to the caller.
	///
	/// Addressable heaps return a handle to the inserted item, others return `()`.
	type Handle;

	/// Creates a new empty heap.
	fn new() -> Self;

	/// Returns true if no items are stored.
	fn is_empty(&self) -> bool;

	/// Returns the number of stored items.
	fn len(&self) -> usize;

	/// Removes all items.
	fn clear(&mut self);

	/// Returns a reference to the minimum item if not empty.
	fn find_min(&self) -> Option<&T>;

	/// Inserts the given item.
	fn insert(&mut self, item: T) -> Self::Handle;

	/// Removes the minimum item and returns it if not empty.
	fn delete_min(&mut self) -> Option<T>;

	/// Moves all items of `other` into this heap.
	fn merge(&mut self, other: Self);
}
