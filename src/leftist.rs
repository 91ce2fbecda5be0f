//! A leftist heap.
//!
//! Leftist heaps are binary trees where every node stores its rank, the length of
//! its shortest path to an absent child. The rank of every left child is at least
//! the rank of its right sibling, so the right spine of a heap with n items has at
//! most ⌊log₂(n+1)⌋ nodes. Merging walks right spines only and thus takes
//! O(log m + log n) time.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use super::{Heap, Item};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
	item : T,
	rank : usize,
	left : Link<T>,
	right: Link<T>
}

impl<T> Node<T> {
	fn singleton(item: T) -> Box<Self> {
		Box::new(Node{
			item : item,
			rank : 1,
			left : None,
			right: None
		})
	}
}

/// Rank of the given subtree, 0 for an absent one.
#[inline]
fn rank<T>(link: &Link<T>) -> usize {
	link.as_ref().map_or(0, |node| node.rank)
}

/// Merges two trees and returns the root of the result.
///
/// The root with the smaller item wins, ties are won by `fst`.
/// Recursion depth is bounded by the length of both right spines.
fn meld<T>(fst: Link<T>, snd: Link<T>) -> Link<T>
	where T: Item
{
	match (fst, snd) {
		(None, tree) | (tree, None) => tree,
		(Some(fst), Some(snd)) => {
			let (mut winner, loser) = match snd.item.compare(&fst.item) {
				Ordering::Less => (snd, fst),
				_              => (fst, snd)
			};
			let right = winner.right.take();
			winner.right = meld(right, Some(loser));
			if rank(&winner.left) < rank(&winner.right) {
				mem::swap(&mut winner.left, &mut winner.right);
			}
			winner.rank = 1 + rank(&winner.right);
			Some(winner)
		}
	}
}

/// A leftist heap implementation.
///
/// Supports `insert`, `find_min`, `delete_min` and `merge` but, unlike the
/// `PairingHeap`, hands out no handles to stored items.
pub struct LeftistHeap<T>
	where T: Item
{
	root: Link<T>,
	len : usize
}

impl<T> LeftistHeap<T>
	where T: Item
{
	/// Creates a new empty `LeftistHeap`.
	pub fn new() -> Self {
		LeftistHeap{
			root: None,
			len : 0
		}
	}

	/// Returns the number of items stored in this `LeftistHeap`.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns true if this `LeftistHeap` is empty.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Removes all items from this `LeftistHeap`.
	pub fn clear(&mut self) {
		drop_tree(self.root.take());
		self.len = 0;
	}

	/// Returns a reference to the current minimum item if not empty.
	#[inline]
	pub fn find_min(&self) -> Option<&T> {
		self.root.as_ref().map(|root| &root.item)
	}

	/// Inserts the given item into this `LeftistHeap`.
	///
	/// The complexity is O(log n).
	pub fn insert(&mut self, item: T) {
		let root = self.root.take();
		self.root = meld(root, Some(Node::singleton(item)));
		self.len += 1;
	}

	/// Removes the minimum item within this `LeftistHeap` and returns it.
	///
	/// The complexity is O(log n).
	pub fn delete_min(&mut self) -> Option<T> {
		let root = *self.root.take()?;
		let Node{item, left, right, ..} = root;
		self.root = meld(left, right);
		self.len -= 1;
		Some(item)
	}

	/// Moves all items of `other` into this `LeftistHeap`.
	///
	/// The complexity is O(log m + log n).
	pub fn merge(&mut self, mut other: LeftistHeap<T>) {
		let root = self.root.take();
		self.root = meld(root, other.root.take());
		self.len += mem::replace(&mut other.len, 0);
	}

	/// Iterate over items stored within a `LeftistHeap` in a sorted-by-min order. Drains the heap.
	pub fn drain_min(self) -> DrainMin<T> {
		DrainMin{heap: self}
	}
}

/// Drops a tree without recursion since left spines may be arbitrarily long.
fn drop_tree<T>(link: Link<T>) {
	let mut stack = link.into_iter().collect::<Vec<_>>();
	while let Some(mut node) = stack.pop() {
		stack.extend(node.left.take());
		stack.extend(node.right.take());
	}
}

/// Lists the items in pre-order without recursion since left spines may be arbitrarily long.
impl<T> fmt::Debug for LeftistHeap<T>
	where T: Item + fmt::Debug
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let mut list  = f.debug_list();
		let mut stack = self.root.iter().collect::<Vec<_>>();
		while let Some(node) = stack.pop() {
			list.entry(&node.item);
			stack.extend(node.right.iter());
			stack.extend(node.left.iter());
		}
		list.finish()
	}
}

impl<T> Drop for LeftistHeap<T>
	where T: Item
{
	fn drop(&mut self) {
		drop_tree(self.root.take());
	}
}

impl<T> Default for LeftistHeap<T>
	where T: Item
{
	fn default() -> Self {
		LeftistHeap::new()
	}
}

impl<T> Extend<T> for LeftistHeap<T>
	where T: Item
{
	fn extend<I>(&mut self, iter: I)
		where I: IntoIterator<Item = T>
	{
		for item in iter {
			self.insert(item);
		}
	}
}

impl<T> FromIterator<T> for LeftistHeap<T>
	where T: Item
{
	fn from_iter<I>(iter: I) -> Self
		where I: IntoIterator<Item = T>
	{
		let mut heap = LeftistHeap::new();
		heap.extend(iter);
		heap
	}
}

impl<T> Heap<T> for LeftistHeap<T>
	where T: Item
{
	type Handle = ();

	fn new() -> Self {
		LeftistHeap::new()
	}

	fn is_empty(&self) -> bool {
		LeftistHeap::is_empty(self)
	}

	fn len(&self) -> usize {
		LeftistHeap::len(self)
	}

	fn clear(&mut self) {
		LeftistHeap::clear(self)
	}

	fn find_min(&self) -> Option<&T> {
		LeftistHeap::find_min(self)
	}

	fn insert(&mut self, item: T) {
		LeftistHeap::insert(self, item)
	}

	fn delete_min(&mut self) -> Option<T> {
		LeftistHeap::delete_min(self)
	}

	fn merge(&mut self, other: Self) {
		LeftistHeap::merge(self, other)
	}
}

/// Iterator over items stored within a `LeftistHeap` in a sorted-by-min order. Drains the heap.
pub struct DrainMin<T>
	where T: Item
{
	heap: LeftistHeap<T>
}

impl<T> Iterator for DrainMin<T>
	where T: Item
{
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.heap.delete_min()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.heap.len(), Some(self.heap.len()))
	}
}
