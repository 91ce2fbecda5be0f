//! An addressable pairing heap.
//!
//! Addressable heaps return handles to stored items that make it possible
//! to query and edit them later on. This allows for the `adjust(h: Handle, item)`
//! method that replaces the item that is associated with the given handle by
//! another one, regardless of whether the new item is smaller or greater than
//! the old one, and for the `delete(h: Handle)` method that removes the
//! associated item from anywhere within the heap.
//!
//! All nodes are stored within a `Stash` that allocates them densely within an array.
//! Parent and child links are indices into that stash so the heap alone owns its nodes.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::iter::FromIterator;
use std::mem;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use stash::Stash;
use itertools::Itertools;

use super::{Error, Heap, Item, Result};

static NEXT_HEAP_ID: AtomicUsize = AtomicUsize::new(0);

/// Identifies one `PairingHeap` instance for the lifetime of the process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct HeapId(usize);

impl HeapId {
	fn fresh() -> Self {
		HeapId(NEXT_HEAP_ID.fetch_add(1, AtomicOrdering::Relaxed))
	}
}

/// A handle to access stored items within a `PairingHeap`.
///
/// Handles are always local to the pairing heap instance that issued them.
/// Passing a handle to another instance, or using it after its item was
/// removed or the heap was cleared, is detected and rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Handle {
	heap : HeapId,
	slot : usize,
	stamp: u64
}

#[derive(Debug, Clone)]
struct Node<T> {
	item    : T,
	parent  : Option<usize>,
	children: VecDeque<usize>,
	/// Unique per heap; a reused slot never gets an old stamp back.
	stamp   : u64
}

impl<T> Node<T> {
	fn new(item: T, stamp: u64) -> Self {
		Node{
			item    : item,
			parent  : None,
			children: VecDeque::new(),
			stamp   : stamp
		}
	}
}

/// An addressable pairing heap implementation.
///
/// Stores items that are ordered by their `Item` implementation with the
/// minimum item at the root of a multiway tree.
///
/// Inserting items into this data structure provides the caller with handles
/// that make accessing the items possible - this is called "addressable".
///
/// The tree shape is unspecified; only the heap order and the amortized bounds
/// are guaranteed: `insert`, `find_min` and `merge` of the roots in O(1),
/// `delete_min`, `adjust` and `delete` in amortized O(log n).
#[derive(Debug)]
pub struct PairingHeap<T>
	where T: Item
{
	id   : HeapId,
	/// The slot of the node with the minimum item, `None` if the heap is empty.
	root : Option<usize>,
	nodes: Stash<Node<T>>,
	/// Source of node stamps. Never reset, not even by `clear`.
	stamps: u64
}

impl<T> PairingHeap<T>
	where T: Item
{
	/// Creates a new empty `PairingHeap`.
	pub fn new() -> Self {
		PairingHeap{
			id    : HeapId::fresh(),
			root  : None,
			nodes : Stash::new(),
			stamps: 0
		}
	}

	/// Returns the number of items stored in this `PairingHeap`.
	#[inline]
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns true if this `PairingHeap` is empty.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Removes all items from this `PairingHeap`.
	///
	/// All handles issued so far become invalid. Dropping the stored nodes takes O(n).
	pub fn clear(&mut self) {
		self.nodes = Stash::new();
		self.root  = None;
		debug!("pairing heap {:?} cleared, outstanding handles are invalid now", self.id);
	}

	/// Returns a reference to the `Node` at the given slot.
	/// Note that this won't fail on usage for a correct implementation of `PairingHeap`.
	#[inline]
	fn node(&self, slot: usize) -> &Node<T> {
		debug_assert!(self.nodes.get(slot).is_some(), "no node at slot {}", slot);
		unsafe{ self.nodes.get_unchecked(slot) }
	}

	/// Returns a mutable reference to the `Node` at the given slot.
	/// Note that this won't fail on usage for a correct implementation of `PairingHeap`.
	#[inline]
	fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
		debug_assert!(self.nodes.get(slot).is_some(), "no node at slot {}", slot);
		unsafe{ self.nodes.get_unchecked_mut(slot) }
	}

	fn next_stamp(&mut self) -> u64 {
		let stamp = self.stamps;
		self.stamps += 1;
		stamp
	}

	fn handle_of(&self, slot: usize) -> Handle {
		Handle{
			heap : self.id,
			slot : slot,
			stamp: self.node(slot).stamp
		}
	}

	/// Resolves the given handle to the slot of its node.
	fn validate(&self, handle: Handle) -> Result<usize> {
		if handle.heap != self.id {
			trace!("rejected {:?}: issued by another heap than {:?}", handle, self.id);
			return Err(Error::ForeignHandle)
		}
		match self.nodes.get(handle.slot) {
			Some(node) if node.stamp == handle.stamp => Ok(handle.slot),
			_ => {
				trace!("rejected {:?}: its item is no longer stored", handle);
				Err(Error::StaleHandle)
			}
		}
	}

	/// Links the given `lower` tree under the given `upper` tree thus making `lower`
	/// the first child of `upper`.
	fn link(&mut self, upper: usize, lower: usize) {
		debug_assert!(upper != lower, "cannot link to self!");
		debug_assert!(self.node(lower).parent.is_none(), "lower cannot have multiple parents!");

		self.node_mut(lower).parent = Some(upper);
		self.node_mut(upper).children.push_front(lower);
	}

	/// Links the tree with the greater root item under the other one
	/// and returns the slot of the winner. Ties are won by `fst`.
	fn union(&mut self, fst: usize, snd: usize) -> usize {
		debug_assert!(fst != snd, "cannot union self with itself");

		match self.node(snd).item.compare(&self.node(fst).item) {
			Ordering::Less => {
				self.link(snd, fst);
				snd
			},
			_ => {
				self.link(fst, snd);
				fst
			}
		}
	}

	/// Melds the detached tree at the given slot with the root tree.
	fn meld_root(&mut self, tree: usize) {
		self.root = Some(match self.root {
			None       => tree,
			Some(root) => self.union(root, tree)
		});
	}

	/// Combines the given detached trees into a single tree and returns its root slot.
	///
	/// First pass pairwise unifies neighbours from left to right, second pass
	/// folds the resulting trees from right to left into one.
	fn merge_pairs(&mut self, mut trees: Vec<usize>) -> Option<usize> {
		for &tree in trees.iter() {
			self.node_mut(tree).parent = None;
		}
		let odd = match trees.len() % 2 {
			1 => trees.pop(),
			_ => None
		};
		let pairs = trees
			.into_iter()
			.tuples::<(_, _)>()
			.map(|(left, right)| self.union(left, right))
			.collect::<Vec<_>>();
		pairs.into_iter().rev().fold(odd, |acc, tree| match acc {
			None      => Some(tree),
			Some(acc) => Some(self.union(tree, acc))
		})
	}

	/// Removes the given non-root node from its parent.
	///
	/// The children of the node take its place within the child list of the
	/// former parent, so the relative order of all siblings is preserved.
	/// Afterwards the node is a detached singleton tree.
	fn detach(&mut self, slot: usize) {
		let parent = match self.node(slot).parent {
			Some(parent) => parent,
			None         => return
		};
		let children = mem::replace(&mut self.node_mut(slot).children, VecDeque::new());
		for &child in children.iter() {
			self.node_mut(child).parent = Some(parent);
		}
		{
			let siblings = &mut self.node_mut(parent).children;
			let idx = siblings
				.iter()
				.position(|&sibling| sibling == slot)
				.unwrap_or(siblings.len());
			let mut tail = siblings.split_off(idx);
			debug_assert_eq!(tail.front(), Some(&slot), "node not found within its parent");
			tail.pop_front();
			siblings.extend(children);
			siblings.append(&mut tail);
		}
		self.node_mut(slot).parent = None;
	}

	/// Inserts the given item into the `PairingHeap` and returns a `Handle` to it
	/// that allows to directly address it.
	///
	/// The handle is for example required in order to use methods like `adjust`.
	pub fn insert(&mut self, item: T) -> Handle {
		let stamp = self.next_stamp();
		let slot  = self.nodes.put(Node::new(item, stamp));
		self.meld_root(slot);
		Handle{
			heap : self.id,
			slot : slot,
			stamp: stamp
		}
	}

	/// Returns a reference to the current minimum item if not empty.
	#[inline]
	pub fn find_min(&self) -> Option<&T> {
		self.root.map(|root| &self.node(root).item)
	}

	/// Removes the minimum item within this `PairingHeap` and returns it.
	pub fn delete_min(&mut self) -> Option<T> {
		let root = self.root.take()?;
		let node = self.nodes.take(root)?;
		self.root = self.merge_pairs(Vec::from(node.children));
		Some(node.item)
	}

	/// Returns a reference to the item associated with the given handle.
	pub fn get(&self, handle: Handle) -> Option<&T> {
		self.validate(handle)
			.ok()
			.map(|slot| &self.node(slot).item)
	}

	/// Returns true if the given handle addresses an item of this `PairingHeap`.
	pub fn contains(&self, handle: Handle) -> bool {
		self.validate(handle).is_ok()
	}

	/// Replaces the item associated with the given handle by `item`.
	///
	/// The new item may be smaller or greater than the old one.
	/// The old item is dropped. On success the given handle stays valid and
	/// addresses the new item; it is also returned for convenience.
	///
	/// # Errors
	///
	/// - `Error::ForeignHandle` if the handle was issued by another heap.
	/// - `Error::StaleHandle` if its item was removed or the heap was cleared.
	///
	/// In both cases the heap is left untouched and `item` is dropped.
	pub fn try_adjust(&mut self, handle: Handle, item: T) -> Result<Handle> {
		let slot = self.validate(handle)?;
		if self.root == Some(slot) {
			let children = mem::replace(&mut self.node_mut(slot).children, VecDeque::new());
			self.root = self.merge_pairs(Vec::from(children));
		}
		else {
			self.detach(slot);
		}
		self.node_mut(slot).item = item;
		self.meld_root(slot);
		Ok(handle)
	}

	/// Replaces the item associated with the given handle by `item`.
	///
	/// Returns `None` and leaves the heap untouched if the handle does not
	/// address an item of this heap. See `try_adjust` for details.
	pub fn adjust(&mut self, handle: Handle, item: T) -> Option<Handle> {
		self.try_adjust(handle, item).ok()
	}

	/// Removes the item associated with the given handle and returns it.
	///
	/// # Errors
	///
	/// Same as for `try_adjust`, the heap is left untouched then.
	pub fn try_delete(&mut self, handle: Handle) -> Result<T> {
		let slot = self.validate(handle)?;
		self.remove(slot).ok_or(Error::StaleHandle)
	}

	/// Removes the item associated with the given handle and returns it.
	///
	/// Returns `None` and leaves the heap untouched if the handle does not
	/// address an item of this heap.
	pub fn delete(&mut self, handle: Handle) -> Option<T> {
		self.try_delete(handle).ok()
	}

	fn remove(&mut self, slot: usize) -> Option<T> {
		if self.root == Some(slot) {
			return self.delete_min()
		}
		self.detach(slot);
		self.nodes.take(slot).map(|node| node.item)
	}

	/// Searches for an item that compares equal to the given one and
	/// returns a handle to the first match.
	///
	/// The search visits nodes in the same order as `iter` and takes O(n).
	pub fn find(&self, item: &T) -> Option<Handle> {
		self.slots()
			.find(|&slot| self.node(slot).item.compare(item) == Ordering::Equal)
			.map(|slot| self.handle_of(slot))
	}

	/// Calls `f` on every item stored in this `PairingHeap` exactly once,
	/// in the order of `iter`.
	///
	/// `f` cannot modify the heap while it is visited.
	pub fn visit<F>(&self, f: F)
		where F: FnMut(&T)
	{
		self.iter().for_each(f)
	}

	/// Iterates over the items in this `PairingHeap` by reference.
	///
	/// The root (minimum) item comes first, followed by a depth-first
	/// pre-order walk over its children.
	pub fn iter<'a>(&'a self) -> Iter<'a, T> {
		Iter{slots: self.slots()}
	}

	fn slots<'a>(&'a self) -> Slots<'a, T> {
		Slots{
			heap : self,
			stack: self.root.into_iter().collect()
		}
	}

	/// Moves all items of `other` into this `PairingHeap`.
	///
	/// This takes O(m) for the m items of `other` since its nodes have to be
	/// moved into the storage of this heap. Handles issued by `other` are
	/// foreign to this heap afterwards; handles issued by this heap stay valid.
	pub fn merge(&mut self, mut other: PairingHeap<T>) {
		let other_root = match other.root.take() {
			Some(root) => root,
			None       => return
		};
		let mut tree  = None;
		let mut stack = vec![(other_root, None)];
		while let Some((old_slot, parent)) = stack.pop() {
			let old = match other.nodes.take(old_slot) {
				Some(node) => node,
				None       => continue
			};
			let stamp = self.next_stamp();
			let slot  = self.nodes.put(Node{
				item    : old.item,
				parent  : parent,
				children: VecDeque::with_capacity(old.children.len()),
				stamp   : stamp
			});
			match parent {
				Some(parent) => self.node_mut(parent).children.push_back(slot),
				None         => tree = Some(slot)
			}
			stack.extend(old.children.into_iter().rev().map(|child| (child, Some(slot))));
		}
		if let Some(tree) = tree {
			self.meld_root(tree);
		}
	}

	/// Iterate over items stored within a `PairingHeap` in a sorted-by-min order. Drains the heap.
	pub fn drain_min(self) -> DrainMin<T> {
		DrainMin{heap: self}
	}
}

impl<T> Default for PairingHeap<T>
	where T: Item
{
	fn default() -> Self {
		PairingHeap::new()
	}
}

/// A clone is a distinct heap: handles of the original are foreign to it.
impl<T> Clone for PairingHeap<T>
	where T: Item + Clone
{
	fn clone(&self) -> Self {
		PairingHeap{
			id    : HeapId::fresh(),
			root  : self.root,
			nodes : self.nodes.clone(),
			stamps: self.stamps
		}
	}
}

impl<T> Extend<T> for PairingHeap<T>
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

impl<T> FromIterator<T> for PairingHeap<T>
	where T: Item
{
	fn from_iter<I>(iter: I) -> Self
		where I: IntoIterator<Item = T>
	{
		let mut heap = PairingHeap::new();
		heap.extend(iter);
		heap
	}
}

impl<T> Heap<T> for PairingHeap<T>
	where T: Item
{
	type Handle = Handle;

	fn new() -> Self {
		PairingHeap::new()
	}

	fn is_empty(&self) -> bool {
		PairingHeap::is_empty(self)
	}

	fn len(&self) -> usize {
		PairingHeap::len(self)
	}

	fn clear(&mut self) {
		PairingHeap::clear(self)
	}

	fn find_min(&self) -> Option<&T> {
		PairingHeap::find_min(self)
	}

	fn insert(&mut self, item: T) -> Handle {
		PairingHeap::insert(self, item)
	}

	fn delete_min(&mut self) -> Option<T> {
		PairingHeap::delete_min(self)
	}

	fn merge(&mut self, other: Self) {
		PairingHeap::merge(self, other)
	}
}

/// Pre-order walk over the slots of a heap.
struct Slots<'a, T>
	where T: Item + 'a
{
	heap : &'a PairingHeap<T>,
	stack: Vec<usize>
}

impl<'a, T> Iterator for Slots<'a, T>
	where T: Item + 'a
{
	type Item = usize;

	fn next(&mut self) -> Option<usize> {
		let slot = self.stack.pop()?;
		self.stack.extend(self.heap.node(slot).children.iter().rev());
		Some(slot)
	}
}

/// Iterator over references to items stored within a `PairingHeap`.
pub struct Iter<'a, T>
	where T: Item + 'a
{
	slots: Slots<'a, T>
}

impl<'a, T> Iterator for Iter<'a, T>
	where T: Item + 'a
{
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		let heap = self.slots.heap;
		self.slots.next().map(|slot| &heap.node(slot).item)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.slots.stack.len(), Some(self.slots.heap.len()))
	}
}

impl<'a, T> IntoIterator for &'a PairingHeap<T>
	where T: Item
{
	type Item     = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Iter<'a, T> {
		self.iter()
	}
}

/// Iterator over items stored within a `PairingHeap` in a sorted-by-min order. Drains the heap.
pub struct DrainMin<T>
	where T: Item
{
	heap: PairingHeap<T>
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

#[cfg(test)]
mod tests {
	use super::*;
	use std::fmt::Debug;
	use rand::{Rng, SeedableRng, StdRng};

	/// Checks heap order, parent back links and the item count.
	fn assert_invariants<T>(ph: &PairingHeap<T>)
		where T: Item + Debug
	{
		if let Some(root) = ph.root {
			assert_eq!(ph.node(root).parent, None);
		}
		let mut count = 0;
		for slot in ph.slots() {
			count += 1;
			let node = ph.node(slot);
			for &child in node.children.iter() {
				let child = ph.node(child);
				assert_eq!(child.parent, Some(slot));
				assert!(child.item.compare(&node.item) != Ordering::Less,
					"child {:?} is less than its parent {:?}", child.item, node.item);
			}
		}
		assert_eq!(count, ph.len());
		assert_eq!(ph.is_empty(), ph.len() == 0);
	}

	fn drain<T: Item>(ph: &mut PairingHeap<T>) -> Vec<T> {
		let mut out = Vec::new();
		while let Some(item) = ph.delete_min() {
			out.push(item);
		}
		out
	}

	#[test]
	fn delete_min_integers() {
		let mut ph = PairingHeap::new();
		for &n in [4, 3, 2, 5].iter() {
			ph.insert(n);
		}
		assert_invariants(&ph);
		assert_eq!(drain(&mut ph), vec![2, 3, 4, 5]);
		assert!(ph.is_empty());
	}

	#[test]
	fn delete_min_strings() {
		let mut ph = PairingHeap::new();
		for &s in ["a", "ccc", "bb", "d"].iter() {
			ph.insert(String::from(s));
		}
		assert_eq!(drain(&mut ph), vec!["a", "bb", "ccc", "d"]);
	}

	#[test]
	fn find_min_and_clear() {
		let mut ph = PairingHeap::new();
		for &n in [4, 3, -1, 5, 9].iter() {
			ph.insert(n);
		}
		assert_eq!(ph.find_min(), Some(&-1));
		ph.clear();
		assert_eq!(ph.find_min(), None);
		assert!(ph.is_empty());
		assert_eq!(ph.len(), 0);
	}

	#[test]
	fn empty_take() {
		let mut ph = PairingHeap::<usize>::new();
		assert_eq!(None, ph.find_min());
		assert_eq!(None, ph.delete_min());
		assert_eq!(None, ph.find(&1));
		assert!(ph.is_empty());
	}

	fn setup() -> PairingHeap<(i64, char)> {
		let mut ph = PairingHeap::new();
		ph.insert(( 100, 'a'));
		ph.insert((  50, 'b'));
		ph.insert(( 150, 'c'));
		ph.insert(( -25, 'd'));
		ph.insert(( 999, 'e'));
		ph.insert((  42, 'f'));
		ph.insert((  43, 'g'));
		ph.insert((  41, 'i'));
		ph.insert((-100, 'j'));
		ph.insert(( -77, 'k'));
		ph.insert(( 123, 'l'));
		ph.insert((-123, 'm'));
		ph.insert((   0, 'n'));
		ph.insert((  -1, 'o'));
		ph.insert((   2, 'p'));
		ph.insert((  -3, 'q'));
		ph.insert((   4, 'r'));
		ph.insert((  -5, 's'));
		ph
	}

	#[test]
	fn drain_min() {
		let ph = setup();
		let order = ph.drain_min().map(|(_, c)| c).collect::<String>();
		assert_eq!(order, "mjkdsqonprifgbalce");
	}

	#[test]
	fn iter_visits_root_first_and_everything_once() {
		let ph = setup();
		assert_eq!(ph.iter().next(), Some(&(-123, 'm')));
		let mut seen = ph.iter().map(|&(_, c)| c).collect::<Vec<_>>();
		seen.sort();
		assert_eq!(seen.into_iter().collect::<String>(), "abcdefgijklmnopqrs");

		let mut count = 0;
		ph.visit(|_| count += 1);
		assert_eq!(count, 18);
	}

	#[test]
	fn adjust_decrease_and_increase() {
		let mut ph = PairingHeap::new();
		let a = ph.insert(  0);
		let b = ph.insert( 50);
		let c = ph.insert(100);
		let d = ph.insert(150);
		let e = ph.insert(200);
		let f = ph.insert(250);
		let temp = ph.insert(75);
		assert_eq!(ph.delete(temp), Some(75));
		assert_invariants(&ph);

		assert_eq!(Some(f), ph.adjust(f, -50));
		assert_eq!(Some(&-50), ph.find_min());
		assert_eq!(Some(e), ph.adjust(e, -100));
		assert_eq!(Some(&-100), ph.find_min());
		assert_eq!(Some(c), ph.adjust(c, 1000));
		assert_eq!(Some(&-100), ph.find_min());
		assert_eq!(Some(e), ph.adjust(e, 500));
		assert_eq!(Some(&-50), ph.find_min());
		assert_eq!(Some(a), ph.adjust(a, 75));
		assert_invariants(&ph);

		assert_eq!(ph.len(), 6);
		assert_eq!(ph.get(d), Some(&150));
		assert_eq!(ph.get(b), Some(&50));
		assert_eq!(drain(&mut ph), vec![-50, 50, 75, 150, 500, 1000]);
	}

	#[test]
	fn adjust_root() {
		let mut ph = PairingHeap::new();
		for n in 1..20 {
			ph.insert(n);
		}
		assert_eq!(ph.delete_min(), Some(1));
		let root = ph.find(&2).expect("two is stored");
		assert_eq!(ph.find_min(), Some(&2));
		assert_eq!(Some(root), ph.adjust(root, 30));
		assert_invariants(&ph);
		assert_eq!(ph.find_min(), Some(&3));
		assert_eq!(ph.get(root), Some(&30));
		assert_eq!(ph.len(), 18);
	}

	#[test]
	fn delete_anywhere() {
		let mut ph = PairingHeap::new();
		let handles = (0..32).map(|n| ph.insert(n)).collect::<Vec<_>>();
		ph.delete_min();
		assert_eq!(ph.delete(handles[0]), None);
		assert_eq!(ph.delete(handles[17]), Some(17));
		assert_invariants(&ph);
		assert_eq!(ph.delete(handles[1]), Some(1));
		assert_invariants(&ph);
		assert_eq!(ph.len(), 29);
		assert_eq!(ph.find_min(), Some(&2));
		assert_eq!(ph.try_delete(handles[17]), Err(Error::StaleHandle));
		assert_eq!(ph.len(), 29);
	}

	#[test]
	fn find_then_delete_duplicates() {
		let mut ph = PairingHeap::new();
		for &n in [7, 3, 7, 1, 7, 9].iter() {
			ph.insert(n);
		}
		for remaining in (0..3).rev() {
			let handle = ph.find(&7).expect("seven is stored");
			assert_eq!(ph.delete(handle), Some(7));
			assert_eq!(ph.iter().filter(|&&n| n == 7).count(), remaining);
			assert_invariants(&ph);
		}
		assert_eq!(ph.find(&7), None);
		assert_eq!(drain(&mut ph), vec![1, 3, 9]);
	}

	#[test]
	fn foreign_handles() {
		let mut ph = PairingHeap::new();
		let mut other = PairingHeap::new();
		ph.insert(1);
		ph.insert(2);
		let foreign = other.insert(1);

		assert_eq!(ph.try_delete(foreign), Err(Error::ForeignHandle));
		assert_eq!(ph.try_adjust(foreign, 0), Err(Error::ForeignHandle));
		assert_eq!(ph.delete(foreign), None);
		assert_eq!(ph.adjust(foreign, 0), None);
		assert_eq!(ph.get(foreign), None);
		assert_eq!(ph.len(), 2);
		assert_eq!(ph.find_min(), Some(&1));
		assert_eq!(other.len(), 1);
	}

	#[test]
	fn clear_invalidates_handles() {
		let mut ph = PairingHeap::new();
		let old = ph.insert(10);
		ph.clear();
		let new = ph.insert(20);
		assert!(!ph.contains(old));
		assert!(ph.contains(new));
		assert_eq!(ph.try_adjust(old, 0), Err(Error::StaleHandle));
		assert_eq!(ph.delete(old), None);
		assert_eq!(ph.find_min(), Some(&20));
	}

	#[test]
	fn merge_heaps() {
		let mut ph = (0..10).map(|n| n * 2).collect::<PairingHeap<_>>();
		let mut other = PairingHeap::new();
		let mine = ph.insert(7);
		let theirs = other.insert(-1);
		other.extend(vec![3, 5, 11]);

		ph.merge(other);
		assert_invariants(&ph);
		assert_eq!(ph.len(), 15);
		assert_eq!(ph.find_min(), Some(&-1));
		assert_eq!(ph.get(mine), Some(&7));
		assert_eq!(ph.get(theirs), None);
		assert_eq!(ph.drain_min().collect::<Vec<_>>(),
			vec![-1, 0, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 14, 16, 18]);
	}

	#[test]
	fn clone_is_a_distinct_heap() {
		let mut ph = PairingHeap::new();
		let handle = ph.insert(5);
		let mut cloned = ph.clone();
		assert_eq!(cloned.delete(handle), None);
		assert_eq!(cloned.find_min(), Some(&5));
		assert_eq!(ph.delete(handle), Some(5));
	}

	#[test]
	fn random_operations() {
		let seed: &[_] = &[1, 2, 3, 4];
		let mut rng: StdRng = SeedableRng::from_seed(seed);
		let mut ph = PairingHeap::new();
		let mut handles: Vec<Handle> = Vec::new();
		let mut reference: Vec<i32> = Vec::new();

		for _ in 0..2_000 {
			match rng.gen_range(0, 5) {
				0 | 1 => {
					let n = rng.gen_range(-50, 50);
					handles.push(ph.insert(n));
					reference.push(n);
				},
				2 => {
					reference.sort();
					let expected = match reference.is_empty() {
						true  => None,
						false => Some(reference.remove(0))
					};
					assert_eq!(ph.delete_min(), expected);
				},
				3 => if !handles.is_empty() {
					let handle = handles[rng.gen_range(0, handles.len())];
					let n = rng.gen_range(-50, 50);
					if let Some(&old) = ph.get(handle) {
						let pos = reference.iter().position(|&r| r == old).expect("stored");
						reference[pos] = n;
						assert_eq!(ph.adjust(handle, n), Some(handle));
					}
				},
				_ => if !handles.is_empty() {
					let handle = handles.swap_remove(rng.gen_range(0, handles.len()));
					if let Some(n) = ph.delete(handle) {
						let pos = reference.iter().position(|&r| r == n).expect("stored");
						reference.swap_remove(pos);
					}
				}
			}
			assert_invariants(&ph);
			assert_eq!(ph.find_min(), reference.iter().min());
		}
	}
}
