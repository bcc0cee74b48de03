use core::ptr::NonNull;

use crate::cursor::{Cursor, Iter};
use crate::double::DoubleNode;
use crate::single::SingleNode;
use crate::traits::{Link, LinkWithPrev, List, Node};

/// An ordering predicate: returns `true` if the first payload belongs
/// strictly before the second.
pub type Compare<T> = fn(&T, &T) -> bool;

/// The default ordering predicate: `<` via [`PartialOrd`].
pub fn default_cmp<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

/// A singly linked list keeping nodes sorted under a comparator.
///
/// Insertion is *O*(*n*); the minimum is available in *O*(1). Equal-ranked
/// nodes keep their insertion order: a new node is placed after every node it
/// is not strictly before.
#[derive(Debug)]
pub struct SingleOrderedList<T> {
    min: Option<NonNull<SingleNode<T>>>,
    max: Option<NonNull<SingleNode<T>>>,
    cmp: Compare<T>,
}

impl<T: PartialOrd> SingleOrderedList<T> {
    /// Creates a new, empty list ordered by `<`.
    pub const fn new() -> Self {
        Self::with_cmp(default_cmp::<T>)
    }
}

impl<T> SingleOrderedList<T> {
    /// Creates a new, empty list with the given ordering predicate.
    pub const fn with_cmp(cmp: Compare<T>) -> Self {
        Self {
            min: None,
            max: None,
            cmp,
        }
    }

    /// Returns a cursor denoting the minimum node.
    pub fn min(&self) -> Cursor<SingleNode<T>> {
        Cursor::of(self.min)
    }

    /// Returns a cursor denoting the maximum node.
    pub fn max(&self) -> Cursor<SingleNode<T>> {
        Cursor::of(self.max)
    }

    /// Inserts a detached node at its ordered position.
    ///
    /// The node must not currently be attached to any list, and must stay at
    /// its address for as long as it is attached. *O*(*n*).
    pub fn insert(&mut self, mut node: NonNull<SingleNode<T>>) {
        let node_ref = unsafe { node.as_mut() };
        debug_assert!(!node_ref.is_linked(), "node is already attached to a list");

        node_ref.set_next(None);
        let data = unsafe { node_ref.data_ptr().as_ref() };

        let Some(min) = self.min else {
            self.min = Some(node);
            self.max = Some(node);
            return;
        };

        // New minimum: strictly before the current head.
        if (self.cmp)(data, unsafe { min.as_ref().data() }) {
            node_ref.set_next(Some(min));
            self.min = Some(node);
            return;
        }

        // Walk past every node the new one is not strictly before, then
        // splice. Ties end up after all existing equal-ranked nodes.
        let mut pred = min;
        loop {
            match unsafe { pred.as_ref().next() } {
                Some(next) if !(self.cmp)(data, unsafe { next.as_ref().data() }) => pred = next,
                next => {
                    node_ref.set_next(next);
                    unsafe { pred.as_mut().set_next(Some(node)) };
                    if next.is_none() {
                        self.max = Some(node);
                    }
                    return;
                }
            }
        }
    }

    /// Removes the minimum node, or returns `None` if the list is empty.
    /// *O*(1).
    pub fn remove_min(&mut self) -> Option<NonNull<SingleNode<T>>> {
        let mut min = self.min?;
        let min_ref = unsafe { min.as_mut() };

        self.min = min_ref.next();
        if self.min.is_none() {
            self.max = None;
        }
        min_ref.unlink();
        Some(min)
    }

    /// Removes the maximum node, or returns `None` if the list is empty.
    ///
    /// *O*(*n*): the predecessor of the maximum has to be found by walking
    /// from the minimum.
    pub fn remove_max(&mut self) -> Option<NonNull<SingleNode<T>>> {
        let mut max = self.max?;
        let min = self.min?;

        if min == max {
            self.min = None;
            self.max = None;
        } else {
            let mut pred = min;
            while let Some(next) = unsafe { pred.as_ref().next() } {
                if next == max {
                    break;
                }
                pred = next;
            }
            unsafe { pred.as_mut().set_next(None) };
            self.max = Some(pred);
        }

        unsafe { max.as_mut().unlink() };
        Some(max)
    }

    /// Re-establishes the ordering invariant after payloads have been
    /// mutated behind the list's back.
    ///
    /// Detaches every node and reinserts it in traversal order; *O*(*n*²)
    /// worst case.
    pub fn sort(&mut self) {
        let mut walk = self.min.take();
        self.max = None;

        while let Some(mut node) = walk {
            let node_ref = unsafe { node.as_mut() };
            walk = node_ref.next();
            node_ref.unlink();
            self.insert(node);
        }
    }

    /// Returns an iterator over the nodes, minimum to maximum.
    ///
    /// # Safety
    ///
    /// The list must not be modified while the iterator is alive.
    pub unsafe fn iter(&self) -> Iter<'_, SingleNode<T>> {
        Iter::new(self.min)
    }
}

impl<T> List for SingleOrderedList<T> {
    type Node = SingleNode<T>;

    fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    fn len(&self) -> usize {
        unsafe { self.iter() }.count()
    }

    fn contains(&self, data: &T) -> bool {
        unsafe { self.iter() }.any(|node| unsafe { node.as_ref() }.wraps(data))
    }

    fn clear(&mut self) -> usize {
        let mut removed = 0;
        while self.remove_min().is_some() {
            removed += 1;
        }
        removed
    }

    fn remove(&mut self, data: &T) -> Option<NonNull<SingleNode<T>>> {
        let mut pred: Option<NonNull<SingleNode<T>>> = None;
        let mut current = self.min;

        while let Some(mut node) = current {
            let node_ref = unsafe { node.as_mut() };
            if node_ref.wraps(data) {
                let next = node_ref.next();
                match pred {
                    Some(mut pred) => unsafe { pred.as_mut().set_next(next) },
                    None => self.min = next,
                }
                if self.max == Some(node) {
                    self.max = pred;
                }
                node_ref.unlink();
                return Some(node);
            }
            pred = current;
            current = node_ref.next();
        }
        None
    }
}

impl<T: PartialOrd> Default for SingleOrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A doubly linked list keeping nodes sorted under a comparator.
///
/// Like [`SingleOrderedList`], but removal at either extreme is *O*(1).
#[derive(Debug)]
pub struct DoubleOrderedList<T> {
    min: Option<NonNull<DoubleNode<T>>>,
    max: Option<NonNull<DoubleNode<T>>>,
    cmp: Compare<T>,
}

impl<T: PartialOrd> DoubleOrderedList<T> {
    /// Creates a new, empty list ordered by `<`.
    pub const fn new() -> Self {
        Self::with_cmp(default_cmp::<T>)
    }
}

impl<T> DoubleOrderedList<T> {
    /// Creates a new, empty list with the given ordering predicate.
    pub const fn with_cmp(cmp: Compare<T>) -> Self {
        Self {
            min: None,
            max: None,
            cmp,
        }
    }

    /// Returns a cursor denoting the minimum node.
    pub fn min(&self) -> Cursor<DoubleNode<T>> {
        Cursor::of(self.min)
    }

    /// Returns a cursor denoting the maximum node.
    pub fn max(&self) -> Cursor<DoubleNode<T>> {
        Cursor::of(self.max)
    }

    /// Inserts a detached node at its ordered position.
    ///
    /// Same contract and tie behavior as [`SingleOrderedList::insert`].
    pub fn insert(&mut self, mut node: NonNull<DoubleNode<T>>) {
        let node_ref = unsafe { node.as_mut() };
        debug_assert!(!node_ref.is_linked(), "node is already attached to a list");

        node_ref.set_next(None);
        node_ref.set_prev(None);
        let data = unsafe { node_ref.data_ptr().as_ref() };

        let Some(mut min) = self.min else {
            self.min = Some(node);
            self.max = Some(node);
            return;
        };

        // New minimum: strictly before the current head.
        if (self.cmp)(data, unsafe { min.as_ref().data() }) {
            node_ref.set_next(Some(min));
            unsafe { min.as_mut().set_prev(Some(node)) };
            self.min = Some(node);
            return;
        }

        // Walk past every node the new one is not strictly before, then
        // splice. Ties end up after all existing equal-ranked nodes.
        let mut pred = min;
        loop {
            match unsafe { pred.as_ref().next() } {
                Some(next) if !(self.cmp)(data, unsafe { next.as_ref().data() }) => pred = next,
                next => {
                    node_ref.set_next(next);
                    node_ref.set_prev(Some(pred));
                    unsafe { pred.as_mut().set_next(Some(node)) };
                    match next {
                        Some(mut next) => unsafe { next.as_mut().set_prev(Some(node)) },
                        None => self.max = Some(node),
                    }
                    return;
                }
            }
        }
    }

    /// Removes the minimum node, or returns `None` if the list is empty.
    /// *O*(1).
    pub fn remove_min(&mut self) -> Option<NonNull<DoubleNode<T>>> {
        let mut min = self.min?;
        let min_ref = unsafe { min.as_mut() };

        self.min = min_ref.next();
        match self.min {
            Some(mut first) => unsafe { first.as_mut().set_prev(None) },
            None => self.max = None,
        }
        min_ref.unlink();
        Some(min)
    }

    /// Removes the maximum node, or returns `None` if the list is empty.
    /// *O*(1).
    pub fn remove_max(&mut self) -> Option<NonNull<DoubleNode<T>>> {
        let mut max = self.max?;
        let max_ref = unsafe { max.as_mut() };

        self.max = max_ref.prev();
        match self.max {
            Some(mut last) => unsafe { last.as_mut().set_next(None) },
            None => self.min = None,
        }
        max_ref.unlink();
        Some(max)
    }

    /// Re-establishes the ordering invariant after payloads have been
    /// mutated behind the list's back.
    ///
    /// Detaches every node and reinserts it in traversal order; *O*(*n*²)
    /// worst case.
    pub fn sort(&mut self) {
        let mut walk = self.min.take();
        self.max = None;

        while let Some(mut node) = walk {
            let node_ref = unsafe { node.as_mut() };
            walk = node_ref.next();
            node_ref.unlink();
            self.insert(node);
        }
    }

    /// Returns an iterator over the nodes, minimum to maximum.
    ///
    /// # Safety
    ///
    /// The list must not be modified while the iterator is alive.
    pub unsafe fn iter(&self) -> Iter<'_, DoubleNode<T>> {
        Iter::new(self.min)
    }
}

impl<T> List for DoubleOrderedList<T> {
    type Node = DoubleNode<T>;

    fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    fn len(&self) -> usize {
        unsafe { self.iter() }.count()
    }

    fn contains(&self, data: &T) -> bool {
        unsafe { self.iter() }.any(|node| unsafe { node.as_ref() }.wraps(data))
    }

    fn clear(&mut self) -> usize {
        let mut removed = 0;
        while self.remove_min().is_some() {
            removed += 1;
        }
        removed
    }

    fn remove(&mut self, data: &T) -> Option<NonNull<DoubleNode<T>>> {
        let mut current = self.min;

        while let Some(mut node) = current {
            let node_ref = unsafe { node.as_mut() };
            if node_ref.wraps(data) {
                let next = node_ref.next();
                let prev = node_ref.prev();
                match prev {
                    Some(mut prev) => unsafe { prev.as_mut().set_next(next) },
                    None => self.min = next,
                }
                match next {
                    Some(mut next) => unsafe { next.as_mut().set_prev(prev) },
                    None => self.max = prev,
                }
                node_ref.unlink();
                return Some(node);
            }
            current = node_ref.next();
        }
        None
    }
}

impl<T: PartialOrd> Default for DoubleOrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}
