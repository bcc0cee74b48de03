use core::ptr::NonNull;

use crate::cursor::{Cursor, Iter};
use crate::double::DoubleNode;
use crate::single::SingleNode;
use crate::traits::{Link, LinkWithPrev, List};

/// A singly linked list keeping nodes in insertion order.
///
/// Both ends are tracked, so pushing at either end is *O*(1); popping at the
/// back is *O*(*n*) because singly linked nodes carry no back pointer.
#[derive(Debug)]
pub struct SingleList<T> {
    first: Option<NonNull<SingleNode<T>>>,
    last: Option<NonNull<SingleNode<T>>>,
}

impl<T> SingleList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        Self {
            first: None,
            last: None,
        }
    }

    /// Returns a cursor denoting the first node.
    pub fn front(&self) -> Cursor<SingleNode<T>> {
        Cursor::of(self.first)
    }

    /// Returns a cursor denoting the last node.
    pub fn back(&self) -> Cursor<SingleNode<T>> {
        Cursor::of(self.last)
    }

    /// Prepends a detached node to the front of the list.
    ///
    /// The node must not currently be attached to any list, and must stay at
    /// its address for as long as it is attached.
    pub fn push_front(&mut self, mut node: NonNull<SingleNode<T>>) {
        let node_ref = unsafe { node.as_mut() };
        debug_assert!(!node_ref.is_linked(), "node is already attached to a list");

        node_ref.set_next(self.first);
        if self.last.is_none() {
            self.last = Some(node);
        }
        self.first = Some(node);
    }

    /// Appends a detached node to the back of the list.
    ///
    /// Same contract as [`SingleList::push_front`].
    pub fn push_back(&mut self, mut node: NonNull<SingleNode<T>>) {
        let node_ref = unsafe { node.as_mut() };
        debug_assert!(!node_ref.is_linked(), "node is already attached to a list");

        node_ref.set_next(None);
        match self.last {
            Some(mut last) => unsafe { last.as_mut().set_next(Some(node)) },
            None => self.first = Some(node),
        }
        self.last = Some(node);
    }

    /// Removes the first node, or returns `None` if the list is empty.
    ///
    /// The returned node is fully unlinked. *O*(1).
    pub fn pop_front(&mut self) -> Option<NonNull<SingleNode<T>>> {
        let mut head = self.first?;
        let head_ref = unsafe { head.as_mut() };

        self.first = head_ref.next();
        if self.first.is_none() {
            self.last = None;
        }
        head_ref.unlink();
        Some(head)
    }

    /// Removes the last node, or returns `None` if the list is empty.
    ///
    /// *O*(*n*): the predecessor of the last node has to be found by walking
    /// from the front.
    pub fn pop_back(&mut self) -> Option<NonNull<SingleNode<T>>> {
        let mut tail = self.last?;
        let first = self.first?;

        if first == tail {
            self.first = None;
            self.last = None;
        } else {
            let mut pred = first;
            while let Some(next) = unsafe { pred.as_ref().next() } {
                if next == tail {
                    break;
                }
                pred = next;
            }
            unsafe { pred.as_mut().set_next(None) };
            self.last = Some(pred);
        }

        unsafe { tail.as_mut().unlink() };
        Some(tail)
    }

    /// Returns an iterator over the nodes, front to back.
    ///
    /// # Safety
    ///
    /// The list must not be modified while the iterator is alive.
    pub unsafe fn iter(&self) -> Iter<'_, SingleNode<T>> {
        Iter::new(self.first)
    }
}

impl<T> List for SingleList<T> {
    type Node = SingleNode<T>;

    fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    fn len(&self) -> usize {
        unsafe { self.iter() }.count()
    }

    fn contains(&self, data: &T) -> bool {
        unsafe { self.iter() }.any(|node| unsafe { node.as_ref() }.wraps(data))
    }

    fn clear(&mut self) -> usize {
        let mut removed = 0;
        while self.pop_front().is_some() {
            removed += 1;
        }
        removed
    }

    fn remove(&mut self, data: &T) -> Option<NonNull<SingleNode<T>>> {
        let mut pred: Option<NonNull<SingleNode<T>>> = None;
        let mut current = self.first;

        while let Some(mut node) = current {
            let node_ref = unsafe { node.as_mut() };
            if node_ref.wraps(data) {
                let next = node_ref.next();
                match pred {
                    Some(mut pred) => unsafe { pred.as_mut().set_next(next) },
                    None => self.first = next,
                }
                if self.last == Some(node) {
                    self.last = pred;
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

impl<T> Default for SingleList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A doubly linked list keeping nodes in insertion order.
///
/// All push/pop operations at either end are *O*(1).
#[derive(Debug)]
pub struct DoubleList<T> {
    first: Option<NonNull<DoubleNode<T>>>,
    last: Option<NonNull<DoubleNode<T>>>,
}

impl<T> DoubleList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        Self {
            first: None,
            last: None,
        }
    }

    /// Returns a cursor denoting the first node.
    pub fn front(&self) -> Cursor<DoubleNode<T>> {
        Cursor::of(self.first)
    }

    /// Returns a cursor denoting the last node.
    pub fn back(&self) -> Cursor<DoubleNode<T>> {
        Cursor::of(self.last)
    }

    /// Prepends a detached node to the front of the list.
    ///
    /// The node must not currently be attached to any list, and must stay at
    /// its address for as long as it is attached.
    pub fn push_front(&mut self, mut node: NonNull<DoubleNode<T>>) {
        let node_ref = unsafe { node.as_mut() };
        debug_assert!(!node_ref.is_linked(), "node is already attached to a list");

        node_ref.set_prev(None);
        node_ref.set_next(self.first);
        match self.first {
            Some(mut first) => unsafe { first.as_mut().set_prev(Some(node)) },
            None => self.last = Some(node),
        }
        self.first = Some(node);
    }

    /// Appends a detached node to the back of the list.
    ///
    /// Same contract as [`DoubleList::push_front`].
    pub fn push_back(&mut self, mut node: NonNull<DoubleNode<T>>) {
        let node_ref = unsafe { node.as_mut() };
        debug_assert!(!node_ref.is_linked(), "node is already attached to a list");

        node_ref.set_next(None);
        node_ref.set_prev(self.last);
        match self.last {
            Some(mut last) => unsafe { last.as_mut().set_next(Some(node)) },
            None => self.first = Some(node),
        }
        self.last = Some(node);
    }

    /// Removes the first node, or returns `None` if the list is empty. *O*(1).
    pub fn pop_front(&mut self) -> Option<NonNull<DoubleNode<T>>> {
        let mut head = self.first?;
        let head_ref = unsafe { head.as_mut() };

        self.first = head_ref.next();
        match self.first {
            Some(mut first) => unsafe { first.as_mut().set_prev(None) },
            None => self.last = None,
        }
        head_ref.unlink();
        Some(head)
    }

    /// Removes the last node, or returns `None` if the list is empty. *O*(1).
    pub fn pop_back(&mut self) -> Option<NonNull<DoubleNode<T>>> {
        let mut tail = self.last?;
        let tail_ref = unsafe { tail.as_mut() };

        self.last = tail_ref.prev();
        match self.last {
            Some(mut last) => unsafe { last.as_mut().set_next(None) },
            None => self.first = None,
        }
        tail_ref.unlink();
        Some(tail)
    }

    /// Returns an iterator over the nodes, front to back.
    ///
    /// # Safety
    ///
    /// The list must not be modified while the iterator is alive.
    pub unsafe fn iter(&self) -> Iter<'_, DoubleNode<T>> {
        Iter::new(self.first)
    }
}

impl<T> List for DoubleList<T> {
    type Node = DoubleNode<T>;

    fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    fn len(&self) -> usize {
        unsafe { self.iter() }.count()
    }

    fn contains(&self, data: &T) -> bool {
        unsafe { self.iter() }.any(|node| unsafe { node.as_ref() }.wraps(data))
    }

    fn clear(&mut self) -> usize {
        let mut removed = 0;
        while self.pop_front().is_some() {
            removed += 1;
        }
        removed
    }

    fn remove(&mut self, data: &T) -> Option<NonNull<DoubleNode<T>>> {
        let mut current = self.first;

        while let Some(mut node) = current {
            let node_ref = unsafe { node.as_mut() };
            if node_ref.wraps(data) {
                let next = node_ref.next();
                let prev = node_ref.prev();
                match prev {
                    Some(mut prev) => unsafe { prev.as_mut().set_next(next) },
                    None => self.first = next,
                }
                match next {
                    Some(mut next) => unsafe { next.as_mut().set_prev(prev) },
                    None => self.last = prev,
                }
                node_ref.unlink();
                return Some(node);
            }
            current = node_ref.next();
        }
        None
    }
}

impl<T> Default for DoubleList<T> {
    fn default() -> Self {
        Self::new()
    }
}
