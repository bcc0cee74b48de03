use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::cursor::Cursor;
use crate::double::DoubleNode;
use crate::single::SingleNode;
use crate::traits::{Link, LinkWithPrev, List};

/// A singly linked circular list.
///
/// A single cursor tracks the most recently inserted node ("latest"); the
/// oldest node ("eldest") is always the latest node's successor. A ring of
/// one node links to itself.
#[derive(Debug)]
pub struct SingleRing<T> {
    latest: Option<NonNull<SingleNode<T>>>,
}

impl<T> SingleRing<T> {
    /// Creates a new, empty ring.
    pub const fn new() -> Self {
        Self { latest: None }
    }

    /// Returns a cursor denoting the most recently inserted node.
    pub fn latest(&self) -> Cursor<SingleNode<T>> {
        Cursor::of(self.latest)
    }

    /// Returns a cursor denoting the oldest node.
    pub fn eldest(&self) -> Cursor<SingleNode<T>> {
        Cursor::of(self.eldest_ptr())
    }

    fn eldest_ptr(&self) -> Option<NonNull<SingleNode<T>>> {
        self.latest.and_then(|latest| unsafe { latest.as_ref().next() })
    }

    /// Splices a detached node into the ring as the new latest.
    ///
    /// The node must not currently be attached to any list, and must stay at
    /// its address for as long as it is attached. *O*(1).
    pub fn insert(&mut self, mut node: NonNull<SingleNode<T>>) {
        let node_ref = unsafe { node.as_mut() };
        debug_assert!(!node_ref.is_linked(), "node is already attached to a list");

        match self.latest {
            Some(mut latest) => unsafe {
                node_ref.set_next(latest.as_ref().next());
                latest.as_mut().set_next(Some(node));
            },
            None => node_ref.set_next(Some(node)),
        }
        self.latest = Some(node);
    }

    /// Removes the latest node, or returns `None` if the ring is empty.
    ///
    /// The predecessor becomes the new latest. *O*(*n*): the predecessor has
    /// to be found by walking the ring.
    pub fn remove_latest(&mut self) -> Option<NonNull<SingleNode<T>>> {
        let mut latest = self.latest?;

        let mut pred = latest;
        while let Some(next) = unsafe { pred.as_ref().next() } {
            if next == latest {
                break;
            }
            pred = next;
        }

        if pred == latest {
            self.latest = None;
        } else {
            unsafe { pred.as_mut().set_next(latest.as_ref().next()) };
            self.latest = Some(pred);
        }
        unsafe { latest.as_mut().unlink() };
        Some(latest)
    }

    /// Removes the eldest node, or returns `None` if the ring is empty.
    /// *O*(1).
    pub fn remove_eldest(&mut self) -> Option<NonNull<SingleNode<T>>> {
        let mut latest = self.latest?;
        let mut eldest = self.eldest_ptr()?;

        if eldest == latest {
            self.latest = None;
        } else {
            unsafe { latest.as_mut().set_next(eldest.as_ref().next()) };
        }
        unsafe { eldest.as_mut().unlink() };
        Some(eldest)
    }

    /// Returns an iterator over the ring, eldest to latest.
    ///
    /// # Safety
    ///
    /// The ring must not be modified while the iterator is alive.
    pub unsafe fn iter(&self) -> RingIter<'_, SingleNode<T>> {
        RingIter::new(self.eldest_ptr(), self.latest)
    }
}

impl<T> List for SingleRing<T> {
    type Node = SingleNode<T>;

    fn is_empty(&self) -> bool {
        self.latest.is_none()
    }

    fn len(&self) -> usize {
        unsafe { self.iter() }.count()
    }

    fn contains(&self, data: &T) -> bool {
        unsafe { self.iter() }.any(|node| unsafe { node.as_ref() }.wraps(data))
    }

    fn clear(&mut self) -> usize {
        let mut removed = 0;
        while self.remove_eldest().is_some() {
            removed += 1;
        }
        removed
    }

    fn remove(&mut self, data: &T) -> Option<NonNull<SingleNode<T>>> {
        let latest = self.latest?;
        let mut pred = latest;
        let mut current = self.eldest_ptr()?;

        loop {
            let current_ref = unsafe { current.as_mut() };
            if current_ref.wraps(data) {
                if current_ref.next() == Some(current) {
                    // Sole node; the ring collapses.
                    self.latest = None;
                } else {
                    unsafe { pred.as_mut().set_next(current_ref.next()) };
                    if current == latest {
                        self.latest = Some(pred);
                    }
                }
                current_ref.unlink();
                return Some(current);
            }
            if current == latest {
                return None;
            }
            pred = current;
            current = current_ref.next()?;
        }
    }
}

impl<T> Default for SingleRing<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A doubly linked circular list.
///
/// Like [`SingleRing`], but removing the latest node is *O*(1) thanks to the
/// back pointer.
#[derive(Debug)]
pub struct DoubleRing<T> {
    latest: Option<NonNull<DoubleNode<T>>>,
}

impl<T> DoubleRing<T> {
    /// Creates a new, empty ring.
    pub const fn new() -> Self {
        Self { latest: None }
    }

    /// Returns a cursor denoting the most recently inserted node.
    pub fn latest(&self) -> Cursor<DoubleNode<T>> {
        Cursor::of(self.latest)
    }

    /// Returns a cursor denoting the oldest node.
    pub fn eldest(&self) -> Cursor<DoubleNode<T>> {
        Cursor::of(self.eldest_ptr())
    }

    fn eldest_ptr(&self) -> Option<NonNull<DoubleNode<T>>> {
        self.latest.and_then(|latest| unsafe { latest.as_ref().next() })
    }

    /// Splices a detached node into the ring as the new latest.
    ///
    /// Same contract as [`SingleRing::insert`]. *O*(1).
    pub fn insert(&mut self, mut node: NonNull<DoubleNode<T>>) {
        let node_ref = unsafe { node.as_mut() };
        debug_assert!(!node_ref.is_linked(), "node is already attached to a list");

        match self.latest {
            Some(mut latest) => unsafe {
                let mut eldest = latest.as_ref().next().unwrap_or(latest);
                node_ref.set_next(Some(eldest));
                node_ref.set_prev(Some(latest));
                eldest.as_mut().set_prev(Some(node));
                latest.as_mut().set_next(Some(node));
            },
            None => {
                node_ref.set_next(Some(node));
                node_ref.set_prev(Some(node));
            }
        }
        self.latest = Some(node);
    }

    /// Removes the latest node, or returns `None` if the ring is empty.
    ///
    /// The predecessor becomes the new latest. *O*(1).
    pub fn remove_latest(&mut self) -> Option<NonNull<DoubleNode<T>>> {
        let mut latest = self.latest?;
        let latest_ref = unsafe { latest.as_mut() };

        if latest_ref.next() == Some(latest) {
            self.latest = None;
        } else {
            let next = latest_ref.next();
            let prev = latest_ref.prev();
            if let (Some(mut next), Some(mut prev)) = (next, prev) {
                unsafe {
                    prev.as_mut().set_next(Some(next));
                    next.as_mut().set_prev(Some(prev));
                }
            }
            self.latest = prev;
        }
        latest_ref.unlink();
        Some(latest)
    }

    /// Removes the eldest node, or returns `None` if the ring is empty.
    /// *O*(1).
    pub fn remove_eldest(&mut self) -> Option<NonNull<DoubleNode<T>>> {
        let mut latest = self.latest?;
        let mut eldest = self.eldest_ptr()?;

        if eldest == latest {
            self.latest = None;
        } else {
            unsafe {
                let next = eldest.as_ref().next();
                latest.as_mut().set_next(next);
                if let Some(mut next) = next {
                    next.as_mut().set_prev(Some(latest));
                }
            }
        }
        unsafe { eldest.as_mut().unlink() };
        Some(eldest)
    }

    /// Returns an iterator over the ring, eldest to latest.
    ///
    /// # Safety
    ///
    /// The ring must not be modified while the iterator is alive.
    pub unsafe fn iter(&self) -> RingIter<'_, DoubleNode<T>> {
        RingIter::new(self.eldest_ptr(), self.latest)
    }
}

impl<T> List for DoubleRing<T> {
    type Node = DoubleNode<T>;

    fn is_empty(&self) -> bool {
        self.latest.is_none()
    }

    fn len(&self) -> usize {
        unsafe { self.iter() }.count()
    }

    fn contains(&self, data: &T) -> bool {
        unsafe { self.iter() }.any(|node| unsafe { node.as_ref() }.wraps(data))
    }

    fn clear(&mut self) -> usize {
        let mut removed = 0;
        while self.remove_eldest().is_some() {
            removed += 1;
        }
        removed
    }

    fn remove(&mut self, data: &T) -> Option<NonNull<DoubleNode<T>>> {
        let latest = self.latest?;
        let mut current = self.eldest_ptr()?;

        loop {
            let current_ref = unsafe { current.as_mut() };
            if current_ref.wraps(data) {
                if current_ref.next() == Some(current) {
                    // Sole node; the ring collapses.
                    self.latest = None;
                } else {
                    let next = current_ref.next();
                    let prev = current_ref.prev();
                    if let (Some(mut next), Some(mut prev)) = (next, prev) {
                        unsafe {
                            prev.as_mut().set_next(Some(next));
                            next.as_mut().set_prev(Some(prev));
                        }
                    }
                    if current == latest {
                        self.latest = prev;
                    }
                }
                current_ref.unlink();
                return Some(current);
            }
            if current == latest {
                return None;
            }
            current = current_ref.next()?;
        }
    }
}

impl<T> Default for DoubleRing<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator over a circular list, yielding each node exactly once,
/// eldest to latest.
pub struct RingIter<'a, N> {
    next: Option<NonNull<N>>,
    latest: Option<NonNull<N>>,
    _list: PhantomData<&'a N>,
}

impl<'a, N: Link> RingIter<'a, N> {
    pub(crate) fn new(eldest: Option<NonNull<N>>, latest: Option<NonNull<N>>) -> Self {
        Self {
            next: eldest,
            latest,
            _list: PhantomData,
        }
    }
}

impl<'a, N: Link> Iterator for RingIter<'a, N> {
    type Item = NonNull<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if Some(current) == self.latest {
            self.next = None;
        } else {
            self.next = unsafe { current.as_ref().next() };
        }
        Some(current)
    }
}
