use core::fmt;
use core::ptr::NonNull;

use dlists_derive::Node;

/// A link in a doubly linked list.
///
/// `N` is the node type the link is embedded in.
#[derive(Debug)]
pub struct DoubleLink<N> {
    next: Option<NonNull<N>>,
    prev: Option<NonNull<N>>,
}

impl<N> DoubleLink<N> {
    pub const fn new() -> Self {
        Self {
            next: None,
            prev: None,
        }
    }

    #[inline]
    pub fn next(&self) -> Option<NonNull<N>> {
        self.next
    }

    #[inline]
    pub fn set_next(&mut self, next: Option<NonNull<N>>) {
        self.next = next;
    }

    #[inline]
    pub fn prev(&self) -> Option<NonNull<N>> {
        self.prev
    }

    #[inline]
    pub fn set_prev(&mut self, prev: Option<NonNull<N>>) {
        self.prev = prev;
    }

    #[inline]
    pub fn unlink(&mut self) {
        self.next = None;
        self.prev = None;
    }

    #[inline]
    pub fn is_linked(&self) -> bool {
        self.next.is_some() || self.prev.is_some()
    }
}

impl<N> Default for DoubleLink<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// A node in a doubly linked list, wrapping a caller-owned payload.
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct DoubleNode<T> {
    link: DoubleLink<DoubleNode<T>>,
    data: NonNull<T>,
}

impl<T> DoubleNode<T> {
    /// Creates a detached node wrapping the given payload.
    ///
    /// The node records only the payload's address; the caller must keep the
    /// payload alive (and at the same address) for the node's lifetime.
    pub fn new(data: &T) -> Self {
        Self {
            link: DoubleLink::new(),
            data: NonNull::from(data),
        }
    }

    /// Returns a reference to the wrapped payload.
    #[inline]
    pub fn data(&self) -> &T {
        unsafe { self.data.as_ref() }
    }

    /// Checks whether this node wraps the given payload object.
    #[inline]
    pub fn wraps(&self, data: &T) -> bool {
        core::ptr::eq(self.data.as_ptr(), data)
    }

    /// Checks whether two nodes are identical: same payload address and equal
    /// link state.
    pub fn identical(a: &Self, b: &Self) -> bool {
        a.data == b.data && a.link.next() == b.link.next() && a.link.prev() == b.link.prev()
    }
}

impl<T> PartialEq for DoubleNode<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::identical(self, other)
    }
}

impl<T> fmt::Debug for DoubleNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleNode")
            .field("link", &self.link)
            .field("data", &self.data)
            .finish()
    }
}
