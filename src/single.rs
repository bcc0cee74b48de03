use core::fmt;
use core::ptr::NonNull;

use dlists_derive::Node;

/// A link in a singly linked list.
///
/// `N` is the node type the link is embedded in.
#[derive(Debug)]
pub struct SingleLink<N> {
    next: Option<NonNull<N>>,
}

impl<N> SingleLink<N> {
    pub const fn new() -> Self {
        Self { next: None }
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
    pub fn unlink(&mut self) {
        self.next = None;
    }

    #[inline]
    pub fn is_linked(&self) -> bool {
        self.next.is_some()
    }
}

impl<N> Default for SingleLink<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// A node in a singly linked list, wrapping a caller-owned payload.
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct SingleNode<T> {
    link: SingleLink<SingleNode<T>>,
    data: NonNull<T>,
}

impl<T> SingleNode<T> {
    /// Creates a detached node wrapping the given payload.
    ///
    /// The node records only the payload's address; the caller must keep the
    /// payload alive (and at the same address) for the node's lifetime.
    pub fn new(data: &T) -> Self {
        Self {
            link: SingleLink::new(),
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
        a.data == b.data && a.link.next() == b.link.next()
    }
}

impl<T> PartialEq for SingleNode<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::identical(self, other)
    }
}

impl<T> fmt::Debug for SingleNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleNode")
            .field("link", &self.link)
            .field("data", &self.data)
            .finish()
    }
}
