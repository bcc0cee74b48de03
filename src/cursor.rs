use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::traits::{Link, LinkWithPrev, Node};

/// A copyable cursor denoting a position in a list, or nothing at all.
///
/// Cursors are plain values: copying one copies a pointer, and a cursor never
/// keeps the node it denotes alive. A cursor captured before a list mutation
/// may afterwards denote a detached or destroyed node; keeping it valid is
/// the caller's responsibility.
pub struct Cursor<N> {
    item: Option<NonNull<N>>,
}

impl<N> Cursor<N> {
    /// A cursor denoting nothing.
    pub const fn null() -> Self {
        Self { item: None }
    }

    pub(crate) fn of(item: Option<NonNull<N>>) -> Self {
        Self { item }
    }

    /// Returns `true` if the cursor currently denotes a node.
    #[inline]
    pub fn valid(&self) -> bool {
        self.item.is_some()
    }

    /// Returns the denoted node, if any.
    #[inline]
    pub fn item(&self) -> Option<NonNull<N>> {
        self.item
    }
}

impl<N: Link> Cursor<N> {
    /// Steps the cursor to the next node.
    ///
    /// The cursor becomes null at the end of a non-circular list; stepping a
    /// null cursor is a no-op.
    pub fn advance(&mut self) {
        if let Some(item) = self.item {
            self.item = unsafe { item.as_ref().next() };
        }
    }
}

impl<N: LinkWithPrev> Cursor<N> {
    /// Steps the cursor to the previous node.
    ///
    /// The cursor becomes null at the front of a non-circular list; stepping
    /// a null cursor is a no-op.
    pub fn retreat(&mut self) {
        if let Some(item) = self.item {
            self.item = unsafe { item.as_ref().prev() };
        }
    }
}

impl<N: Node> Cursor<N> {
    /// Returns the payload of the denoted node, or `None` for a null cursor.
    pub fn data(&self) -> Option<&N::Data> {
        self.item
            .map(|item| unsafe { item.as_ref().data_ptr().as_ref() })
    }

    /// Peeks `n` forward steps from the current position without moving.
    ///
    /// `peek(0)` is the payload of the denoted node. Returns `None` as soon
    /// as the walk runs off the end of the list (a circular list never runs
    /// off, it wraps).
    pub fn peek(&self, n: usize) -> Option<&N::Data> {
        let mut walk = *self;
        for _ in 0..n {
            walk.item = unsafe { walk.item?.as_ref().next() };
        }
        walk.item
            .map(|item| unsafe { item.as_ref().data_ptr().as_ref() })
    }
}

impl<N: LinkWithPrev + Node> Cursor<N> {
    /// Peeks `n` backward steps from the current position without moving.
    ///
    /// The backward analog of [`Cursor::peek`].
    pub fn peek_back(&self, n: usize) -> Option<&N::Data> {
        let mut walk = *self;
        for _ in 0..n {
            walk.item = unsafe { walk.item?.as_ref().prev() };
        }
        walk.item
            .map(|item| unsafe { item.as_ref().data_ptr().as_ref() })
    }
}

impl<N> Clone for Cursor<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Cursor<N> {}

impl<N> Default for Cursor<N> {
    fn default() -> Self {
        Self::null()
    }
}

impl<N> PartialEq for Cursor<N> {
    /// Two cursors are equal iff they denote the same node address, or both
    /// denote nothing.
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

impl<N> Eq for Cursor<N> {}

impl<N> fmt::Debug for Cursor<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.item).finish()
    }
}

/// An iterator over a non-circular list, yielding node pointers front to
/// back.
pub struct Iter<'a, N> {
    current: Option<NonNull<N>>,
    _list: PhantomData<&'a N>,
}

impl<'a, N: Link> Iter<'a, N> {
    pub(crate) fn new(first: Option<NonNull<N>>) -> Self {
        Self {
            current: first,
            _list: PhantomData,
        }
    }
}

impl<'a, N: Link> Iterator for Iter<'a, N> {
    type Item = NonNull<N>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().next() };
        })
    }
}
