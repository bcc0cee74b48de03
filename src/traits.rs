use core::ptr::NonNull;

/// A trait for a forward link in a linked list.
///
/// Implemented by node types; the pointers target the node type itself, so no
/// casting between link and node addresses is ever required.
pub trait Link: Sized {
    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<Self>>;

    /// Set the next pointer in the linked list
    fn set_next(&mut self, next: Option<NonNull<Self>>);

    /// Reset every link field to `None`, marking the node as detached
    fn unlink(&mut self);

    /// Check whether any link field is set.
    ///
    /// This is an advisory check only: the tail of a non-circular singly
    /// linked list (and the sole element of any non-circular list) has no
    /// set link field and reports `false` while still being a member.
    /// List operations are the ground truth for membership.
    fn is_linked(&self) -> bool;
}

/// A trait for a link with a previous pointer.
pub trait LinkWithPrev: Link {
    /// Get the previous pointer in the linked list
    fn prev(&self) -> Option<NonNull<Self>>;

    /// Set the previous pointer in the linked list
    fn set_prev(&mut self, prev: Option<NonNull<Self>>);
}

/// A trait for a node carrying a payload pointer.
///
/// The payload is owned by the caller; a node only records its address.
pub trait Node: Link {
    /// The type of the payload the node wraps.
    type Data;

    /// Get the address of the payload
    fn data_ptr(&self) -> NonNull<Self::Data>;
}

/// The operations common to every list variant.
///
/// Variant-specific operations (push/pop, ordered insert, ring access) are
/// inherent methods on the concrete list types.
pub trait List {
    /// The node type stored in the list.
    type Node: Node;

    /// Check if the list is empty
    fn is_empty(&self) -> bool;

    /// Count the nodes in the list.
    ///
    /// There is no cached counter; this walks the list in *O*(*n*).
    fn len(&self) -> usize;

    /// Check whether the list contains a node wrapping the given payload.
    ///
    /// Matches by payload address, not by value; *O*(*n*).
    fn contains(&self, data: &<Self::Node as Node>::Data) -> bool;

    /// Remove all nodes from the list, returning how many were removed.
    ///
    /// Every removed node is left fully unlinked.
    fn clear(&mut self) -> usize;

    /// Remove the node wrapping the given payload.
    ///
    /// Matches by payload address; returns the detached node, or `None` if no
    /// node in the list wraps the payload. *O*(*n*).
    fn remove(&mut self, data: &<Self::Node as Node>::Data) -> Option<NonNull<Self::Node>>;
}
