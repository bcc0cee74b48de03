//! # Intrusive Linked Lists
//!
//! This crate provides intrusive linked lists over caller-owned payloads.
//!
//! Every list is allocation-free: the caller owns both the payloads and the
//! nodes wrapping them, and a list only threads pointers through nodes it is
//! handed.
//!
//! ## Core Components
//!
//! - [`traits`]: The core traits, such as `List`, `Link`, and `Node`.
//! - [`single::SingleLink`] and [`double::DoubleLink`]: Link types for singly and doubly linked nodes.
//! - [`single::SingleNode`] and [`double::DoubleNode`]: Nodes wrapping a caller-owned payload.
//! - [`cursor::Cursor`]: A copyable position in a list, with peeking in both directions.
//! - [`plain::SingleList`] and [`plain::DoubleList`]: Insertion-order lists with push/pop at both ends.
//! - [`ordered::SingleOrderedList`] and [`ordered::DoubleOrderedList`]: Lists sorted under a comparator.
//! - [`ring::SingleRing`] and [`ring::DoubleRing`]: Circular lists tracking the latest and eldest insertions.
//!
//! ## Safety
//!
//! This implementation uses `unsafe` code extensively to manage raw pointers.
//! The user of this crate is responsible for upholding several invariants:
//!
//! - Nodes and their payloads must outlive the list they are in, and must not
//!   move while attached.
//! - A node must not be in two lists at the same time.
//! - When iterating, the list must not be modified.
//!
//! ## Example
//!
//! ```
//! use core::ptr::NonNull;
//! use dlists::{List, SingleList, SingleNode};
//!
//! let (a, b) = (1u32, 2u32);
//! let mut node_a = SingleNode::new(&a);
//! let mut node_b = SingleNode::new(&b);
//!
//! let mut list = SingleList::new();
//! list.push_back(NonNull::from(&mut node_a));
//! list.push_back(NonNull::from(&mut node_b));
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.front().data(), Some(&1));
//! assert!(list.contains(&b));
//!
//! list.clear();
//! ```

#![no_std]

pub mod traits;
pub mod single;
pub mod double;
pub mod cursor;
pub mod plain;
pub mod ordered;
pub mod ring;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, Iter};
pub use double::{DoubleLink, DoubleNode};
pub use ordered::{Compare, DoubleOrderedList, SingleOrderedList, default_cmp};
pub use plain::{DoubleList, SingleList};
pub use ring::{DoubleRing, RingIter, SingleRing};
pub use single::{SingleLink, SingleNode};
pub use traits::{Link, LinkWithPrev, List, Node};

// The derive macro shares its name with the trait it implements; the two
// live in different namespaces.
pub use dlists_derive::Node;
