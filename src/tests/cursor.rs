use core::ptr::NonNull;

use crate::cursor::Cursor;
use crate::plain::{DoubleList, SingleList};
use crate::double::DoubleNode;
use crate::single::SingleNode;
use crate::traits::List;

#[test]
fn null_cursor_is_inert() {
    let mut cursor: Cursor<SingleNode<u32>> = Cursor::null();

    assert!(!cursor.valid());
    assert_eq!(cursor.data(), None);
    assert_eq!(cursor.peek(0), None);

    cursor.advance();
    assert!(!cursor.valid());
}

#[test]
fn empty_list_hands_out_null_cursors() {
    let list: SingleList<u32> = SingleList::new();

    assert!(!list.front().valid());
    assert!(!list.back().valid());
    assert_eq!(list.front(), Cursor::null());
}

#[test]
fn advance_walks_front_to_back() {
    let values = [10u32, 20, 30];
    let mut nodes = [
        SingleNode::new(&values[0]),
        SingleNode::new(&values[1]),
        SingleNode::new(&values[2]),
    ];

    let mut list = SingleList::new();
    for node in nodes.iter_mut() {
        list.push_back(NonNull::from(node));
    }

    let mut cursor = list.front();
    assert_eq!(cursor.data(), Some(&10));
    cursor.advance();
    assert_eq!(cursor.data(), Some(&20));
    cursor.advance();
    assert_eq!(cursor.data(), Some(&30));
    cursor.advance();
    assert!(!cursor.valid());

    // Advancing past the end stays null.
    cursor.advance();
    assert!(!cursor.valid());

    list.clear();
}

#[test]
fn peek_looks_ahead_without_moving() {
    let values = [1u32, 2, 3];
    let mut node_a = SingleNode::new(&values[0]);
    let mut node_b = SingleNode::new(&values[1]);
    let mut node_c = SingleNode::new(&values[2]);

    let mut list = SingleList::new();
    list.push_back(NonNull::from(&mut node_a));
    list.push_back(NonNull::from(&mut node_b));
    list.push_back(NonNull::from(&mut node_c));

    let cursor = list.front();
    assert_eq!(cursor.peek(0), Some(&1));
    assert_eq!(cursor.peek(1), Some(&2));
    assert_eq!(cursor.peek(2), Some(&3));
    assert_eq!(cursor.peek(3), None);
    assert_eq!(cursor.peek(100), None);

    // The cursor itself has not moved.
    assert_eq!(cursor.data(), Some(&1));

    list.clear();
}

#[test]
fn retreat_and_peek_back_walk_backwards() {
    let values = [1u32, 2, 3];
    let mut node_a = DoubleNode::new(&values[0]);
    let mut node_b = DoubleNode::new(&values[1]);
    let mut node_c = DoubleNode::new(&values[2]);

    let mut list = DoubleList::new();
    list.push_back(NonNull::from(&mut node_a));
    list.push_back(NonNull::from(&mut node_b));
    list.push_back(NonNull::from(&mut node_c));

    let mut cursor = list.back();
    assert_eq!(cursor.data(), Some(&3));
    assert_eq!(cursor.peek_back(1), Some(&2));
    assert_eq!(cursor.peek_back(2), Some(&1));
    assert_eq!(cursor.peek_back(3), None);

    cursor.retreat();
    assert_eq!(cursor.data(), Some(&2));
    cursor.retreat();
    cursor.retreat();
    assert!(!cursor.valid());

    list.clear();
}

#[test]
fn cursors_compare_by_denoted_node() {
    let value = 5u32;
    let mut node = SingleNode::new(&value);

    let mut list = SingleList::new();
    list.push_back(NonNull::from(&mut node));

    let a = list.front();
    let b = list.front();
    assert_eq!(a, b);
    assert_eq!(a.item(), Some(NonNull::from(&mut node)));

    let mut c = b;
    c.advance();
    assert_ne!(a, c);
    assert_eq!(c, Cursor::null());

    list.clear();
}
