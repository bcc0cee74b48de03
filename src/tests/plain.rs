extern crate std;

use core::ptr::NonNull;

use std::collections::VecDeque;
use std::vec::Vec;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::plain::{DoubleList, SingleList};
use crate::double::DoubleNode;
use crate::single::SingleNode;
use crate::traits::{Link, List};

#[test]
fn push_front_and_back_keep_insertion_order() {
    let values = [1u32, 2, 3];
    let mut node_a = SingleNode::new(&values[0]);
    let mut node_b = SingleNode::new(&values[1]);
    let mut node_c = SingleNode::new(&values[2]);

    let mut list = SingleList::new();
    list.push_back(NonNull::from(&mut node_b));
    list.push_front(NonNull::from(&mut node_a));
    list.push_back(NonNull::from(&mut node_c));

    let collected: Vec<u32> = unsafe { list.iter() }
        .map(|node| *unsafe { node.as_ref() }.data())
        .collect();
    assert_eq!(collected, [1, 2, 3]);

    assert_eq!(list.front().data(), Some(&1));
    assert_eq!(list.back().data(), Some(&3));

    list.clear();
}

#[test]
fn pop_front_returns_detached_nodes() {
    let values = [1u32, 2];
    let mut node_a = SingleNode::new(&values[0]);
    let mut node_b = SingleNode::new(&values[1]);

    let mut list = SingleList::new();
    list.push_back(NonNull::from(&mut node_a));
    list.push_back(NonNull::from(&mut node_b));

    let popped = list.pop_front().unwrap();
    assert_eq!(unsafe { popped.as_ref() }.data(), &1);
    assert!(!unsafe { popped.as_ref() }.is_linked());
    assert_eq!(list.len(), 1);

    let popped = list.pop_front().unwrap();
    assert_eq!(unsafe { popped.as_ref() }.data(), &2);
    assert!(list.is_empty());
    assert!(list.pop_front().is_none());
}

#[test]
fn pop_back_walks_to_the_tail() {
    let values = [1u32, 2, 3];
    let mut node_a = SingleNode::new(&values[0]);
    let mut node_b = SingleNode::new(&values[1]);
    let mut node_c = SingleNode::new(&values[2]);

    let mut list = SingleList::new();
    list.push_back(NonNull::from(&mut node_a));
    list.push_back(NonNull::from(&mut node_b));
    list.push_back(NonNull::from(&mut node_c));

    assert_eq!(unsafe { list.pop_back().unwrap().as_ref() }.data(), &3);
    assert_eq!(list.back().data(), Some(&2));
    assert_eq!(unsafe { list.pop_back().unwrap().as_ref() }.data(), &2);
    assert_eq!(unsafe { list.pop_back().unwrap().as_ref() }.data(), &1);
    assert!(list.pop_back().is_none());
    assert!(!list.front().valid());
}

#[test]
fn remove_matches_by_payload_identity() {
    // Two payloads with equal values; removal must distinguish them.
    let first = 2u32;
    let middle = 1u32;
    let second = 2u32;

    let mut node_a = SingleNode::new(&first);
    let mut node_b = SingleNode::new(&middle);
    let mut node_c = SingleNode::new(&second);

    let mut list = SingleList::new();
    list.push_back(NonNull::from(&mut node_a));
    list.push_back(NonNull::from(&mut node_b));
    list.push_back(NonNull::from(&mut node_c));

    assert!(list.contains(&first));
    assert!(list.contains(&second));

    let removed = list.remove(&second).unwrap();
    assert!(removed == NonNull::from(&mut node_c));
    assert!(!list.contains(&second));
    assert!(list.contains(&first));
    assert_eq!(list.len(), 2);
    assert_eq!(list.back().data(), Some(&1));

    // The detached payload is absent now.
    assert!(list.remove(&second).is_none());

    list.clear();
}

#[test]
fn remove_head_and_tail_fix_both_ends() {
    let values = [1u32, 2, 3];
    let mut node_a = DoubleNode::new(&values[0]);
    let mut node_b = DoubleNode::new(&values[1]);
    let mut node_c = DoubleNode::new(&values[2]);

    let mut list = DoubleList::new();
    list.push_back(NonNull::from(&mut node_a));
    list.push_back(NonNull::from(&mut node_b));
    list.push_back(NonNull::from(&mut node_c));

    list.remove(&values[0]).unwrap();
    assert_eq!(list.front().data(), Some(&2));

    list.remove(&values[2]).unwrap();
    assert_eq!(list.back().data(), Some(&2));
    assert_eq!(list.len(), 1);

    list.remove(&values[1]).unwrap();
    assert!(list.is_empty());
    assert!(!list.front().valid());
    assert!(!list.back().valid());
}

#[test]
fn clear_reports_the_number_of_detached_nodes() {
    let values = [1u32, 2, 3];
    let mut node_a = SingleNode::new(&values[0]);
    let mut node_b = SingleNode::new(&values[1]);
    let mut node_c = SingleNode::new(&values[2]);

    let mut list = SingleList::new();
    list.push_back(NonNull::from(&mut node_a));
    list.push_back(NonNull::from(&mut node_b));
    list.push_back(NonNull::from(&mut node_c));

    assert_eq!(list.clear(), 3);
    assert!(list.is_empty());
    assert_eq!(list.clear(), 0);

    // All nodes are reusable after a clear.
    assert!(!node_a.is_linked());
    list.push_back(NonNull::from(&mut node_a));
    assert_eq!(list.len(), 1);
    list.clear();
}

#[test]
fn double_list_pops_at_both_ends() {
    let values = [1u32, 2, 3, 4];
    let mut nodes = [
        DoubleNode::new(&values[0]),
        DoubleNode::new(&values[1]),
        DoubleNode::new(&values[2]),
        DoubleNode::new(&values[3]),
    ];

    let mut list = DoubleList::new();
    for node in nodes.iter_mut() {
        list.push_back(NonNull::from(node));
    }

    assert_eq!(unsafe { list.pop_front().unwrap().as_ref() }.data(), &1);
    assert_eq!(unsafe { list.pop_back().unwrap().as_ref() }.data(), &4);
    assert_eq!(unsafe { list.pop_front().unwrap().as_ref() }.data(), &2);
    assert_eq!(unsafe { list.pop_back().unwrap().as_ref() }.data(), &3);
    assert!(list.pop_front().is_none());
    assert!(list.pop_back().is_none());
}

#[test]
fn double_list_mirrors_a_deque_model() {
    const OPS: usize = 1000;
    const SLOTS: usize = 32;

    let values: Vec<u32> = (0..SLOTS as u32).collect();
    let mut nodes: Vec<DoubleNode<u32>> =
        values.iter().map(|value| DoubleNode::new(value)).collect();

    let mut list = DoubleList::new();
    let mut model: VecDeque<u32> = VecDeque::new();
    let mut free: Vec<usize> = (0..SLOTS).collect();

    let mut rng = StdRng::seed_from_u64(0x_d1_15_7);
    for _ in 0..OPS {
        match rng.random_range(0..4u8) {
            0 if !free.is_empty() => {
                let slot = free.pop().unwrap();
                list.push_front(NonNull::from(&mut nodes[slot]));
                model.push_front(values[slot]);
            }
            1 if !free.is_empty() => {
                let slot = free.pop().unwrap();
                list.push_back(NonNull::from(&mut nodes[slot]));
                model.push_back(values[slot]);
            }
            2 => {
                let popped = list.pop_front().map(|node| *unsafe { node.as_ref() }.data());
                assert_eq!(popped, model.pop_front());
                if let Some(value) = popped {
                    free.push(value as usize);
                }
            }
            _ => {
                let popped = list.pop_back().map(|node| *unsafe { node.as_ref() }.data());
                assert_eq!(popped, model.pop_back());
                if let Some(value) = popped {
                    free.push(value as usize);
                }
            }
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.front().data().copied(), model.front().copied());
        assert_eq!(list.back().data().copied(), model.back().copied());
    }

    let drained: Vec<u32> = unsafe { list.iter() }
        .map(|node| *unsafe { node.as_ref() }.data())
        .collect();
    assert_eq!(drained, Vec::from(model));
    list.clear();
}
