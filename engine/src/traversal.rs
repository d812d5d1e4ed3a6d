//! Traversals over a [`RecordTree`].
//!
//! All walks are iterative: depth-first orders keep an explicit stack and
//! level order keeps a FIFO queue, so a degenerate (sorted-insert) tree costs
//! heap, not call stack.

use crate::tree::Node;
use crate::{Record, RecordTree};
use std::collections::VecDeque;

/// Visiting order for a tree walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Visit, left, right.
    PreOrder,
    /// Left, visit, right. Yields ascending ids.
    InOrder,
    /// Left, right, visit.
    PostOrder,
    /// Breadth-first, left child before right.
    LevelOrder,
}

impl Order {
    /// All orders, in menu order (level order first).
    pub const ALL: [Order; 4] = [
        Order::LevelOrder,
        Order::PreOrder,
        Order::InOrder,
        Order::PostOrder,
    ];
}

/// Iterator over the records of a tree in a given [`Order`].
pub struct Traversal<'a> {
    state: State<'a>,
}

enum State<'a> {
    Pre(Vec<&'a Node>),
    In {
        stack: Vec<&'a Node>,
        cursor: Option<&'a Node>,
    },
    /// The flag marks nodes whose children were already pushed.
    Post(Vec<(&'a Node, bool)>),
    Level(VecDeque<&'a Node>),
}

impl<'a> Traversal<'a> {
    fn new(root: Option<&'a Node>, order: Order) -> Self {
        let state = match order {
            Order::PreOrder => State::Pre(root.into_iter().collect()),
            Order::InOrder => State::In {
                stack: Vec::new(),
                cursor: root,
            },
            Order::PostOrder => State::Post(root.map(|node| (node, false)).into_iter().collect()),
            Order::LevelOrder => State::Level(root.into_iter().collect()),
        };
        Self { state }
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::Pre(stack) => {
                let node = stack.pop()?;
                stack.extend(node.right.as_deref());
                stack.extend(node.left.as_deref());
                Some(&node.record)
            }
            State::In { stack, cursor } => {
                while let Some(node) = *cursor {
                    stack.push(node);
                    *cursor = node.left.as_deref();
                }
                let node = stack.pop()?;
                *cursor = node.right.as_deref();
                Some(&node.record)
            }
            State::Post(stack) => loop {
                let (node, expanded) = stack.pop()?;
                if expanded {
                    return Some(&node.record);
                }
                stack.push((node, true));
                stack.extend(node.right.as_deref().map(|right| (right, false)));
                stack.extend(node.left.as_deref().map(|left| (left, false)));
            },
            State::Level(queue) => {
                let node = queue.pop_front()?;
                queue.extend(node.left.as_deref());
                queue.extend(node.right.as_deref());
                Some(&node.record)
            }
        }
    }
}

impl RecordTree {
    /// Iterate over the records in `order`.
    pub fn iter(&self, order: Order) -> Traversal<'_> {
        Traversal::new(self.root(), order)
    }

    /// Call `visit` on every record in `order`.
    pub fn walk<F>(&self, order: Order, mut visit: F)
    where
        F: FnMut(&Record),
    {
        for record in self.iter(order) {
            visit(record);
        }
    }

    /// Linearize the tree in pre-order.
    pub fn collect_all(&self) -> Vec<&Record> {
        self.iter(Order::PreOrder).collect()
    }

    /// All records sorted by name. Records sharing a name are all kept.
    pub fn sorted_by_name(&self) -> Vec<&Record> {
        let mut records = self.collect_all();
        records.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        records
    }
}
