//! RecordTree - the per-owner binary search tree.
//!
//! Records are ordered by id with no rebalancing. Ids are unique within a
//! tree: inserting a colliding id drops the incoming record.
//!
//! Deleting a node with two children does not relink it. The node keeps its
//! place and takes over the full attribute set of its in-order successor,
//! whose own node is then removed. A borrowed `&Record` therefore never
//! survives a removal; re-resolve by id instead.

use crate::{error::Result, Error, Order, Record, RecordId};
use std::cmp::Ordering;

pub(crate) type Link = Option<Box<Node>>;

/// A tree node owning exactly one record.
pub(crate) struct Node {
    pub(crate) record: Record,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    fn new(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }
}

/// Result of inserting a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was linked into the tree.
    Inserted,
    /// A record with the same id was already present; the new one was dropped.
    Duplicate,
}

/// Binary search tree of records keyed by id.
#[derive(Default)]
pub struct RecordTree {
    root: Link,
    len: usize,
}

impl RecordTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree holding a single record.
    pub fn with_record(record: Record) -> Self {
        let mut tree = Self::new();
        tree.insert(record);
        tree
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the tree holds no records.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Insert a record by id.
    pub fn insert(&mut self, record: Record) -> InsertOutcome {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match record.id.cmp(&node.record.id) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    tracing::trace!(id = record.id, "duplicate id, record dropped");
                    return InsertOutcome::Duplicate;
                }
            };
        }

        *link = Some(Box::new(Node::new(record)));
        self.len += 1;
        InsertOutcome::Inserted
    }

    /// Remove the record with `id`, returning it.
    pub fn remove(&mut self, id: RecordId) -> Result<Record> {
        let removed = remove_from(&mut self.root, id).ok_or(Error::RecordNotFound(id))?;
        self.len -= 1;
        Ok(removed)
    }

    /// Breadth-first search for `id`.
    ///
    /// Visits level by level, left child before right, and does not use the
    /// id ordering to prune.
    pub fn find_by_id(&self, id: RecordId) -> Option<&Record> {
        self.iter(Order::LevelOrder).find(|record| record.id == id)
    }

    /// Check if a record with `id` is present.
    pub fn contains(&self, id: RecordId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        release(self.root.take());
        self.len = 0;
    }
}

/// Find the link holding `id` and unlink its record.
fn remove_from(link: &mut Link, id: RecordId) -> Option<Record> {
    let mut link = link;
    loop {
        link = match id.cmp(&link.as_ref()?.record.id) {
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Greater => &mut link.as_mut()?.right,
            Ordering::Equal => break,
        };
    }

    let node = link.as_mut()?;
    if let (Some(_), Some(right)) = (node.left.as_deref(), node.right.as_deref()) {
        let successor_id = leftmost(right).record.id;
        let successor = remove_from(&mut node.right, successor_id)?;
        return Some(std::mem::replace(&mut node.record, successor));
    }

    let Node {
        record,
        left,
        right,
    } = *link.take()?;
    *link = left.or(right);
    Some(record)
}

fn leftmost(mut node: &Node) -> &Node {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node
}

/// Tear down a subtree without recursing on its height.
fn release(root: Link) {
    let mut stack: Vec<Box<Node>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl Drop for RecordTree {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl std::fmt::Debug for RecordTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter(Order::InOrder)).finish()
    }
}

impl FromIterator<Record> for RecordTree {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Record> for RecordTree {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}
