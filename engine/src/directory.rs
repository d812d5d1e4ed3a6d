//! Directory - the ring of owners.
//!
//! Owners sit in a slot registry and are chained into a circular doubly
//! linked list by slot index. `next`/`prev` of a lone owner point at itself.
//! The head is the anchor for every walk; new owners are spliced in just
//! before it, so they land at the tail.
//!
//! Sorting swaps owner payloads between ring positions instead of relinking,
//! which means an [`OwnerId`] names a ring position: after [`Directory::sort`]
//! the same id may carry a different owner. Resolve by name when in doubt.

use crate::{
    error::Result, EngineConfig, Error, InsertOutcome, Owner, Pokedex, Record, Starter,
};

/// Handle to an owner's ring position.
///
/// Handles are invalidated when the owner is deleted; a stale handle never
/// resolves, even after its slot is reused. A slot whose generation counter
/// is exhausted is retired instead of reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId {
    index: usize,
    generation: u64,
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "owner#{}.{}", self.index, self.generation)
    }
}

/// Walking direction around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow `next` links.
    Forward,
    /// Follow `prev` links.
    Backward,
}

/// Counts reported by [`Directory::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Records copied into the target
    pub copied: usize,
    /// Records the target already held (by id)
    pub skipped: usize,
}

struct Slot {
    generation: u64,
    next: usize,
    prev: usize,
    owner: Option<Owner>,
}

/// The owner ring plus its head.
pub struct Directory {
    config: EngineConfig,
    slots: Vec<Slot>,
    free: Vec<usize>,
    head: Option<usize>,
    len: usize,
}

impl Default for Directory {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Directory {
    /// Create an empty directory with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of owners in the ring.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the ring is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The head owner.
    pub fn head(&self) -> Option<OwnerId> {
        self.head.map(|index| self.id_at(index))
    }

    /// Borrow an owner.
    pub fn owner(&self, id: OwnerId) -> Option<&Owner> {
        self.resolve(id).and_then(|index| self.slots[index].owner.as_ref())
    }

    /// Mutably borrow an owner.
    pub fn owner_mut(&mut self, id: OwnerId) -> Option<&mut Owner> {
        let index = self.resolve(id)?;
        self.slots[index].owner.as_mut()
    }

    /// The owner after `id` in the ring.
    pub fn next(&self, id: OwnerId) -> Option<OwnerId> {
        self.resolve(id)
            .map(|index| self.id_at(self.slots[index].next))
    }

    /// The owner before `id` in the ring.
    pub fn prev(&self, id: OwnerId) -> Option<OwnerId> {
        self.resolve(id)
            .map(|index| self.id_at(self.slots[index].prev))
    }

    /// The owner `position` steps forward from head.
    pub fn nth(&self, position: usize) -> Option<OwnerId> {
        self.iter().nth(position).map(|(id, _)| id)
    }

    /// One revolution of the ring, starting at head.
    pub fn iter(&self) -> Ring<'_> {
        Ring {
            directory: self,
            cursor: self.head,
            remaining: self.len as u64,
            direction: Direction::Forward,
        }
    }

    /// Owner names in ring order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(_, owner)| owner.name()).collect()
    }

    /// `count` owners starting at head, wrapping as often as needed.
    ///
    /// A non-positive `count` yields nothing.
    pub fn rotation(&self, direction: Direction, count: i64) -> Ring<'_> {
        Ring {
            directory: self,
            cursor: self.head,
            remaining: u64::try_from(count).unwrap_or(0),
            direction,
        }
    }

    /// Find an owner by exact, case-sensitive name.
    pub fn find_by_name(&self, name: &str) -> Option<OwnerId> {
        self.iter()
            .find(|(_, owner)| owner.name() == name)
            .map(|(id, _)| id)
    }

    /// Create an owner holding `starter` and append it at the tail.
    pub fn create(&mut self, name: impl Into<String>, starter: Record) -> Result<OwnerId> {
        let name = name.into();

        if !self.config.accepts_name(&name) {
            tracing::warn!(owner = %name, "owner name rejected");
            return Err(Error::InvalidOwnerName(name));
        }
        if self.find_by_name(&name).is_some() {
            tracing::debug!(owner = %name, "owner already exists");
            return Err(Error::OwnerExists(name));
        }

        tracing::info!(owner = %name, starter = %starter.name, "creating owner");
        let index = self.allocate(Owner::new(name, starter));
        self.link_at_tail(index);
        self.len += 1;

        Ok(self.id_at(index))
    }

    /// Create an owner holding one of the starter templates.
    pub fn create_with_starter(
        &mut self,
        name: impl Into<String>,
        starter: Starter,
        pokedex: &Pokedex,
    ) -> Result<OwnerId> {
        self.create(name, pokedex.starter(starter).clone())
    }

    /// Unlink an owner and hand it back.
    ///
    /// Dropping the returned owner releases its whole record tree.
    pub fn delete(&mut self, id: OwnerId) -> Result<Owner> {
        let index = self
            .resolve(id)
            .ok_or_else(|| Error::OwnerNotFound(id.to_string()))?;
        let owner = self.slots[index]
            .owner
            .take()
            .ok_or_else(|| Error::OwnerNotFound(id.to_string()))?;

        let (next, prev) = (self.slots[index].next, self.slots[index].prev);
        if next == index {
            self.head = None;
        } else {
            self.slots[prev].next = next;
            self.slots[next].prev = prev;
            if self.head == Some(index) {
                self.head = Some(next);
            }
        }

        let slot = &mut self.slots[index];
        slot.next = index;
        slot.prev = index;
        match slot.generation.checked_add(1) {
            Some(generation) => {
                slot.generation = generation;
                self.free.push(index);
            }
            None => tracing::debug!(slot = index, "slot generations exhausted, slot retired"),
        }
        self.len -= 1;

        tracing::info!(owner = %owner.name(), records = owner.records().len(), "owner deleted");
        Ok(owner)
    }

    /// Resolve `name` and delete that owner.
    pub fn delete_by_name(&mut self, name: &str) -> Result<Owner> {
        let id = self
            .find_by_name(name)
            .ok_or_else(|| Error::OwnerNotFound(name.to_string()))?;
        self.delete(id)
    }

    /// Copy every record of `source` into `target`, then delete `source`.
    ///
    /// Records are copied in pre-order; ids the target already holds keep the
    /// target's version.
    pub fn merge(&mut self, target: &str, source: &str) -> Result<MergeSummary> {
        let target_id = self
            .find_by_name(target)
            .ok_or_else(|| Error::OwnerNotFound(target.to_string()))?;
        let source_id = self
            .find_by_name(source)
            .ok_or_else(|| Error::OwnerNotFound(source.to_string()))?;
        if target_id == source_id {
            return Err(Error::SelfMerge(target.to_string()));
        }

        let copies: Vec<Record> = self
            .owner(source_id)
            .map(|owner| {
                owner
                    .records()
                    .collect_all()
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let mut summary = MergeSummary::default();
        if let Some(owner) = self.owner_mut(target_id) {
            for record in copies {
                match owner.records_mut().insert(record) {
                    InsertOutcome::Inserted => summary.copied += 1,
                    InsertOutcome::Duplicate => summary.skipped += 1,
                }
            }
        }

        tracing::info!(
            into = %target,
            from = %source,
            copied = summary.copied,
            skipped = summary.skipped,
            "owners merged"
        );
        self.delete(source_id)?;

        Ok(summary)
    }

    /// Sort owners by name, ascending.
    ///
    /// Bubble passes run from head until one makes no swap. Swaps exchange
    /// owner payloads; ring links are left alone. Returns the number of swaps.
    pub fn sort(&mut self) -> usize {
        let Some(head) = self.head else {
            return 0;
        };
        if self.len < 2 {
            return 0;
        }

        let mut swaps = 0;
        let mut unsorted = self.len;
        loop {
            let mut swapped = false;
            let mut cursor = head;
            for _ in 1..unsorted {
                let next = self.slots[cursor].next;
                if self.name_at(cursor) > self.name_at(next) {
                    self.swap_payloads(cursor, next);
                    swapped = true;
                    swaps += 1;
                }
                cursor = next;
            }
            unsorted -= 1;
            if !swapped || unsorted < 2 {
                break;
            }
        }

        tracing::info!(owners = self.len, swaps, "owners sorted");
        swaps
    }

    /// Release every owner by walking the ring from head.
    ///
    /// Returns the number of owners released.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        while let Some(head) = self.head() {
            if self.delete(head).is_err() {
                break;
            }
            released += 1;
        }

        released
    }

    fn id_at(&self, index: usize) -> OwnerId {
        OwnerId {
            index,
            generation: self.slots[index].generation,
        }
    }

    fn resolve(&self, id: OwnerId) -> Option<usize> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation && slot.owner.is_some())
            .map(|_| id.index)
    }

    fn name_at(&self, index: usize) -> &str {
        self.slots[index].owner.as_ref().map_or("", Owner::name)
    }

    /// Place an owner in a free slot, self-linked.
    fn allocate(&mut self, owner: Owner) -> usize {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.next = index;
                slot.prev = index;
                slot.owner = Some(owner);
                index
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    generation: 0,
                    next: index,
                    prev: index,
                    owner: Some(owner),
                });
                index
            }
        }
    }

    /// Splice `index` in just before head.
    fn link_at_tail(&mut self, index: usize) {
        let Some(head) = self.head else {
            self.head = Some(index);
            return;
        };

        let tail = self.slots[head].prev;
        self.slots[tail].next = index;
        self.slots[index].prev = tail;
        self.slots[index].next = head;
        self.slots[head].prev = index;
    }

    fn swap_payloads(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (low, high) = (a.min(b), a.max(b));
        let (left, right) = self.slots.split_at_mut(high);
        std::mem::swap(&mut left[low].owner, &mut right[0].owner);
    }
}

impl Drop for Directory {
    fn drop(&mut self) {
        let released = self.clear();
        if released > 0 {
            tracing::debug!(released, "directory torn down");
        }
    }
}

impl std::fmt::Debug for Directory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Directory")
            .field("len", &self.len)
            .field("owners", &self.names())
            .finish()
    }
}

/// Iterator walking the ring a fixed number of steps.
pub struct Ring<'a> {
    directory: &'a Directory,
    cursor: Option<usize>,
    remaining: u64,
    direction: Direction,
}

impl<'a> Iterator for Ring<'a> {
    type Item = (OwnerId, &'a Owner);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let directory = self.directory;
        let index = self.cursor?;
        let slot = &directory.slots[index];
        let owner = slot.owner.as_ref()?;

        self.remaining -= 1;
        self.cursor = Some(match self.direction {
            Direction::Forward => slot.next,
            Direction::Backward => slot.prev,
        });
        Some((directory.id_at(index), owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory_with(names: &[&str]) -> (Directory, Pokedex) {
        let pokedex = Pokedex::standard();
        let mut directory = Directory::new();
        for name in names {
            directory
                .create_with_starter(*name, Starter::Bulbasaur, &pokedex)
                .unwrap();
        }
        (directory, pokedex)
    }

    fn assert_ring_closed(directory: &Directory) {
        let Some(head) = directory.head() else {
            assert_eq!(directory.len(), 0);
            return;
        };

        let mut forward = head;
        let mut backward = head;
        for step in 0..directory.len() {
            if step > 0 {
                assert_ne!(forward, head, "forward walk closed early");
            }
            let next = directory.next(forward).unwrap();
            assert_eq!(directory.prev(next), Some(forward));
            forward = next;
            backward = directory.prev(backward).unwrap();
        }
        assert_eq!(forward, head);
        assert_eq!(backward, head);
    }

    #[test]
    fn empty_directory() {
        let directory = Directory::new();
        assert!(directory.is_empty());
        assert_eq!(directory.len(), 0);
        assert!(directory.head().is_none());
        assert!(directory.find_by_name("Ash").is_none());
        assert_eq!(directory.iter().count(), 0);
    }

    #[test]
    fn lone_owner_is_self_linked() {
        let (directory, _) = directory_with(&["Ash"]);
        let head = directory.head().unwrap();
        assert_eq!(directory.next(head), Some(head));
        assert_eq!(directory.prev(head), Some(head));
    }

    #[test]
    fn create_appends_at_tail() {
        let (directory, _) = directory_with(&["Ash", "Misty", "Brock"]);
        assert_eq!(directory.names(), vec!["Ash", "Misty", "Brock"]);

        let head = directory.head().unwrap();
        assert_eq!(directory.owner(head).unwrap().name(), "Ash");
        let tail = directory.prev(head).unwrap();
        assert_eq!(directory.owner(tail).unwrap().name(), "Brock");
        assert_ring_closed(&directory);
    }

    #[test]
    fn create_duplicate_name_rejected() {
        let (mut directory, pokedex) = directory_with(&["Ash"]);

        let result = directory.create_with_starter("Ash", Starter::Squirtle, &pokedex);
        assert_eq!(result, Err(Error::OwnerExists("Ash".into())));
        assert_eq!(directory.len(), 1);

        // Case-sensitive
        assert!(directory
            .create_with_starter("ash", Starter::Squirtle, &pokedex)
            .is_ok());
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn create_invalid_name_rejected() {
        let (mut directory, pokedex) = directory_with(&[]);
        let long = "x".repeat(21);

        for name in ["", long.as_str()] {
            let result = directory.create_with_starter(name, Starter::Bulbasaur, &pokedex);
            assert!(matches!(result, Err(Error::InvalidOwnerName(_))));
        }
        assert!(directory.is_empty());
    }

    #[test]
    fn delete_middle_head_and_last() {
        let (mut directory, _) = directory_with(&["Ash", "Misty", "Brock"]);

        let misty = directory.find_by_name("Misty").unwrap();
        assert_eq!(directory.delete(misty).unwrap().name(), "Misty");
        assert_eq!(directory.names(), vec!["Ash", "Brock"]);
        assert_ring_closed(&directory);

        let head = directory.head().unwrap();
        directory.delete(head).unwrap();
        assert_eq!(directory.names(), vec!["Brock"]);
        assert_ring_closed(&directory);

        directory.delete_by_name("Brock").unwrap();
        assert!(directory.is_empty());
        assert!(directory.head().is_none());
    }

    #[test]
    fn stale_handle_never_resolves() {
        let (mut directory, pokedex) = directory_with(&["Ash"]);
        let ash = directory.head().unwrap();
        directory.delete(ash).unwrap();

        let gary = directory
            .create_with_starter("Gary", Starter::Charmander, &pokedex)
            .unwrap();
        assert_ne!(ash, gary);
        assert!(directory.owner(ash).is_none());
        assert!(matches!(directory.delete(ash), Err(Error::OwnerNotFound(_))));
        assert_eq!(directory.owner(gary).unwrap().name(), "Gary");
    }

    #[test]
    fn stale_handle_survives_clear() {
        let (mut directory, pokedex) = directory_with(&["Ash", "Misty"]);
        let ash = directory.find_by_name("Ash").unwrap();
        let misty = directory.find_by_name("Misty").unwrap();
        assert_eq!(directory.clear(), 2);

        let gary = directory
            .create_with_starter("Gary", Starter::Charmander, &pokedex)
            .unwrap();
        let brock = directory
            .create_with_starter("Brock", Starter::Bulbasaur, &pokedex)
            .unwrap();

        for stale in [ash, misty] {
            assert!(directory.owner(stale).is_none());
            assert!(directory.owner_mut(stale).is_none());
            assert!(matches!(directory.delete(stale), Err(Error::OwnerNotFound(_))));
        }
        assert_eq!(directory.names(), vec!["Gary", "Brock"]);
        assert_eq!(directory.owner(gary).unwrap().name(), "Gary");
        assert_eq!(directory.owner(brock).unwrap().name(), "Brock");
    }

    #[test]
    fn exhausted_slot_is_retired() {
        let (mut directory, pokedex) = directory_with(&["Ash"]);
        directory.slots[0].generation = u64::MAX;
        let ash = directory.head().unwrap();
        directory.delete(ash).unwrap();
        assert!(directory.free.is_empty());

        let gary = directory
            .create_with_starter("Gary", Starter::Charmander, &pokedex)
            .unwrap();
        assert_ne!(gary, ash);
        assert!(directory.owner(ash).is_none());
        assert_eq!(directory.slots.len(), 2);
        assert_eq!(directory.owner(gary).unwrap().name(), "Gary");
    }

    #[test]
    fn merge_copies_and_deletes_source() {
        let (mut directory, pokedex) = directory_with(&["Ash"]);
        directory
            .create_with_starter("Red", Starter::Squirtle, &pokedex)
            .unwrap();
        let red = directory.find_by_name("Red").unwrap();
        directory.owner_mut(red).unwrap().add(1, &pokedex).unwrap();

        let summary = directory.merge("Ash", "Red").unwrap();
        assert_eq!(summary, MergeSummary { copied: 1, skipped: 1 });
        assert_eq!(directory.names(), vec!["Ash"]);
        assert!(directory.find_by_name("Red").is_none());

        let ash = directory.find_by_name("Ash").unwrap();
        let records = directory.owner(ash).unwrap().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records.find_by_id(7).unwrap().name, "Squirtle");
        assert_ring_closed(&directory);
    }

    #[test]
    fn merge_rejections_do_not_mutate() {
        let (mut directory, _) = directory_with(&["Ash", "Red"]);

        assert_eq!(
            directory.merge("Ash", "Ash"),
            Err(Error::SelfMerge("Ash".into()))
        );
        assert_eq!(
            directory.merge("Ash", "Blue"),
            Err(Error::OwnerNotFound("Blue".into()))
        );
        assert_eq!(
            directory.merge("Blue", "Ash"),
            Err(Error::OwnerNotFound("Blue".into()))
        );
        assert_eq!(directory.names(), vec!["Ash", "Red"]);
    }

    #[test]
    fn sort_swaps_payloads_not_links() {
        let (mut directory, pokedex) = directory_with(&["Misty", "Ash", "Brock"]);
        let misty = directory.find_by_name("Misty").unwrap();
        directory.owner_mut(misty).unwrap().add(120, &pokedex).unwrap();

        let positions: Vec<_> = directory.iter().map(|(id, _)| id).collect();
        let swaps = directory.sort();
        assert!(swaps > 0);

        assert_eq!(directory.names(), vec!["Ash", "Brock", "Misty"]);
        let after: Vec<_> = directory.iter().map(|(id, _)| id).collect();
        assert_eq!(positions, after);

        // Misty's records moved with her name.
        let misty = directory.find_by_name("Misty").unwrap();
        assert!(directory.owner(misty).unwrap().records().contains(120));
        assert_ring_closed(&directory);
    }

    #[test]
    fn sort_is_idempotent() {
        let (mut directory, _) = directory_with(&["d", "b", "e", "a", "c"]);
        directory.sort();
        let once = directory.names().join(",");
        assert_eq!(directory.sort(), 0);
        assert_eq!(directory.names().join(","), once);
        assert_eq!(directory.len(), 5);
    }

    #[test]
    fn sort_small_directories() {
        let (mut empty, _) = directory_with(&[]);
        assert_eq!(empty.sort(), 0);

        let (mut single, _) = directory_with(&["Ash"]);
        assert_eq!(single.sort(), 0);
        assert_eq!(single.names(), vec!["Ash"]);
    }

    #[test]
    fn sort_is_bytewise() {
        let (mut directory, _) = directory_with(&["bob", "Bob", "alice", "Zed"]);
        directory.sort();
        assert_eq!(directory.names(), vec!["Bob", "Zed", "alice", "bob"]);
    }

    #[test]
    fn rotation_wraps() {
        let (directory, _) = directory_with(&["Ash", "Misty", "Brock"]);

        let forward: Vec<_> = directory
            .rotation(Direction::Forward, 5)
            .map(|(_, owner)| owner.name())
            .collect();
        assert_eq!(forward, vec!["Ash", "Misty", "Brock", "Ash", "Misty"]);

        let backward: Vec<_> = directory
            .rotation(Direction::Backward, 4)
            .map(|(_, owner)| owner.name())
            .collect();
        assert_eq!(backward, vec!["Ash", "Brock", "Misty", "Ash"]);
    }

    #[test]
    fn rotation_non_positive_count() {
        let (directory, _) = directory_with(&["Ash"]);
        assert_eq!(directory.rotation(Direction::Forward, 0).count(), 0);
        assert_eq!(directory.rotation(Direction::Backward, -3).count(), 0);

        let (empty, _) = directory_with(&[]);
        assert_eq!(empty.rotation(Direction::Forward, 10).count(), 0);
    }

    #[test]
    fn nth_counts_from_head() {
        let (directory, _) = directory_with(&["Ash", "Misty"]);
        let second = directory.nth(1).unwrap();
        assert_eq!(directory.owner(second).unwrap().name(), "Misty");
        assert!(directory.nth(2).is_none());
    }

    #[test]
    fn clear_releases_everyone() {
        let (mut directory, _) = directory_with(&["Ash", "Misty", "Brock"]);
        assert_eq!(directory.clear(), 3);
        assert!(directory.is_empty());
        assert_eq!(directory.clear(), 0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Step {
            Create(u8),
            Delete(u8),
            Merge(u8, u8),
            Sort,
        }

        fn arb_step() -> impl Strategy<Value = Step> {
            prop_oneof![
                (0u8..8).prop_map(Step::Create),
                (0u8..8).prop_map(Step::Delete),
                (0u8..8, 0u8..8).prop_map(|(a, b)| Step::Merge(a, b)),
                Just(Step::Sort),
            ]
        }

        proptest! {
            #[test]
            fn prop_ring_stays_closed(steps in proptest::collection::vec(arb_step(), 0..60)) {
                let pokedex = Pokedex::standard();
                let mut directory = Directory::new();
                let mut model: Vec<String> = Vec::new();

                for step in steps {
                    match step {
                        Step::Create(n) => {
                            let name = format!("owner-{}", n);
                            let created = directory
                                .create_with_starter(name.as_str(), Starter::Charmander, &pokedex)
                                .is_ok();
                            prop_assert_eq!(created, !model.contains(&name));
                            if created {
                                model.push(name);
                            }
                        }
                        Step::Delete(n) => {
                            let name = format!("owner-{}", n);
                            let deleted = directory.delete_by_name(&name).is_ok();
                            prop_assert_eq!(deleted, model.contains(&name));
                            model.retain(|m| m != &name);
                        }
                        Step::Merge(a, b) => {
                            let (a, b) = (format!("owner-{}", a), format!("owner-{}", b));
                            let merged = directory.merge(&a, &b).is_ok();
                            prop_assert_eq!(merged, a != b && model.contains(&a) && model.contains(&b));
                            if merged {
                                model.retain(|m| m != &b);
                            }
                        }
                        Step::Sort => {
                            directory.sort();
                            model.sort();
                        }
                    }

                    prop_assert_eq!(directory.len(), model.len());
                    assert_ring_closed(&directory);
                }

                let mut names: Vec<String> = directory.names().into_iter().map(String::from).collect();
                names.sort();
                model.sort();
                prop_assert_eq!(names, model);
            }
        }
    }
}
