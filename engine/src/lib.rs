//! # Pokedex Engine
//!
//! An in-memory engine for a directory of owners, each holding a private
//! collection of Pokemon records.
//!
//! This crate provides the data structures and the algorithms that mutate
//! them. Menus, prompts and input parsing live in the caller; the engine takes
//! already-validated ids and names and reports structured outcomes.
//!
//! ## Design Principles
//!
//! - **No IO**: Engine never reads input or prints
//! - **Explicit state**: A [`Directory`] is a plain value, not a global
//! - **Iterative**: Walks and teardown never recurse on tree height
//! - **Owned**: Every record belongs to exactly one tree node
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! A [`Record`] carries an id, a name, an [`ElementType`], hit points, attack
//! power and an evolvable flag. Records are copied out of a [`Pokedex`]
//! reference table, never built ad hoc.
//!
//! ### Record trees
//!
//! Each owner keeps a [`RecordTree`], an unbalanced binary search tree keyed
//! by id. Duplicate ids are dropped on insert. Lookups by id are
//! breadth-first; traversals come in the four [`Order`]s.
//!
//! ### Directory
//!
//! The [`Directory`] chains owners into a ring. Owners are created at the
//! tail, deleted from anywhere, merged (copy then delete) and sorted by name.
//!
//! ## Quick Start
//!
//! ```rust
//! use pokedex_engine::{Directory, Order, Pokedex, Starter};
//!
//! let pokedex = Pokedex::standard();
//! let mut directory = Directory::new();
//!
//! // 1. Create owners
//! directory.create_with_starter("Ash", Starter::Bulbasaur, &pokedex).unwrap();
//! directory.create_with_starter("Red", Starter::Squirtle, &pokedex).unwrap();
//!
//! // 2. Add a record
//! let ash = directory.find_by_name("Ash").unwrap();
//! directory.owner_mut(ash).unwrap().add(25, &pokedex).unwrap();
//!
//! // 3. Merge Red into Ash
//! let summary = directory.merge("Ash", "Red").unwrap();
//! assert_eq!(summary.copied, 1);
//!
//! // 4. Walk Ash's records in id order
//! let ash = directory.find_by_name("Ash").unwrap();
//! let ids: Vec<_> = directory
//!     .owner(ash)
//!     .unwrap()
//!     .records()
//!     .iter(Order::InOrder)
//!     .map(|record| record.id)
//!     .collect();
//! assert_eq!(ids, vec![1, 7, 25]);
//! ```
//!
//! ## Logging
//!
//! Mutations emit [`tracing`] events. The engine never installs a
//! subscriber.

pub mod config;
pub mod directory;
pub mod error;
pub mod owner;
pub mod pokedex;
pub mod record;
pub mod traversal;
pub mod tree;

// Re-export main types at crate root
pub use config::{ConfigError, EngineConfig};
pub use directory::{Direction, Directory, MergeSummary, OwnerId, Ring};
pub use error::{Error, ErrorKind};
pub use owner::{Battle, BattleOutcome, Evolution, Owner};
pub use pokedex::{Pokedex, Starter};
pub use record::{ElementType, Record};
pub use traversal::{Order, Traversal};
pub use tree::{InsertOutcome, RecordTree};

/// Record identifier; 1-based in the reference table.
pub type RecordId = i32;
