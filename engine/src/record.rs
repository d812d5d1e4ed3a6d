//! Record types stored in an owner's tree.

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// Element type of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ElementType {
    Grass,
    Fire,
    Water,
    Bug,
    Normal,
    Poison,
    Electric,
    Ground,
    Fairy,
    Fighting,
    Psychic,
    Rock,
    Ghost,
    Dragon,
    Ice,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ElementType::Grass => "GRASS",
            ElementType::Fire => "FIRE",
            ElementType::Water => "WATER",
            ElementType::Bug => "BUG",
            ElementType::Normal => "NORMAL",
            ElementType::Poison => "POISON",
            ElementType::Electric => "ELECTRIC",
            ElementType::Ground => "GROUND",
            ElementType::Fairy => "FAIRY",
            ElementType::Fighting => "FIGHTING",
            ElementType::Psychic => "PSYCHIC",
            ElementType::Rock => "ROCK",
            ElementType::Ghost => "GHOST",
            ElementType::Dragon => "DRAGON",
            ElementType::Ice => "ICE",
        };
        f.write_str(name)
    }
}

/// A single Pokemon held by an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Identifier, unique within one tree
    pub id: RecordId,
    /// Display name
    pub name: String,
    /// Element type
    #[serde(rename = "type")]
    pub kind: ElementType,
    /// Hit points
    pub hp: i32,
    /// Attack power
    pub attack: i32,
    /// Whether the record evolves into `id + 1`
    pub can_evolve: bool,
}

impl Record {
    /// Create a new record.
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        kind: ElementType,
        hp: i32,
        attack: i32,
        can_evolve: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            hp,
            attack,
            can_evolve,
        }
    }

    /// Battle score: `attack * 1.5 + hp * 1.2`.
    pub fn score(&self) -> f64 {
        f64::from(self.attack) * 1.5 + f64::from(self.hp) * 1.2
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Type: {}, HP: {}, Attack: {}, Can Evolve: {}",
            self.id,
            self.name,
            self.kind,
            self.hp,
            self.attack,
            if self.can_evolve { "Yes" } else { "No" }
        )
    }
}
