//! Owner - a named holder of one record tree.

use crate::{error::Result, Error, InsertOutcome, Pokedex, Record, RecordId, RecordTree};

/// An owner and the records it holds.
#[derive(Debug)]
pub struct Owner {
    name: String,
    records: RecordTree,
}

/// Result of evolving a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evolution {
    /// The record that was removed
    pub from: Record,
    /// The evolved record, or `None` when the owner already held it
    pub to: Option<Record>,
}

/// Who won a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    FirstWins,
    SecondWins,
    Tie,
}

/// Scores and outcome of a battle between two records of one owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Battle<'a> {
    pub first: &'a Record,
    pub second: &'a Record,
    pub first_score: f64,
    pub second_score: f64,
    pub outcome: BattleOutcome,
}

impl<'a> Battle<'a> {
    /// The winning record, if the battle was not a tie.
    pub fn winner(&self) -> Option<&'a Record> {
        match self.outcome {
            BattleOutcome::FirstWins => Some(self.first),
            BattleOutcome::SecondWins => Some(self.second),
            BattleOutcome::Tie => None,
        }
    }
}

impl Owner {
    /// Create an owner holding only `starter`.
    pub fn new(name: impl Into<String>, starter: Record) -> Self {
        Self {
            name: name.into(),
            records: RecordTree::with_record(starter),
        }
    }

    /// The owner's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owner's records.
    pub fn records(&self) -> &RecordTree {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut RecordTree {
        &mut self.records
    }

    /// Add a copy of the template for `id`, returning the added record.
    pub fn add(&mut self, id: RecordId, pokedex: &Pokedex) -> Result<Record> {
        let template = pokedex.template(id)?;
        match self.records.insert(template.clone()) {
            InsertOutcome::Inserted => {
                tracing::info!(owner = %self.name, id, name = %template.name, "record added");
                Ok(template)
            }
            InsertOutcome::Duplicate => {
                tracing::debug!(owner = %self.name, id, "record already held");
                Err(Error::RecordExists(id))
            }
        }
    }

    /// Release the record with `id`.
    pub fn release(&mut self, id: RecordId) -> Result<Record> {
        if self.records.is_empty() {
            return Err(Error::EmptyStore(self.name.clone()));
        }

        let released = self.records.remove(id)?;
        tracing::info!(owner = %self.name, id, name = %released.name, "record released");
        Ok(released)
    }

    /// Evolve the record with `old_id` into the template at `old_id + 1`.
    ///
    /// Every check happens before the tree is touched. If the evolved form is
    /// already held, the old record is still removed and nothing replaces it;
    /// the table is only consulted when the evolved form must be created.
    pub fn evolve(&mut self, old_id: RecordId, pokedex: &Pokedex) -> Result<Evolution> {
        if self.records.is_empty() {
            return Err(Error::EmptyStore(self.name.clone()));
        }

        let current = self
            .records
            .find_by_id(old_id)
            .ok_or(Error::RecordNotFound(old_id))?;
        if !current.can_evolve {
            return Err(Error::CannotEvolve(old_id));
        }

        let new_id = old_id
            .checked_add(1)
            .ok_or(Error::TemplateOutOfRange(old_id))?;
        let evolved = if self.records.contains(new_id) {
            None
        } else {
            Some(pokedex.template(new_id)?)
        };

        let from = self.records.remove(old_id)?;
        let to = match evolved {
            Some(record) => match self.records.insert(record.clone()) {
                InsertOutcome::Inserted => Some(record),
                InsertOutcome::Duplicate => None,
            },
            None => None,
        };

        match &to {
            Some(record) => tracing::info!(
                owner = %self.name,
                from = %from.name,
                to = %record.name,
                "record evolved"
            ),
            None => tracing::info!(
                owner = %self.name,
                from = %from.name,
                new_id,
                "evolved form already held, old record removed"
            ),
        }

        Ok(Evolution { from, to })
    }

    /// Battle two held records against each other.
    pub fn battle(&self, first: RecordId, second: RecordId) -> Result<Battle<'_>> {
        if self.records.is_empty() {
            return Err(Error::EmptyStore(self.name.clone()));
        }

        let first = self
            .records
            .find_by_id(first)
            .ok_or(Error::RecordNotFound(first))?;
        let second = self
            .records
            .find_by_id(second)
            .ok_or(Error::RecordNotFound(second))?;

        let first_score = first.score();
        let second_score = second.score();
        let outcome = if first_score > second_score {
            BattleOutcome::FirstWins
        } else if second_score > first_score {
            BattleOutcome::SecondWins
        } else {
            BattleOutcome::Tie
        };

        Ok(Battle {
            first,
            second,
            first_score,
            second_score,
            outcome,
        })
    }
}
