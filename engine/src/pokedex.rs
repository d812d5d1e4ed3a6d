//! Reference table of record templates.
//!
//! Records are never built from scratch: adding, evolving and creating an
//! owner all copy a template out of a [`Pokedex`]. The table is indexed by
//! `id - 1`, so entry `i` must carry id `i + 1`.

use crate::{error::Result, ElementType, Error, Record, RecordId};

/// Minimum table size, so that every [`Starter`] slot resolves.
const MIN_TABLE_LEN: usize = 7;

/// The three starter choices offered when an owner is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Starter {
    Bulbasaur,
    Charmander,
    Squirtle,
}

impl Starter {
    /// All starters, in menu order.
    pub const ALL: [Starter; 3] = [Starter::Bulbasaur, Starter::Charmander, Starter::Squirtle];

    /// Zero-based table slot of this starter.
    pub fn slot(self) -> usize {
        match self {
            Starter::Bulbasaur => 0,
            Starter::Charmander => 3,
            Starter::Squirtle => 6,
        }
    }
}

/// An ordered table of record templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokedex {
    entries: Vec<Record>,
}

impl Pokedex {
    /// The built-in first-generation table (151 entries).
    pub fn standard() -> Self {
        let entries = STANDARD
            .iter()
            .zip(1..)
            .map(|(&(name, kind, hp, attack, can_evolve), id)| {
                Record::new(id, name, kind, hp, attack, can_evolve)
            })
            .collect();
        Self { entries }
    }

    /// Build a table from records, checking that ids run `1..=len`.
    pub fn from_records(entries: Vec<Record>) -> Result<Self> {
        if entries.len() < MIN_TABLE_LEN {
            return Err(Error::InvalidTable(format!(
                "expected at least {} entries, got {}",
                MIN_TABLE_LEN,
                entries.len()
            )));
        }

        for (index, record) in entries.iter().enumerate() {
            let expected = index as i64 + 1;
            if i64::from(record.id) != expected {
                return Err(Error::InvalidTable(format!(
                    "entry {} has id {}, expected {}",
                    index, record.id, expected
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Parse a table from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<Record> =
            serde_json::from_str(json).map_err(|e| Error::InvalidTable(e.to_string()))?;
        Self::from_records(entries)
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the template for `id`.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.entries.get(index)
    }

    /// Copy the template for `id` out of the table.
    pub fn template(&self, id: RecordId) -> Result<Record> {
        self.get(id)
            .cloned()
            .ok_or(Error::TemplateOutOfRange(id))
    }

    /// Borrow the template behind a starter slot.
    pub fn starter(&self, starter: Starter) -> &Record {
        // Validated tables always hold the starter slots.
        &self.entries[starter.slot()]
    }

    /// Iterate over all templates in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter()
    }
}

impl Default for Pokedex {
    fn default() -> Self {
        Self::standard()
    }
}

use ElementType::{
    Bug, Dragon, Electric, Fairy, Fighting, Fire, Ghost, Grass, Ground, Ice, Normal, Poison,
    Psychic, Rock, Water,
};

/// name, type, hp, attack, evolvable
#[rustfmt::skip]
const STANDARD: [(&str, ElementType, i32, i32, bool); 151] = [
    ("Bulbasaur", Grass, 45, 49, true),
    ("Ivysaur", Grass, 60, 62, true),
    ("Venusaur", Grass, 80, 82, false),
    ("Charmander", Fire, 39, 52, true),
    ("Charmeleon", Fire, 58, 64, true),
    ("Charizard", Fire, 78, 84, false),
    ("Squirtle", Water, 44, 48, true),
    ("Wartortle", Water, 59, 63, true),
    ("Blastoise", Water, 79, 83, false),
    ("Caterpie", Bug, 45, 30, true),
    ("Metapod", Bug, 50, 20, true),
    ("Butterfree", Bug, 60, 45, false),
    ("Weedle", Bug, 40, 35, true),
    ("Kakuna", Bug, 45, 25, true),
    ("Beedrill", Bug, 65, 90, false),
    ("Pidgey", Normal, 40, 45, true),
    ("Pidgeotto", Normal, 63, 60, true),
    ("Pidgeot", Normal, 83, 80, false),
    ("Rattata", Normal, 30, 56, true),
    ("Raticate", Normal, 55, 81, false),
    ("Spearow", Normal, 40, 60, true),
    ("Fearow", Normal, 65, 90, false),
    ("Ekans", Poison, 35, 60, true),
    ("Arbok", Poison, 60, 95, false),
    ("Pikachu", Electric, 35, 55, true),
    ("Raichu", Electric, 60, 90, false),
    ("Sandshrew", Ground, 50, 75, true),
    ("Sandslash", Ground, 75, 100, false),
    ("Nidoran-F", Poison, 55, 47, true),
    ("Nidorina", Poison, 70, 62, true),
    ("Nidoqueen", Poison, 90, 92, false),
    ("Nidoran-M", Poison, 46, 57, true),
    ("Nidorino", Poison, 61, 72, true),
    ("Nidoking", Poison, 81, 102, false),
    ("Clefairy", Fairy, 70, 45, true),
    ("Clefable", Fairy, 95, 70, false),
    ("Vulpix", Fire, 38, 41, true),
    ("Ninetales", Fire, 73, 76, false),
    ("Jigglypuff", Normal, 115, 45, true),
    ("Wigglytuff", Normal, 140, 70, false),
    ("Zubat", Poison, 40, 45, true),
    ("Golbat", Poison, 75, 80, false),
    ("Oddish", Grass, 45, 50, true),
    ("Gloom", Grass, 60, 65, true),
    ("Vileplume", Grass, 75, 80, false),
    ("Paras", Bug, 35, 70, true),
    ("Parasect", Bug, 60, 95, false),
    ("Venonat", Bug, 60, 55, true),
    ("Venomoth", Bug, 70, 65, false),
    ("Diglett", Ground, 10, 55, true),
    ("Dugtrio", Ground, 35, 100, false),
    ("Meowth", Normal, 40, 45, true),
    ("Persian", Normal, 65, 70, false),
    ("Psyduck", Water, 50, 52, true),
    ("Golduck", Water, 80, 82, false),
    ("Mankey", Fighting, 40, 80, true),
    ("Primeape", Fighting, 65, 105, false),
    ("Growlithe", Fire, 55, 70, true),
    ("Arcanine", Fire, 90, 110, false),
    ("Poliwag", Water, 40, 50, true),
    ("Poliwhirl", Water, 65, 65, true),
    ("Poliwrath", Water, 90, 95, false),
    ("Abra", Psychic, 25, 20, true),
    ("Kadabra", Psychic, 40, 35, true),
    ("Alakazam", Psychic, 55, 50, false),
    ("Machop", Fighting, 70, 80, true),
    ("Machoke", Fighting, 80, 100, true),
    ("Machamp", Fighting, 90, 130, false),
    ("Bellsprout", Grass, 50, 75, true),
    ("Weepinbell", Grass, 65, 90, true),
    ("Victreebel", Grass, 80, 105, false),
    ("Tentacool", Water, 40, 40, true),
    ("Tentacruel", Water, 80, 70, false),
    ("Geodude", Rock, 40, 80, true),
    ("Graveler", Rock, 55, 95, true),
    ("Golem", Rock, 80, 120, false),
    ("Ponyta", Fire, 50, 85, true),
    ("Rapidash", Fire, 65, 100, false),
    ("Slowpoke", Water, 90, 65, true),
    ("Slowbro", Water, 95, 75, false),
    ("Magnemite", Electric, 25, 35, true),
    ("Magneton", Electric, 50, 60, false),
    ("Farfetch'd", Normal, 52, 90, false),
    ("Doduo", Normal, 35, 85, true),
    ("Dodrio", Normal, 60, 110, false),
    ("Seel", Water, 65, 45, true),
    ("Dewgong", Water, 90, 70, false),
    ("Grimer", Poison, 80, 80, true),
    ("Muk", Poison, 105, 105, false),
    ("Shellder", Water, 30, 65, true),
    ("Cloyster", Water, 50, 95, false),
    ("Gastly", Ghost, 30, 35, true),
    ("Haunter", Ghost, 45, 50, true),
    ("Gengar", Ghost, 60, 65, false),
    ("Onix", Rock, 35, 45, false),
    ("Drowzee", Psychic, 60, 48, true),
    ("Hypno", Psychic, 85, 73, false),
    ("Krabby", Water, 30, 105, true),
    ("Kingler", Water, 55, 130, false),
    ("Voltorb", Electric, 40, 30, true),
    ("Electrode", Electric, 60, 50, false),
    ("Exeggcute", Grass, 60, 40, true),
    ("Exeggutor", Grass, 95, 95, false),
    ("Cubone", Ground, 50, 50, true),
    ("Marowak", Ground, 60, 80, false),
    ("Hitmonlee", Fighting, 50, 120, false),
    ("Hitmonchan", Fighting, 50, 105, false),
    ("Lickitung", Normal, 90, 55, false),
    ("Koffing", Poison, 40, 65, true),
    ("Weezing", Poison, 65, 90, false),
    ("Rhyhorn", Ground, 80, 85, true),
    ("Rhydon", Ground, 105, 130, false),
    ("Chansey", Normal, 250, 5, false),
    ("Tangela", Grass, 65, 55, false),
    ("Kangaskhan", Normal, 105, 95, false),
    ("Horsea", Water, 30, 40, true),
    ("Seadra", Water, 55, 65, false),
    ("Goldeen", Water, 45, 67, true),
    ("Seaking", Water, 80, 92, false),
    ("Staryu", Water, 30, 45, true),
    ("Starmie", Water, 60, 75, false),
    ("Mr. Mime", Psychic, 40, 45, false),
    ("Scyther", Bug, 70, 110, false),
    ("Jynx", Ice, 65, 50, false),
    ("Electabuzz", Electric, 65, 83, false),
    ("Magmar", Fire, 65, 95, false),
    ("Pinsir", Bug, 65, 125, false),
    ("Tauros", Normal, 75, 100, false),
    ("Magikarp", Water, 20, 10, true),
    ("Gyarados", Water, 95, 125, false),
    ("Lapras", Water, 130, 85, false),
    ("Ditto", Normal, 48, 48, false),
    ("Eevee", Normal, 55, 55, true),
    ("Vaporeon", Water, 130, 65, false),
    ("Jolteon", Electric, 65, 65, false),
    ("Flareon", Fire, 65, 130, false),
    ("Porygon", Normal, 65, 60, false),
    ("Omanyte", Rock, 35, 40, true),
    ("Omastar", Rock, 70, 60, false),
    ("Kabuto", Rock, 30, 80, true),
    ("Kabutops", Rock, 60, 115, false),
    ("Aerodactyl", Rock, 80, 105, false),
    ("Snorlax", Normal, 160, 110, false),
    ("Articuno", Ice, 90, 85, false),
    ("Zapdos", Electric, 90, 90, false),
    ("Moltres", Fire, 90, 100, false),
    ("Dratini", Dragon, 41, 64, true),
    ("Dragonair", Dragon, 61, 84, true),
    ("Dragonite", Dragon, 91, 134, false),
    ("Mewtwo", Psychic, 106, 110, false),
    ("Mew", Psychic, 100, 100, false),
];
