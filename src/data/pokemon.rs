//! PokeAPI creature records and their conversion into combatants.
//! Only `name` and the `hp`/`attack` entries of `stats` are read.

use serde::Deserialize;

use crate::combat::Combatant;
use crate::data::error::FetchError;

pub const HP_STAT: &str = "hp";
pub const ATTACK_STAT: &str = "attack";

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

impl PokemonRecord {
    /// Base value of the named stat. The last entry wins on duplicates.
    pub fn base_stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .rev()
            .find(|entry| entry.stat.name == name)
            .map(|entry| entry.base_stat)
    }

    pub fn into_combatant(self, identifier: &str) -> Result<Combatant, FetchError> {
        let missing = |stat: &str| FetchError::Malformed {
            identifier: identifier.to_string(),
            reason: format!("missing '{stat}' stat"),
        };
        let hp = self.base_stat(HP_STAT).ok_or_else(|| missing(HP_STAT))?;
        let attack = self.base_stat(ATTACK_STAT).ok_or_else(|| missing(ATTACK_STAT))?;
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| identifier.to_string());
        Ok(Combatant::new(name, i64::from(hp), attack))
    }
}

/// Parse an upstream JSON document into a combatant.
pub fn combatant_from_value(
    identifier: &str,
    value: &serde_json::Value,
) -> Result<Combatant, FetchError> {
    let record = PokemonRecord::deserialize(value).map_err(|err| FetchError::Malformed {
        identifier: identifier.to_string(),
        reason: err.to_string(),
    })?;
    record.into_combatant(identifier)
}

/// Trim and lowercase a name or numeric id. Only ASCII alphanumerics and `-`
/// are accepted, so the identifier is always a single URL path segment.
pub fn normalize_identifier(raw: &str) -> Result<String, FetchError> {
    let normalized = raw.trim().to_ascii_lowercase();
    let valid = !normalized.is_empty()
        && normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(normalized)
    } else {
        Err(FetchError::InvalidIdentifier(raw.to_string()))
    }
}
