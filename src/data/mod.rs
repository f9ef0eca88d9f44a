pub mod client;
pub mod error;
pub mod pokemon;

pub use client::{CreatureSource, PokeApiClient, DEFAULT_API_BASE};
pub use error::FetchError;
pub use pokemon::{combatant_from_value, normalize_identifier, PokemonRecord};
