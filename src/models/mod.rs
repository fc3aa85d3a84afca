//! Data models for PokeAPI responses
//!
//! Deserialization targets for the subset of the API schema the commands
//! consume. Unknown fields in the responses are ignored.

mod location;
mod pokemon;
mod resource;

pub use location::{LocationArea, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonTypeSlot};
pub use resource::NamedResource;
