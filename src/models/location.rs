//! Location area response shape
//!
//! Target for `GET {base}/location-area/{id or name}`.

use serde::Deserialize;

use super::NamedResource;

/// One in-game location area and the Pokemon encounterable there.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationArea {
    /// Area name, e.g. `canalave-city-area`
    #[serde(default)]
    pub name: String,
    /// Possible encounters in this area
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A single possible encounter within a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    /// The encounterable Pokemon
    pub pokemon: NamedResource,
}
