//! Pokemon response shape
//!
//! Target for `GET {base}/pokemon/{name}`. Only the fields the `catch` and
//! `inspect` commands display are decoded.

use serde::{Deserialize, Deserializer};

use super::NamedResource;

/// Decodes an explicit JSON `null` as the type's default value.
///
/// `#[serde(default)]` alone only covers a missing field, not `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One Pokemon as returned by the API.
///
/// `base_experience` is null in the API for some newer Pokemon; it defaults
/// to 0, which makes those a guaranteed catch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pokemon {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_experience: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
}

/// One base stat entry, e.g. `hp: 35`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One type slot, e.g. `electric`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
