//! Named API resource
//!
//! PokeAPI wraps most references to other resources in a `{ name, url }`
//! object; the commands only ever need the name.

use serde::Deserialize;

/// A reference to another API resource by name.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    /// Resource name, e.g. a Pokemon, stat, or type name
    #[serde(default)]
    pub name: String,
}
