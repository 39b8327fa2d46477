//! Normalized output record for harvested Pokémon.

use serde::Serialize;

/// One harvested Pokémon, flattened into the fixed export schema.
///
/// Records are constructed one at a time during a harvest and are immutable
/// afterwards. An entry either projects into a complete record or produces
/// nothing; partial records never exist. Serde renames match the column
/// names of the exported dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonRecord {
    /// Source-assigned identifier, unique across the catalog.
    pub id: u32,

    /// Pokémon name, unique within a harvest.
    pub name: String,

    /// First listed type. Always present.
    #[serde(rename = "type_1")]
    pub primary_type: String,

    /// Second listed type, or the empty string when the Pokémon has only
    /// one. The empty string is the canonical "no second type" sentinel;
    /// this field is never null or absent.
    #[serde(rename = "type_2")]
    pub secondary_type: String,

    /// Default front sprite URL, passed through unvalidated. `None` for the
    /// handful of forms the source ships without a sprite.
    #[serde(rename = "img_url")]
    pub sprite_url: Option<String>,

    /// Base HP stat.
    pub hp: u32,

    /// Base attack stat.
    pub attack: u32,

    /// Base defense stat.
    pub defense: u32,

    /// Base speed stat.
    pub speed: u32,
}
