//! Wire-format types for PokéAPI responses and their projection.
//!
//! Decoding is strict: a required field that is missing or mistyped fails
//! the decode, and the projection checks array lengths before indexing.

use serde::Deserialize;

use super::error::ProjectionError;
use crate::model::PokemonRecord;

/// Offsets into the detail `stats` array consumed by the projection.
///
/// The upstream API orders base stats hp, attack, defense, special-attack,
/// special-defense, speed. Extraction is positional, not name-keyed: if the
/// upstream ordering ever changes, these offsets mis-assign values without
/// any error surfacing.
const STAT_HP: usize = 0;
const STAT_ATTACK: usize = 1;
const STAT_DEFENSE: usize = 2;
const STAT_SPEED: usize = 5;

/// Number of stats entries the positional layout requires.
const MIN_STATS: usize = 6;

/// One page of the paginated catalog listing.
#[derive(Debug, Deserialize)]
pub struct ListingPage {
    /// Listed entries, in catalog order.
    pub results: Vec<ListingEntry>,
}

/// One element of the listing response.
///
/// Ephemeral: an entry exists only to drive its detail fetch and is
/// discarded afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    /// Pokémon name.
    pub name: String,
    /// Absolute URL of the per-item detail resource.
    pub url: String,
}

/// Detail body for a single Pokémon, reduced to the fields the projection
/// consumes. Unknown fields in the body are ignored.
#[derive(Debug, Deserialize)]
pub struct PokemonDetail {
    /// Source-assigned identifier.
    pub id: u32,
    /// Pokémon name.
    pub name: String,
    /// Type slots, slot order preserved. At least one expected.
    pub types: Vec<TypeSlot>,
    /// Sprite URLs.
    pub sprites: SpriteSet,
    /// Base stat entries, upstream order preserved. At least six expected.
    pub stats: Vec<StatEntry>,
}

/// One slot in the detail `types` array.
#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    /// The type resource occupying this slot.
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Name/URL pair PokéAPI uses for nested resources. Only the name matters
/// here.
#[derive(Debug, Deserialize)]
pub struct NamedResource {
    /// Resource name.
    pub name: String,
}

/// Sprite URLs attached to a detail body.
#[derive(Debug, Deserialize)]
pub struct SpriteSet {
    /// Default front sprite; null for some forms.
    pub front_default: Option<String>,
}

/// One entry of the detail `stats` array.
#[derive(Debug, Deserialize)]
pub struct StatEntry {
    /// Base stat value. Non-negative; a negative value fails the decode.
    pub base_stat: u32,
}

impl PokemonDetail {
    /// Projects the detail body into the flat export record.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] when the body has no types, or fewer
    /// stats entries than the positional layout indexes into. A short stats
    /// array is an explicit failure, never a defaulted value.
    pub fn project(self) -> Result<PokemonRecord, ProjectionError> {
        if self.stats.len() < MIN_STATS {
            return Err(ProjectionError::TruncatedStats {
                expected: MIN_STATS,
                actual: self.stats.len(),
            });
        }

        let mut types = self.types.into_iter();
        let primary_type = types
            .next()
            .map(|slot| slot.kind.name)
            .ok_or(ProjectionError::MissingPrimaryType)?;
        let secondary_type = types.next().map(|slot| slot.kind.name).unwrap_or_default();

        Ok(PokemonRecord {
            id: self.id,
            name: self.name,
            primary_type,
            secondary_type,
            sprite_url: self.sprites.front_default,
            hp: self.stats[STAT_HP].base_stat,
            attack: self.stats[STAT_ATTACK].base_stat,
            defense: self.stats[STAT_DEFENSE].base_stat,
            speed: self.stats[STAT_SPEED].base_stat,
        })
    }
}
