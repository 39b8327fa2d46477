//! Typed client for the PokéAPI REST interface.
//!
//! This module covers the wire side of a harvest: one paginated listing
//! fetch plus a detail fetch per listed entry, decoded into strict `serde`
//! structs rather than duck-typed JSON access, so a malformed body surfaces
//! as an explicit error instead of a mis-assigned record.
//!
//! - [`PokeApiClient`] - HTTP client for the listing and detail endpoints
//! - [`ListingEntry`], [`PokemonDetail`] - wire-format types
//! - [`FetchError`], [`ProjectionError`] - fetch and projection failures

mod client;
mod error;
mod wire;

pub use client::{
    CONNECT_TIMEOUT_SECS, DEFAULT_LISTING_ENDPOINT, DEFAULT_PAGE_SIZE, DEFAULT_READ_TIMEOUT_SECS,
    PokeApiClient,
};
pub use error::{FetchError, ProjectionError};
pub use wire::{ListingEntry, ListingPage, PokemonDetail};
