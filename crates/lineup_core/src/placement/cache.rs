//! Memoized placement.
//!
//! Placement is cheap and pure, so this is purely an optimisation for
//! callers that redraw the same lineup many times. Only the three
//! placement-relevant fields and the flags are fingerprinted; payload is
//! never cached, the caller's own players are re-paired on every hit.
//! Callers need no eviction of their own: the cache is bounded.

use super::mapper::{place_coords, PitchCoord, PositionedPlayer};
use super::order::resolve_order_detailed;
use super::transform::PitchTransform;
use crate::models::{CoarsePosition, PlacementSource};
use fxhash::{FxHashMap, FxHasher};
use std::collections::hash_map::Entry;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Version-stable fingerprint of what placement depends on.
pub fn lineup_fingerprint<P: PlacementSource>(players: &[P], transform: PitchTransform) -> u64 {
    let mut hasher = FxHasher::default();
    players.len().hash(&mut hasher);
    for p in players {
        p.coarse_position().hash(&mut hasher);
        p.amplua().hash(&mut hasher);
        p.field_position().hash(&mut hasher);
    }
    transform.hash(&mut hasher);
    hasher.finish()
}

/// Placement-relevant fields of a roster, in input order.
type RosterSignature = Vec<(CoarsePosition, Option<String>, Option<String>)>;

fn roster_signature<P: PlacementSource>(players: &[P]) -> RosterSignature {
    players
        .iter()
        .map(|p| {
            (
                p.coarse_position(),
                p.amplua().map(str::to_string),
                p.field_position().map(str::to_string),
            )
        })
        .collect()
}

/// Entries kept before the cache starts over.
pub const DEFAULT_CACHE_CAPACITY: usize = 512;

#[derive(Debug, Clone)]
struct CachedLayout {
    /// Exact roster + flags this layout was computed for. Fingerprints can
    /// collide; a hit only counts when this matches too.
    signature: RosterSignature,
    transform: PitchTransform,
    /// Input indices in resolved order, already capped.
    order: Vec<usize>,
    coords: Vec<PitchCoord>,
}

impl CachedLayout {
    fn build<P: PlacementSource>(
        players: &[P],
        signature: RosterSignature,
        transform: PitchTransform,
    ) -> Self {
        let ordered = resolve_order_detailed(&players.iter().collect::<Vec<&P>>());
        let refs: Vec<&&P> = ordered.iter().map(|o| &o.player).collect();
        let coords = place_coords(&refs, transform);
        let order = ordered.iter().take(coords.len()).map(|o| o.input_index()).collect();
        Self { signature, transform, order, coords }
    }

    fn matches(&self, signature: &RosterSignature, transform: PitchTransform) -> bool {
        self.transform == transform && self.signature == *signature
    }
}

/// Bounded memo of lineup layouts.
///
/// Holds at most `capacity` layouts; inserting past that drops every entry
/// and starts over.
#[derive(Debug)]
pub struct PlacementCache {
    entries: FxHashMap<u64, CachedLayout>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for PlacementCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl PlacementCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero capacity is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: FxHashMap::default(), capacity: capacity.max(1), hits: 0, misses: 0 }
    }

    /// Same result as [`super::place_lineup`], served from the cache when
    /// the roles and flags were seen before.
    pub fn place_lineup<P: PlacementSource + Clone>(
        &mut self,
        players: &[P],
        transform: PitchTransform,
    ) -> Vec<PositionedPlayer<P>> {
        let key = lineup_fingerprint(players, transform);
        let signature = roster_signature(players);

        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            debug!(capacity = self.capacity, "placement cache full, clearing");
            self.entries.clear();
        }

        let layout = match self.entries.entry(key) {
            Entry::Occupied(entry) if entry.get().matches(&signature, transform) => {
                self.hits += 1;
                debug!(key, "placement cache hit");
                entry.into_mut()
            }
            Entry::Occupied(mut entry) => {
                self.misses += 1;
                debug!(key, "placement cache fingerprint collision, recomputing");
                entry.insert(CachedLayout::build(players, signature, transform));
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                debug!(key, "placement cache miss");
                entry.insert(CachedLayout::build(players, signature, transform))
            }
        };

        layout
            .order
            .iter()
            .zip(layout.coords.iter())
            .map(|(&idx, &coord)| PositionedPlayer { player: players[idx].clone(), coord })
            .collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
