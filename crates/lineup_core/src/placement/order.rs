//! Order Resolver
//!
//! Puts starters into the order the lineup backend uses: goalkeeper first,
//! then defenders left to right, the midfield band, and forwards.
//!
//! ## Resolution tiers
//! 1. fine key `amplua|field_position` in [`ORDERING_TABLE`]
//! 2. role-only key `amplua|_`
//! 3. coarse bucket (`GK=0`, `DEF=3`, `MID=10`, `FWD=13`)
//! 4. [`DEFAULT_SORT_ORDER`]
//!
//! Ties keep input order.

use super::role::{Lane, Role};
use crate::models::{CoarsePosition, PlacementSource};
use std::cmp::Ordering;
use tracing::debug;

/// Order given to a starter nothing else matches.
pub const DEFAULT_SORT_ORDER: u8 = 99;

/// Backend ordering convention. `None` is the `_` (no lane) key.
///
/// This mirrors an external contract entry for entry. Some rows look odd
/// (`M|L` after `M|C`); they are kept as the backend has them.
pub static ORDERING_TABLE: &[(Role, Option<Lane>, u8)] = &[
    // Goalkeeper
    (Role::Gk, Some(Lane::C), 0),
    (Role::Gk, None, 0),
    // Defence
    (Role::D, Some(Lane::L), 1),
    (Role::D, Some(Lane::LC), 2),
    (Role::D, Some(Lane::C), 3),
    (Role::D, None, 3),
    (Role::D, Some(Lane::RC), 4),
    (Role::D, Some(Lane::R), 5),
    // Defensive midfield
    (Role::DM, Some(Lane::L), 6),
    (Role::DM, Some(Lane::LC), 6),
    (Role::DM, Some(Lane::C), 6),
    (Role::DM, None, 6),
    (Role::DM, Some(Lane::RC), 7),
    (Role::DM, Some(Lane::R), 7),
    // Midfield
    (Role::M, Some(Lane::C), 7),
    (Role::M, Some(Lane::RC), 7),
    (Role::M, Some(Lane::R), 8),
    (Role::M, Some(Lane::L), 10),
    (Role::M, Some(Lane::LC), 10),
    (Role::M, None, 10),
    // Attacking midfield
    (Role::AM, Some(Lane::L), 9),
    (Role::AM, Some(Lane::LC), 9),
    (Role::AM, Some(Lane::C), 10),
    (Role::AM, None, 10),
    (Role::AM, Some(Lane::RC), 11),
    (Role::AM, Some(Lane::R), 11),
    // Attack
    (Role::F, Some(Lane::L), 12),
    (Role::F, Some(Lane::LC), 12),
    (Role::F, Some(Lane::C), 13),
    (Role::F, None, 13),
    (Role::F, Some(Lane::RC), 14),
    (Role::F, Some(Lane::R), 14),
];

fn table_lookup(role: Role, lane: Option<Lane>) -> Option<u8> {
    ORDERING_TABLE
        .iter()
        .find(|(r, l, _)| *r == role && *l == lane)
        .map(|&(_, _, order)| order)
}

fn bucket_order(bucket: CoarsePosition) -> Option<u8> {
    match bucket {
        CoarsePosition::GK => Some(0),
        CoarsePosition::DEF => Some(3),
        CoarsePosition::MID => Some(10),
        CoarsePosition::FWD => Some(13),
        CoarsePosition::Unknown => None,
    }
}

/// Backend sort order for a single starter.
///
/// An unrecognized lane code can never hit a fine key, so it lands on the
/// role-only row just like a missing lane does.
pub fn sort_order(player: &impl PlacementSource) -> u8 {
    let role = player.amplua().and_then(Role::parse);
    let lane = player.field_position().and_then(Lane::parse);

    role.and_then(|role| {
        lane.and_then(|lane| table_lookup(role, Some(lane))).or_else(|| table_lookup(role, None))
    })
    .or_else(|| bucket_order(player.coarse_position()))
    .unwrap_or(DEFAULT_SORT_ORDER)
}

/// Starter paired with its resolved order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedPlayer<P> {
    pub player: P,
    pub sort_order: u8,
    input_index: usize,
}

impl<P> OrderedPlayer<P> {
    fn compare(&self, other: &Self) -> Ordering {
        match self.sort_order.cmp(&other.sort_order) {
            Ordering::Equal => self.input_index.cmp(&other.input_index),
            ord => ord,
        }
    }

    pub(crate) fn input_index(&self) -> usize {
        self.input_index
    }
}

/// Orders starters and exposes each computed `sort_order`.
pub fn resolve_order_detailed<P: PlacementSource + Clone>(players: &[P]) -> Vec<OrderedPlayer<P>> {
    let mut ordered: Vec<OrderedPlayer<P>> = players
        .iter()
        .enumerate()
        .map(|(input_index, player)| OrderedPlayer {
            player: player.clone(),
            sort_order: sort_order(player),
            input_index,
        })
        .collect();

    ordered.sort_by(|a, b| a.compare(b));

    debug!(players = ordered.len(), "resolved lineup order");
    ordered
}

/// Sorted copy of `players` in backend order. Never touches the input.
pub fn resolve_order<P: PlacementSource + Clone>(players: &[P]) -> Vec<P> {
    resolve_order_detailed(players).into_iter().map(|o| o.player).collect()
}
