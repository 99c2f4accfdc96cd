//! Formation placement engine.
//!
//! Data flows one way: roster → [`resolve_order`] → [`place`] → positioned
//! roster. Everything here is pure; the tables are compile-time constants
//! and calls may run concurrently without locking.

pub mod cache;
pub mod layout;
pub mod mapper;
pub mod order;
pub mod role;
pub mod transform;

pub use cache::{lineup_fingerprint, PlacementCache, DEFAULT_CACHE_CAPACITY};
pub use layout::{place_match, MatchLayout};
pub use mapper::{place, place_lineup, PitchCoord, PositionedPlayer, MAX_STARTERS, SPREAD_STEP};
pub use order::{resolve_order, resolve_order_detailed, sort_order, OrderedPlayer, DEFAULT_SORT_ORDER};
pub use role::{Lane, PlacementRole, Role, LANE_MARGIN};
pub use transform::{Orientation, PitchTransform, TeamSide};
