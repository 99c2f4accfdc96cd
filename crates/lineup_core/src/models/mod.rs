pub mod player;

pub use player::{CoarsePosition, LineupPlayer, PlacementSource, PlayerId};
