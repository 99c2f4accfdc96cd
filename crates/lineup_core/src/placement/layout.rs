//! Both starting elevens on one match-center pitch.

use super::mapper::{place_lineup, PositionedPlayer};
use super::transform::{PitchTransform, TeamSide};
use crate::models::PlacementSource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchLayout<P> {
    pub home: Vec<PositionedPlayer<P>>,
    pub away: Vec<PositionedPlayer<P>>,
}

/// Orders and places both teams. Home defends the bottom goal unless
/// `flipped`; away always faces home.
pub fn place_match<P: PlacementSource + Clone>(home: &[P], away: &[P], flipped: bool) -> MatchLayout<P> {
    MatchLayout {
        home: place_lineup(home, PitchTransform::for_side(TeamSide::Home, flipped)),
        away: place_lineup(away, PitchTransform::for_side(TeamSide::Away, flipped)),
    }
}
