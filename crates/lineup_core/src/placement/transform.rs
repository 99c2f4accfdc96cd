//! Pitch orientation.
//!
//! Placement always computes the "own goal at the bottom, attacking up"
//! view. A [`PitchTransform`] flips that view for the renderer:
//! `mirror_x` swaps left and right lanes, `invert_y` makes the team attack
//! downward.
//!
//! ## Environment Variables
//!
//! - `LINEUP_ORIENTATION`: process default profile
//!   (`home`, `away`, `flipped`, `away_flipped`)

use super::mapper::PitchCoord;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

pub const ORIENTATION_ENV: &str = "LINEUP_ORIENTATION";

/// Mirror / invert flags applied after placement.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PitchTransform {
    #[serde(default)]
    pub invert_y: bool,
    #[serde(default)]
    pub mirror_x: bool,
}

impl PitchTransform {
    pub const IDENTITY: PitchTransform = PitchTransform { invert_y: false, mirror_x: false };

    pub fn new(invert_y: bool, mirror_x: bool) -> Self {
        Self { invert_y, mirror_x }
    }

    /// Transform for one side of a shared match-center pitch.
    ///
    /// Home attacks upward; away is the point mirror of home. `flipped`
    /// rotates the whole pitch by 180°.
    pub fn for_side(side: TeamSide, flipped: bool) -> Self {
        let turned = matches!(side, TeamSide::Away) != flipped;
        Self { invert_y: turned, mirror_x: turned }
    }

    pub fn is_identity(&self) -> bool {
        !self.invert_y && !self.mirror_x
    }

    pub fn apply(&self, coord: PitchCoord) -> PitchCoord {
        PitchCoord {
            x: if self.mirror_x { 100.0 - coord.x } else { coord.x },
            y: if self.invert_y { 100.0 - coord.y } else { coord.y },
        }
    }

    /// Reads [`ORIENTATION_ENV`]. Missing or empty means identity; an
    /// unknown profile is logged and ignored.
    pub fn from_env_or_default() -> Self {
        match env::var(ORIENTATION_ENV) {
            Ok(value) => Self::from_profile_str(&value),
            Err(_) => Self::IDENTITY,
        }
    }

    fn from_profile_str(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return Self::IDENTITY;
        }
        match value.parse::<Orientation>() {
            Ok(profile) => profile.transform(),
            Err(e) => {
                warn!("{}='{}' ignored: {}", ORIENTATION_ENV, value, e);
                Self::IDENTITY
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

/// Named orientation presets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Home,
    Away,
    Flipped,
    AwayFlipped,
}

impl Orientation {
    pub fn transform(&self) -> PitchTransform {
        match self {
            Orientation::Home => PitchTransform::for_side(TeamSide::Home, false),
            Orientation::Away => PitchTransform::for_side(TeamSide::Away, false),
            Orientation::Flipped => PitchTransform::for_side(TeamSide::Home, true),
            Orientation::AwayFlipped => PitchTransform::for_side(TeamSide::Away, true),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Orientation::Home),
            "away" => Ok(Orientation::Away),
            "flipped" => Ok(Orientation::Flipped),
            "away_flipped" | "away-flipped" => Ok(Orientation::AwayFlipped),
            other => Err(format!("unknown orientation profile '{}'", other)),
        }
    }
}
