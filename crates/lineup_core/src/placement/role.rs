//! Closed role and lane codes.
//!
//! The lineup service sends `amplua` and `field_position` as loose string
//! codes. They are parsed here once; every other module only ever sees
//! [`Role`] and [`Lane`].
//!
//! Pitch tables (percent of pitch, own goal line at y = 0):
//!
//! | Role | y  |   | Lane | base x | bounds   |
//! |------|----|---|------|--------|----------|
//! | Gk   | 5  |   | L    | 18     | [6, 24]  |
//! | D    | 25 |   | LC   | 34     | [24, 42] |
//! | DM   | 40 |   | C    | 50     | [42, 58] |
//! | M    | 52 |   | RC   | 66     | [58, 76] |
//! | AM   | 64 |   | R    | 82     | [76, 94] |
//! | F    | 76 |   |      |        |          |

use crate::models::{CoarsePosition, PlacementSource};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inner margin kept between a spread player and the lane edge.
pub const LANE_MARGIN: f32 = 2.0;

/// Fine-grained tactical role (amplua).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Gk,
    D,
    DM,
    M,
    AM,
    F,
}

impl Role {
    pub const ALL: [Role; 6] = [Role::Gk, Role::D, Role::DM, Role::M, Role::AM, Role::F];

    /// Exact, case-sensitive code match.
    pub fn parse(code: &str) -> Option<Role> {
        match code {
            "Gk" => Some(Role::Gk),
            "D" => Some(Role::D),
            "DM" => Some(Role::DM),
            "M" => Some(Role::M),
            "AM" => Some(Role::AM),
            "F" => Some(Role::F),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Role::Gk => "Gk",
            Role::D => "D",
            Role::DM => "DM",
            Role::M => "M",
            Role::AM => "AM",
            Role::F => "F",
        }
    }

    /// Canonical role for a coarse bucket. MID is the default bucket.
    pub fn for_bucket(bucket: CoarsePosition) -> Role {
        match bucket {
            CoarsePosition::GK => Role::Gk,
            CoarsePosition::DEF => Role::D,
            CoarsePosition::FWD => Role::F,
            CoarsePosition::MID | CoarsePosition::Unknown => Role::M,
        }
    }

    /// Distance from the own goal line, in percent of pitch length.
    pub fn y(&self) -> f32 {
        match self {
            Role::Gk => 5.0,
            Role::D => 25.0,
            Role::DM => 40.0,
            Role::M => 52.0,
            Role::AM => 64.0,
            Role::F => 76.0,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Horizontal band across the pitch, left to right.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lane {
    L,
    LC,
    C,
    RC,
    R,
}

impl Lane {
    pub const ALL: [Lane; 5] = [Lane::L, Lane::LC, Lane::C, Lane::RC, Lane::R];

    /// Exact, case-sensitive code match.
    pub fn parse(code: &str) -> Option<Lane> {
        match code {
            "L" => Some(Lane::L),
            "LC" => Some(Lane::LC),
            "C" => Some(Lane::C),
            "RC" => Some(Lane::RC),
            "R" => Some(Lane::R),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lane::L => "L",
            Lane::LC => "LC",
            Lane::C => "C",
            Lane::RC => "RC",
            Lane::R => "R",
        }
    }

    pub fn base_x(&self) -> f32 {
        match self {
            Lane::L => 18.0,
            Lane::LC => 34.0,
            Lane::C => 50.0,
            Lane::RC => 66.0,
            Lane::R => 82.0,
        }
    }

    /// Inclusive lane bounds `(min, max)` before the margin is applied.
    pub fn bounds(&self) -> (f32, f32) {
        match self {
            Lane::L => (6.0, 24.0),
            Lane::LC => (24.0, 42.0),
            Lane::C => (42.0, 58.0),
            Lane::RC => (58.0, 76.0),
            Lane::R => (76.0, 94.0),
        }
    }

    /// Range a player in this lane may occupy: bounds shrunk by [`LANE_MARGIN`].
    pub fn clamp_range(&self) -> (f32, f32) {
        let (min, max) = self.bounds();
        (min + LANE_MARGIN, max - LANE_MARGIN)
    }

    pub fn clamp_x(&self, x: f32) -> f32 {
        let (lo, hi) = self.clamp_range();
        x.clamp(lo, hi)
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolved, always-defined placement cell of a starter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlacementRole {
    pub role: Role,
    pub lane: Lane,
}

impl PlacementRole {
    pub fn new(role: Role, lane: Lane) -> Self {
        Self { role, lane }
    }

    /// Raw codes are used only when both parse; otherwise the bucket's
    /// canonical role in the centre lane.
    pub fn resolve(player: &impl PlacementSource) -> PlacementRole {
        let role = player.amplua().and_then(Role::parse);
        let lane = player.field_position().and_then(Lane::parse);

        match (role, lane) {
            (Some(role), Some(lane)) => PlacementRole { role, lane },
            _ => PlacementRole { role: Role::for_bucket(player.coarse_position()), lane: Lane::C },
        }
    }

    /// `amplua|lane` tag, e.g. `DM|LC`.
    pub fn cell_key(&self) -> String {
        format!("{}|{}", self.role.code(), self.lane.code())
    }
}

impl fmt::Display for PlacementRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}|{}", self.role, self.lane)
    }
}
