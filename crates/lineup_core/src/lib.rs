//! # lineup_core - Starting Eleven Placement Engine
//!
//! Turns an unordered list of starters into deterministic pitch-diagram
//! coordinates for the match center and team pages.
//!
//! ## Features
//! - Backend-compatible lineup ordering (goalkeeper, defence left to right, ...)
//! - Role/lane placement with symmetric spreading of shared cells
//! - Mirror / invert transforms for away teams and flipped pitches
//! - JSON API for the web front end

// Doc formatting lints - purely cosmetic, fix incrementally
#![allow(clippy::doc_lazy_continuation)]

pub mod api;
pub mod error;
pub mod models;
pub mod placement;

// Re-export main API functions
pub use api::{order_lineup_json, place_lineup_json, place_match_json};
pub use error::{LineupError, Result};

pub use models::{CoarsePosition, LineupPlayer, PlacementSource, PlayerId};

pub use placement::{
    place, place_lineup, place_match, resolve_order, Lane, MatchLayout, PitchCoord,
    PitchTransform, PlacementCache, PlacementRole, PositionedPlayer, Role, TeamSide,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
