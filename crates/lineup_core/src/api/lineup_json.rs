//! JSON boundary for the lineup service and the pitch renderer.
//!
//! Requests carry `schema_version`; responses echo it back. Player objects
//! pass through untouched apart from the added order or coordinate.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{LineupError, Result};
use crate::models::LineupPlayer;
use crate::placement::{
    place_lineup, place_match, resolve_order_detailed, PitchTransform, PositionedPlayer,
};
use crate::SCHEMA_VERSION;

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        warn!("rejecting lineup request with schema_version {}", found);
        return Err(LineupError::UnsupportedSchemaVersion { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct LineupRequest {
    pub schema_version: u8,
    pub players: Vec<LineupPlayer>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderedEntry {
    pub sort_order: u8,
    pub player: LineupPlayer,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    pub schema_version: u8,
    pub players: Vec<OrderedEntry>,
}

#[derive(Debug, Deserialize)]
pub struct PlacementRequest {
    pub schema_version: u8,
    pub players: Vec<LineupPlayer>,
    #[serde(default)]
    pub invert_y: bool,
    #[serde(default)]
    pub mirror_x: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlacementResponse {
    pub schema_version: u8,
    pub players: Vec<PositionedPlayer<LineupPlayer>>,
}

#[derive(Debug, Deserialize)]
pub struct TeamLineup {
    pub players: Vec<LineupPlayer>,
}

#[derive(Debug, Deserialize)]
pub struct MatchLayoutRequest {
    pub schema_version: u8,
    pub home: TeamLineup,
    pub away: TeamLineup,
    /// Home defends the top goal instead of the bottom one.
    #[serde(default)]
    pub flipped: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchLayoutResponse {
    pub schema_version: u8,
    pub home: Vec<PositionedPlayer<LineupPlayer>>,
    pub away: Vec<PositionedPlayer<LineupPlayer>>,
}

/// Orders a roster the way the backend does.
pub fn order_lineup_json(request_json: &str) -> Result<String> {
    let request: LineupRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;
    debug!(players = request.players.len(), "order_lineup_json");

    let players = resolve_order_detailed(&request.players)
        .into_iter()
        .map(|o| OrderedEntry { sort_order: o.sort_order, player: o.player })
        .collect();

    let response = OrderResponse { schema_version: SCHEMA_VERSION, players };
    Ok(serde_json::to_string(&response)?)
}

/// Orders and places one team.
pub fn place_lineup_json(request_json: &str) -> Result<String> {
    let request: PlacementRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let transform = PitchTransform::new(request.invert_y, request.mirror_x);
    debug!(players = request.players.len(), ?transform, "place_lineup_json");

    let response = PlacementResponse {
        schema_version: SCHEMA_VERSION,
        players: place_lineup(&request.players, transform),
    };
    Ok(serde_json::to_string(&response)?)
}

/// Orders and places both teams on one pitch.
pub fn place_match_json(request_json: &str) -> Result<String> {
    let request: MatchLayoutRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;
    debug!(
        home = request.home.players.len(),
        away = request.away.players.len(),
        flipped = request.flipped,
        "place_match_json"
    );

    let layout = place_match(&request.home.players, &request.away.players, request.flipped);
    let response =
        MatchLayoutResponse { schema_version: SCHEMA_VERSION, home: layout.home, away: layout.away };
    Ok(serde_json::to_string(&response)?)
}
