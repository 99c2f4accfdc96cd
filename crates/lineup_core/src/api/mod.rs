pub mod lineup_json;

pub use lineup_json::{
    order_lineup_json, place_lineup_json, place_match_json, LineupRequest, MatchLayoutRequest,
    MatchLayoutResponse, OrderResponse, OrderedEntry, PlacementRequest, PlacementResponse,
    TeamLineup,
};
