//! Coordinate Mapper
//!
//! Turns an ordered starting eleven into pitch coordinates (percent of
//! width/height, own goal line at the bottom).
//!
//! 1. cap at [`MAX_STARTERS`]
//! 2. resolve each starter's [`PlacementRole`]
//! 3. group starters sharing a role+lane cell
//! 4. base coordinate from the role/lane tables
//! 5. spread cell members symmetrically by [`SPREAD_STEP`], clamped to the lane
//! 6. apply the [`PitchTransform`]

use super::order::resolve_order;
use super::role::PlacementRole;
use super::transform::PitchTransform;
use crate::models::PlacementSource;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Only the first eleven ordered starters are placed.
pub const MAX_STARTERS: usize = 11;

/// Horizontal gap between players sharing a cell.
pub const SPREAD_STEP: f32 = 4.0;

/// Position on the pitch diagram in percent. Both axes stay within `[0, 100]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PitchCoord {
    pub x: f32,
    pub y: f32,
}

/// Starter paired with its marker position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionedPlayer<P> {
    pub player: P,
    pub coord: PitchCoord,
}

/// Players sharing one role+lane, in arrival order.
struct Cell {
    role: PlacementRole,
    members: Vec<usize>,
}

/// Groups slot indices by cell, cells in first-seen order.
fn group_cells(roles: &[PlacementRole]) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::new();
    for (slot, role) in roles.iter().enumerate() {
        match cells.iter_mut().find(|c| c.role == *role) {
            Some(cell) => cell.members.push(slot),
            None => cells.push(Cell { role: *role, members: vec![slot] }),
        }
    }
    cells
}

/// Offset of the `index`-th of `count` cell members from the lane's base x.
pub fn spread_offset(index: usize, count: usize) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    (index as f32 - (count - 1) as f32 / 2.0) * SPREAD_STEP
}

/// Untransformed coordinate of one cell member.
pub fn cell_coord(role: PlacementRole, index: usize, count: usize) -> PitchCoord {
    let x = role.lane.clamp_x(role.lane.base_x() + spread_offset(index, count));
    PitchCoord { x, y: role.role.y() }
}

/// Coordinates for `ordered`, index-aligned with the (capped) input.
pub(crate) fn place_coords<P: PlacementSource>(
    ordered: &[P],
    transform: PitchTransform,
) -> Vec<PitchCoord> {
    let starters = &ordered[..ordered.len().min(MAX_STARTERS)];
    if starters.len() < ordered.len() {
        debug!(
            received = ordered.len(),
            placed = starters.len(),
            "lineup longer than {}, extra players left unplaced",
            MAX_STARTERS
        );
    }

    let roles: Vec<PlacementRole> = starters.iter().map(PlacementRole::resolve).collect();

    let mut coords = vec![PitchCoord { x: 50.0, y: 50.0 }; starters.len()];
    for cell in group_cells(&roles) {
        let count = cell.members.len();
        for (index, &slot) in cell.members.iter().enumerate() {
            coords[slot] = transform.apply(cell_coord(cell.role, index, count));
        }
    }
    coords
}

/// Places already-ordered starters.
///
/// Only order is trusted: pass the Order Resolver's output. Never fails;
/// missing or garbled codes fall back to the coarse bucket in lane `C`.
pub fn place<P: PlacementSource + Clone>(
    ordered: &[P],
    transform: PitchTransform,
) -> Vec<PositionedPlayer<P>> {
    place_coords(ordered, transform)
        .into_iter()
        .zip(ordered.iter())
        .map(|(coord, player)| PositionedPlayer { player: player.clone(), coord })
        .collect()
}

/// Orders and places a raw roster in one step.
pub fn place_lineup<P: PlacementSource + Clone>(
    players: &[P],
    transform: PitchTransform,
) -> Vec<PositionedPlayer<P>> {
    place(&resolve_order(players), transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoarsePosition, LineupPlayer};

    fn starter(id: i64, bucket: CoarsePosition, amplua: Option<&str>, lane: Option<&str>) -> LineupPlayer {
        let mut p = LineupPlayer::new(id, bucket);
        p.amplua = amplua.map(str::to_string);
        p.field_position = lane.map(str::to_string);
        p
    }

    fn coord_of(bucket: CoarsePosition, amplua: Option<&str>, lane: Option<&str>) -> (f32, f32) {
        let placed = place(&[starter(1, bucket, amplua, lane)], PitchTransform::default());
        (placed[0].coord.x, placed[0].coord.y)
    }

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_role_lane_table() {
        assert_eq!(coord_of(CoarsePosition::GK, Some("Gk"), Some("C")), (50.0, 5.0));
        assert_eq!(coord_of(CoarsePosition::DEF, Some("D"), Some("LC")), (34.0, 25.0));
        assert_eq!(coord_of(CoarsePosition::MID, Some("DM"), Some("R")), (82.0, 40.0));
        assert_eq!(coord_of(CoarsePosition::MID, Some("AM"), Some("LC")), (34.0, 64.0));
        assert_eq!(coord_of(CoarsePosition::FWD, Some("F"), Some("C")), (50.0, 76.0));
    }

    #[test]
    fn test_bucket_fallback_placement() {
        assert_eq!(coord_of(CoarsePosition::GK, None, None), (50.0, 5.0));
        assert_eq!(coord_of(CoarsePosition::DEF, None, None), (50.0, 25.0));
        assert_eq!(coord_of(CoarsePosition::MID, None, Some("RC")), (50.0, 52.0));
        assert_eq!(coord_of(CoarsePosition::FWD, None, None), (50.0, 76.0));
        assert_eq!(coord_of(CoarsePosition::Unknown, Some("??"), None), (50.0, 52.0));
    }

    #[test]
    fn test_duplicate_cell_spreads_symmetrically() {
        let trio: Vec<LineupPlayer> = (1..=3)
            .map(|id| starter(id, CoarsePosition::MID, Some("DM"), Some("LC")))
            .collect();

        let placed = place(&trio, PitchTransform::default());
        let xs: Vec<f32> = placed.iter().map(|p| p.coord.x).collect();
        assert_eq!(xs, vec![30.0, 34.0, 38.0]);
        assert!(placed.iter().all(|p| p.coord.y == 40.0));
    }

    #[test]
    fn test_pair_spreads_half_step() {
        let pair = vec![
            starter(1, CoarsePosition::DEF, Some("D"), Some("C")),
            starter(2, CoarsePosition::DEF, Some("D"), Some("C")),
        ];
        let placed = place(&pair, PitchTransform::default());
        assert_eq!(placed[0].coord.x, 48.0);
        assert_eq!(placed[1].coord.x, 52.0);
    }

    #[test]
    fn test_crowded_cell_is_clamped_to_lane() {
        // five centre-backs in lane L: 10, 14, 18, 22, 26 -> last clamps to 22
        let crowd: Vec<LineupPlayer> = (1..=5)
            .map(|id| starter(id, CoarsePosition::DEF, Some("D"), Some("L")))
            .collect();
        let placed = place(&crowd, PitchTransform::default());
        let xs: Vec<f32> = placed.iter().map(|p| p.coord.x).collect();
        assert_eq!(xs, vec![10.0, 14.0, 18.0, 22.0, 22.0]);

        // eleven goalkeepers in lane C: clamp range [44, 56]
        let keepers: Vec<LineupPlayer> =
            (1..=11).map(|id| starter(id, CoarsePosition::GK, None, None)).collect();
        for p in place(&keepers, PitchTransform::default()) {
            assert!(p.coord.x >= 44.0 && p.coord.x <= 56.0, "x = {}", p.coord.x);
        }
    }

    #[test]
    fn test_cells_are_independent() {
        let roster = vec![
            starter(1, CoarsePosition::DEF, Some("D"), Some("LC")),
            starter(2, CoarsePosition::MID, Some("DM"), Some("LC")),
            starter(3, CoarsePosition::DEF, Some("D"), Some("LC")),
        ];
        let placed = place(&roster, PitchTransform::default());
        assert_eq!((placed[0].coord.x, placed[0].coord.y), (32.0, 25.0));
        assert_eq!((placed[1].coord.x, placed[1].coord.y), (34.0, 40.0));
        assert_eq!((placed[2].coord.x, placed[2].coord.y), (36.0, 25.0));
    }

    #[test]
    fn test_transforms() {
        let roster = vec![
            starter(1, CoarsePosition::GK, Some("Gk"), Some("C")),
            starter(2, CoarsePosition::DEF, Some("D"), Some("L")),
        ];
        let placed = place(&roster, PitchTransform::new(true, true));
        assert_eq!((placed[0].coord.x, placed[0].coord.y), (50.0, 95.0));
        assert_eq!((placed[1].coord.x, placed[1].coord.y), (82.0, 75.0));
    }

    #[test]
    fn test_transform_applies_after_spread() {
        let trio: Vec<LineupPlayer> = (1..=3)
            .map(|id| starter(id, CoarsePosition::MID, Some("DM"), Some("LC")))
            .collect();
        let placed = place(&trio, PitchTransform::new(false, true));
        let xs: Vec<f32> = placed.iter().map(|p| p.coord.x).collect();
        assert_eq!(xs, vec![70.0, 66.0, 62.0]);
    }

    #[test]
    fn test_caps_at_eleven() {
        let roster: Vec<LineupPlayer> =
            (1..=14).map(|id| starter(id, CoarsePosition::MID, None, None)).collect();
        let placed = place(&roster, PitchTransform::default());
        assert_eq!(placed.len(), MAX_STARTERS);
        let ids: Vec<String> = placed.iter().map(|p| p.player.id.to_string()).collect();
        let expected: Vec<String> = (1..=11).map(|id: i64| id.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_place_lineup_caps_after_ordering() {
        // three forwards listed first must not push the keeper out
        let mut roster: Vec<LineupPlayer> =
            (1..=13).map(|id| starter(id, CoarsePosition::FWD, Some("F"), Some("C"))).collect();
        roster.push(starter(99, CoarsePosition::GK, Some("Gk"), Some("C")));

        let placed = place_lineup(&roster, PitchTransform::default());
        assert_eq!(placed.len(), MAX_STARTERS);
        assert_eq!(placed[0].player.id.to_string(), "99");
        assert_eq!((placed[0].coord.x, placed[0].coord.y), (50.0, 5.0));
    }

    #[test]
    fn test_output_keeps_input_order_and_payload() {
        let mut a = starter(1, CoarsePosition::FWD, Some("F"), Some("L"));
        a.extra.insert("name".into(), serde_json::json!("A"));
        let b = starter(2, CoarsePosition::GK, None, None);

        let placed = place(&[a.clone(), b.clone()], PitchTransform::default());
        assert_eq!(placed[0].player, a);
        assert_eq!(placed[1].player, b);
    }

    #[test]
    fn test_spread_offset_values() {
        assert_eq!(spread_offset(0, 1), 0.0);
        assert!(approx_eq(spread_offset(0, 2), -2.0));
        assert!(approx_eq(spread_offset(1, 2), 2.0));
        assert!(approx_eq(spread_offset(0, 3), -4.0));
        assert!(approx_eq(spread_offset(2, 3), 4.0));
    }

    #[test]
    fn test_empty_lineup() {
        let roster: Vec<LineupPlayer> = Vec::new();
        assert!(place(&roster, PitchTransform::new(true, true)).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let roster = vec![
            starter(1, CoarsePosition::DEF, Some("D"), Some("RC")),
            starter(2, CoarsePosition::DEF, Some("D"), Some("RC")),
            starter(3, CoarsePosition::MID, Some("bogus"), None),
        ];
        let t = PitchTransform::new(false, true);
        assert_eq!(place_lineup(&roster, t), place_lineup(&roster, t));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_bucket() -> impl Strategy<Value = CoarsePosition> {
            prop_oneof![
                Just(CoarsePosition::GK),
                Just(CoarsePosition::DEF),
                Just(CoarsePosition::MID),
                Just(CoarsePosition::FWD),
                Just(CoarsePosition::Unknown),
            ]
        }

        fn arb_code(codes: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
            prop_oneof![
                Just(None),
                proptest::sample::select(codes).prop_map(|c| Some(c.to_string())),
                "[a-zA-Z]{0,3}".prop_map(Some),
            ]
        }

        fn arb_roster() -> impl Strategy<Value = Vec<LineupPlayer>> {
            prop::collection::vec(
                (
                    arb_bucket(),
                    arb_code(&["Gk", "D", "DM", "M", "AM", "F"]),
                    arb_code(&["L", "LC", "C", "RC", "R"]),
                ),
                0..16,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (bucket, amplua, lane))| {
                        let mut p = LineupPlayer::new(i as i64, bucket);
                        p.amplua = amplua;
                        p.field_position = lane;
                        p
                    })
                    .collect()
            })
        }

        proptest! {
            /// Property: every coordinate stays on the pitch for any flags
            #[test]
            fn prop_coords_in_range(roster in arb_roster(), invert_y in any::<bool>(), mirror_x in any::<bool>()) {
                for p in place_lineup(&roster, PitchTransform::new(invert_y, mirror_x)) {
                    prop_assert!(p.coord.x.is_finite() && p.coord.y.is_finite());
                    prop_assert!((0.0..=100.0).contains(&p.coord.x));
                    prop_assert!((0.0..=100.0).contains(&p.coord.y));
                }
            }

            /// Property: untransformed x stays inside the resolved lane minus margin
            #[test]
            fn prop_x_inside_lane(roster in arb_roster()) {
                for p in place_lineup(&roster, PitchTransform::IDENTITY) {
                    let role = PlacementRole::resolve(&p.player);
                    let (lo, hi) = role.lane.clamp_range();
                    prop_assert!(p.coord.x >= lo && p.coord.x <= hi);
                    prop_assert_eq!(p.coord.y, role.role.y());
                }
            }

            /// Property: placement never exceeds eleven and never drops a starter below that
            #[test]
            fn prop_cardinality(roster in arb_roster()) {
                let placed = place_lineup(&roster, PitchTransform::IDENTITY);
                prop_assert_eq!(placed.len(), roster.len().min(MAX_STARTERS));
            }

            /// Property: same input, same output
            #[test]
            fn prop_deterministic(roster in arb_roster(), invert_y in any::<bool>(), mirror_x in any::<bool>()) {
                let t = PitchTransform::new(invert_y, mirror_x);
                prop_assert_eq!(place_lineup(&roster, t), place_lineup(&roster, t));
            }
        }
    }
}
