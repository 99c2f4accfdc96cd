use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Coarse position bucket supplied by the lineup service.
///
/// Always present on a starter. `Unknown` absorbs bucket codes this crate
/// does not know about yet; it orders last and is placed as a midfielder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoarsePosition {
    GK,
    DEF,
    MID,
    FWD,
    #[serde(other)]
    Unknown,
}

impl CoarsePosition {
    pub fn code(&self) -> &'static str {
        match self {
            CoarsePosition::GK => "GK",
            CoarsePosition::DEF => "DEF",
            CoarsePosition::MID => "MID",
            CoarsePosition::FWD => "FWD",
            CoarsePosition::Unknown => "UNKNOWN",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, CoarsePosition::GK)
    }
}

impl fmt::Display for CoarsePosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Opaque player identifier. The backend sends either numbers or strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum PlayerId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerId::Number(n) => write!(f, "{}", n),
            PlayerId::Text(s) => f.write_str(s),
        }
    }
}

/// Read-only view the placement engine needs from a starter.
///
/// The engine never looks at anything else, so any roster type can be
/// placed by implementing these three accessors.
pub trait PlacementSource {
    fn coarse_position(&self) -> CoarsePosition;

    /// Raw fine role code (`Gk`, `D`, `DM`, `M`, `AM`, `F`), possibly garbled.
    fn amplua(&self) -> Option<&str>;

    /// Raw lane code (`L`, `LC`, `C`, `RC`, `R`), possibly garbled.
    fn field_position(&self) -> Option<&str>;
}

impl<T: PlacementSource + ?Sized> PlacementSource for &T {
    fn coarse_position(&self) -> CoarsePosition {
        (**self).coarse_position()
    }

    fn amplua(&self) -> Option<&str> {
        (**self).amplua()
    }

    fn field_position(&self) -> Option<&str> {
        (**self).field_position()
    }
}

/// Starter as delivered by the lineup endpoint.
///
/// # Boundary Contract
/// - `position` is the coarse bucket (`GK`/`DEF`/`MID`/`FWD`)
/// - `amplua` / `field_position` are kept as raw strings; validation happens
///   in `placement::role`, never here
/// - every other field (name, shirt number, captaincy, photo url...) lands in
///   `extra` and is written back untouched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineupPlayer {
    pub id: PlayerId,

    #[serde(rename = "position", alias = "coarse_position")]
    pub coarse_position: CoarsePosition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amplua: Option<String>,

    #[serde(default, alias = "fieldPosition", skip_serializing_if = "Option::is_none")]
    pub field_position: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineupPlayer {
    pub fn new(id: impl Into<PlayerId>, coarse_position: CoarsePosition) -> Self {
        Self {
            id: id.into(),
            coarse_position,
            amplua: None,
            field_position: None,
            extra: Map::new(),
        }
    }

    pub fn with_amplua(mut self, amplua: impl Into<String>) -> Self {
        self.amplua = Some(amplua.into());
        self
    }

    pub fn with_field_position(mut self, field_position: impl Into<String>) -> Self {
        self.field_position = Some(field_position.into());
        self
    }
}

impl From<i64> for PlayerId {
    fn from(n: i64) -> Self {
        PlayerId::Number(n)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        PlayerId::Text(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        PlayerId::Text(s)
    }
}

impl PlacementSource for LineupPlayer {
    fn coarse_position(&self) -> CoarsePosition {
        self.coarse_position
    }

    fn amplua(&self) -> Option<&str> {
        self.amplua.as_deref()
    }

    fn field_position(&self) -> Option<&str> {
        self.field_position.as_deref()
    }
}
