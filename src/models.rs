//! Core data types for the seat grid and the editor canvas.
//!
//! Field names and enum strings serialize to the JSON the editor front end
//! exchanges with the backend (`not_show`, `square_table`, ...), so a plan
//! saved on either side round-trips unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display state of one cell in a published floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatState {
    Available,
    Reserved,
    Blocked,
    NotShow,
}

impl SeatState {
    /// Label shown in the seat picker legend.
    pub fn label(self) -> &'static str {
        match self {
            SeatState::Available => "Available",
            SeatState::Reserved => "Reserved",
            SeatState::Blocked => "Unavailable",
            SeatState::NotShow => "Hidden",
        }
    }
}

/// State of a node while a plan is being authored on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    Normal,
    Blocked,
    NotShow,
}

impl NodeState {
    pub fn label(self) -> &'static str {
        match self {
            NodeState::Normal => "Normal",
            NodeState::Blocked => "Unavailable",
            NodeState::NotShow => "Hidden",
        }
    }
}

/// Kind of node that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Seat,
    Passage,
    SquareTable,
    CircleTable,
    RectangleTable,
    HexagonTable,
    OctagonTable,
    Background,
}

impl NodeType {
    pub fn label(self) -> &'static str {
        match self {
            NodeType::Seat => "Seat",
            NodeType::Passage => "Aisle",
            NodeType::SquareTable => "Square table",
            NodeType::CircleTable => "Round table",
            NodeType::RectangleTable => "Rectangular table",
            NodeType::HexagonTable => "Hexagon table",
            NodeType::OctagonTable => "Octagon table",
            NodeType::Background => "Background",
        }
    }
}

/// Identifier of a booking legend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingState {
    Bookable,
    BookedPeriod,
    Booked,
    Pending,
}

/// A tag attachable to seats, e.g. "Quiet" or "Sunny".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub title: String,
    /// CSS color used when shading tagged seats.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Width and height of a node, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// One cell of the seat grid.
///
/// `row` and `column` stay unset until the grid builder stamps the cell with
/// its position; `id` stays unset until the backend persists the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatItem {
    pub id: Option<i64>,
    pub row: Option<usize>,
    pub column: Option<usize>,
    pub state: SeatState,
    #[serde(rename = "type")]
    pub kind: NodeType,
    pub tags: Vec<u32>,
}

impl Default for SeatItem {
    fn default() -> Self {
        Self {
            id: None,
            row: None,
            column: None,
            state: SeatState::Available,
            kind: NodeType::Seat,
            tags: Vec::new(),
        }
    }
}

/// Shape of the grid. `normal` is the only kind the editor currently saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    #[default]
    Normal,
}

/// A rectangular seat plan plus its cell matrix.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeatLayout {
    #[serde(rename = "type")]
    pub kind: LayoutKind,
    pub items: Vec<Vec<SeatItem>>,
    pub rows: usize,
    pub cols: usize,
}

/// A node as stored by the canvas, before the backend assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeItem {
    pub id: Option<i64>,
    pub state: NodeState,
    #[serde(rename = "type")]
    pub kind: NodeType,
    pub tags: Vec<u32>,
    /// Free-form geometry blob owned by the canvas library.
    pub graph: Map<String, Value>,
    pub title: Option<String>,
}

impl NodeItem {
    /// A fresh node of the given kind, in the editor's default state.
    pub fn new(kind: NodeType, title: Option<String>) -> Self {
        Self {
            id: None,
            state: NodeState::Normal,
            kind,
            tags: Vec::new(),
            graph: Map::new(),
            title,
        }
    }
}

impl Default for NodeItem {
    fn default() -> Self {
        Self::new(NodeType::Seat, None)
    }
}
