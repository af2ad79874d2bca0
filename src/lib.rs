//! seatgrid
//!
//! Configuration tables, label catalogs, and small pure helpers backing a
//! seat/venue floor-plan editor.
//!
//! ### Features
//! - Alphabetic row/column keys (bijective base-26, spreadsheet style)
//! - Seat, node, and booking state dictionaries with display labels
//! - Built-in tag presets and the draggable node palette
//! - Node outline styles and gradient fills for multi-tag coloring
//! - Grid rebuild that preserves surviving cells across resizes
//!
//! ### Example
//! ```
//! use seatgrid::{alpha, grid, models::SeatLayout};
//!
//! let layout = SeatLayout {
//!     rows: 3,
//!     cols: 28,
//!     ..SeatLayout::default()
//! };
//! let items = grid::calc_items(&layout);
//! assert_eq!(items.len(), 3);
//!
//! // Header for the 28th column, spreadsheet style.
//! assert_eq!(alpha::encode(27), "AB");
//! assert_eq!(alpha::decode("AB")?, 27);
//! # Ok::<(), seatgrid::alpha::InvalidLabel>(())
//! ```

pub mod alpha;
pub mod catalog;
pub mod grid;
pub mod models;
pub mod routes;
pub mod style;

pub use alpha::{InvalidLabel, decode, encode};
pub use models::{NodeItem, NodeState, NodeType, SeatItem, SeatLayout, SeatState, Tag};
