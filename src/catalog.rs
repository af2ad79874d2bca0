//! Built-in dictionaries: tag presets, the booking legend, authoring states,
//! and the sidebar palette of draggable node templates.

use crate::models::{BookingState, NodeType, SeatState, Tag};
use serde::Serialize;

/// The three stock tags offered when none have been configured yet.
pub fn default_tags() -> Vec<Tag> {
    vec![
        Tag {
            id: 1,
            title: "Quiet".to_owned(),
            color: "#37A0FB".to_owned(),
            icon: Some("quiet".to_owned()),
        },
        Tag {
            id: 2,
            title: "Sunny".to_owned(),
            color: "#F6B25F".to_owned(),
            icon: Some("sun".to_owned()),
        },
        Tag {
            id: 3,
            title: "Cozy".to_owned(),
            color: "#43BC69".to_owned(),
            icon: Some("comfort".to_owned()),
        },
    ]
}

/// One row of the booking legend shown next to the seat picker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookingStatus {
    pub id: BookingState,
    pub title: &'static str,
    /// Qualifier rendered after the title, e.g. "(recurring)".
    pub desc: Option<&'static str>,
    /// Overlay color; `None` leaves the seat unshaded.
    pub color: Option<&'static str>,
}

/// Legend entries in display order.
pub const BOOKING_LEGEND: [BookingStatus; 4] = [
    BookingStatus {
        id: BookingState::Bookable,
        title: "Bookable",
        desc: None,
        color: None,
    },
    BookingStatus {
        id: BookingState::BookedPeriod,
        title: "Booked",
        desc: Some("(recurring)"),
        color: Some("rgba(245,177,80,0.4)"),
    },
    BookingStatus {
        id: BookingState::Booked,
        title: "Booked",
        desc: Some("(one-off)"),
        color: Some("rgba(54,187,95,0.3)"),
    },
    BookingStatus {
        id: BookingState::Pending,
        title: "Recurring booking",
        desc: Some("(awaiting approval)"),
        color: Some("rgba(48,102,225,0.3)"),
    },
];

/// Seat states that can be assigned while authoring a plan. `Reserved` is
/// produced by bookings, never set by hand.
pub const CREATE_STATES: [SeatState; 3] = [
    SeatState::Available,
    SeatState::Blocked,
    SeatState::NotShow,
];

/// Outline geometry of a draggable node template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Rect,
    Circle,
    Polygon,
}

/// A sidebar entry the user can drag onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DndNode {
    #[serde(rename = "type")]
    pub kind: NodeType,
    pub label: &'static str,
    pub shape: Shape,
    pub width: f64,
    pub height: f64,
    /// SVG polygon points, present only for [`Shape::Polygon`].
    pub points: Option<&'static str>,
}

/// Node templates in sidebar order.
pub const DND_NODES: [DndNode; 6] = [
    DndNode {
        kind: NodeType::Seat,
        label: "Seat",
        shape: Shape::Rect,
        width: 50.0,
        height: 50.0,
        points: None,
    },
    DndNode {
        kind: NodeType::SquareTable,
        label: "Square table",
        shape: Shape::Rect,
        width: 50.0,
        height: 50.0,
        points: None,
    },
    DndNode {
        kind: NodeType::CircleTable,
        label: "Round table",
        shape: Shape::Circle,
        width: 50.0,
        height: 50.0,
        points: None,
    },
    DndNode {
        kind: NodeType::RectangleTable,
        label: "Rectangular table",
        shape: Shape::Rect,
        width: 100.0,
        height: 50.0,
        points: None,
    },
    DndNode {
        kind: NodeType::HexagonTable,
        label: "Hexagon table",
        shape: Shape::Polygon,
        width: 50.0,
        height: 50.0,
        points: Some("25,0 50,12.5 50,37.5 25,50 0,37.5 0,12.5"),
    },
    DndNode {
        kind: NodeType::OctagonTable,
        label: "Octagon table",
        shape: Shape::Polygon,
        width: 50.0,
        height: 50.0,
        points: Some("14.64,0 35.36,0 50,14.64 50,35.36 35.36,50 14.64,50 0,35.36 0,14.64"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_tags_keep_their_colors() {
        let tags = default_tags();
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0].color, "#37A0FB");
        assert_eq!(tags[2].icon.as_deref(), Some("comfort"));
    }

    #[test]
    fn legend_covers_every_booking_state() {
        assert_eq!(BOOKING_LEGEND.len(), 4);
        assert!(BOOKING_LEGEND[0].color.is_none());
        assert_eq!(BOOKING_LEGEND[1].color, Some("rgba(245,177,80,0.4)"));
    }

    #[test]
    fn authoring_states_exclude_reserved() {
        assert_eq!(CREATE_STATES.len(), 3);
        assert!(!CREATE_STATES.contains(&SeatState::Reserved));
    }

    #[test]
    fn polygon_templates_carry_their_points() {
        let polygons: Vec<_> = DND_NODES
            .iter()
            .filter(|n| n.shape == Shape::Polygon)
            .collect();
        assert_eq!(polygons.len(), 2);
        assert!(polygons.iter().all(|n| n.points.is_some()));
        assert!(
            DND_NODES
                .iter()
                .filter(|n| n.shape != Shape::Polygon)
                .all(|n| n.points.is_none())
        );
    }
}
