//! Node outline styles and gradient fills for multi-tag coloring.
//!
//! Attr structs serialize camelCase because they are handed straight to the
//! front end's canvas library (`strokeWidth`, `textVerticalAnchor`, ...).

use crate::models::{Size, Tag};
use serde::Serialize;

/// Default footprint of a newly placed node.
pub const DEFAULT_SIZE: Size = Size {
    width: 50.0,
    height: 50.0,
};

/// `body` attrs of a canvas node shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyAttrs {
    pub stroke: &'static str,
    pub stroke_width: &'static str,
    pub stroke_dasharray: Option<&'static str>,
    pub rx: &'static str,
    pub ry: &'static str,
    pub fill: &'static str,
    pub width: f64,
    pub height: f64,
}

/// `label` attrs of a canvas node shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelAttrs {
    pub font_size: u32,
    pub fill: &'static str,
    pub ref_x: f64,
    pub ref_y: f64,
    pub text_anchor: &'static str,
    pub text_vertical_anchor: &'static str,
}

/// Complete attr tree applied to a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeAttrs {
    pub body: BodyAttrs,
    pub label: LabelAttrs,
}

/// Outline treatment of a node: solid for placed furniture, dotted for
/// passages and background regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    Normal,
    Dotted,
}

impl StrokeKind {
    /// Build the attr tree for a node of the given size.
    pub fn attrs(self, size: Size) -> NodeAttrs {
        let label = LabelAttrs {
            font_size: 14,
            fill: "#000000",
            ref_x: 0.5,
            ref_y: 0.5,
            text_anchor: "middle",
            text_vertical_anchor: "middle",
        };
        let body = match self {
            StrokeKind::Normal => BodyAttrs {
                stroke: "#676767",
                stroke_width: "1px",
                stroke_dasharray: None,
                rx: "8px",
                ry: "8px",
                fill: "#ffffff",
                width: size.width,
                height: size.height,
            },
            StrokeKind::Dotted => BodyAttrs {
                stroke: "#676767",
                stroke_width: "1px",
                stroke_dasharray: Some("5.5"),
                rx: "8px",
                ry: "8px",
                fill: "transparent",
                width: size.width,
                height: size.height,
            },
        };
        NodeAttrs { body, label }
    }
}

/// One `<stop>` element of a linear gradient fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    pub tag_name: &'static str,
    pub attrs: StopAttrs,
}

/// Attrs of a single gradient stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopAttrs {
    pub offset: String,
    pub style: String,
}

/// Build the gradient stop list for a node carrying several tags at once.
///
/// `ids` picks tags out of `tags` in selection order; ids with no matching
/// tag are skipped. Each resolved tag gets an equal band of the gradient,
/// bounded by two stops of the same color so adjacent bands meet in a hard
/// edge rather than a blend.
pub fn gradient_stops(ids: &[u32], tags: &[Tag]) -> Vec<GradientStop> {
    let selected: Vec<&Tag> = ids
        .iter()
        .filter_map(|id| tags.iter().find(|t| t.id == *id))
        .collect();
    let mut stops = Vec::with_capacity(selected.len() * 2);
    if selected.is_empty() {
        return stops;
    }

    let step = 100.0 / selected.len() as f64;
    let mut prev = 0.0;
    for (i, tag) in selected.iter().enumerate() {
        let current = step * (i + 1) as f64;
        let style = format!("stop-color:{};stop-opacity:1", tag.color);
        stops.push(GradientStop {
            tag_name: "stop",
            attrs: StopAttrs {
                offset: format!("{}%", prev),
                style: style.clone(),
            },
        });
        stops.push(GradientStop {
            tag_name: "stop",
            attrs: StopAttrs {
                offset: format!("{}%", current),
                style,
            },
        });
        prev = current;
    }
    stops
}
