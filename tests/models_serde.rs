// Wire-format checks: the JSON shapes here are what the editor front end
// saves and loads, so they are pinned exactly.

use seatgrid::models::{
    BookingState, NodeItem, NodeType, SeatItem, SeatLayout, SeatState, Tag,
};
use serde_json::json;

#[test]
fn states_serialize_to_wire_strings() {
    assert_eq!(
        serde_json::to_value(SeatState::NotShow).unwrap(),
        json!("not_show")
    );
    assert_eq!(
        serde_json::to_value(NodeType::SquareTable).unwrap(),
        json!("square_table")
    );
    assert_eq!(
        serde_json::to_value(BookingState::BookedPeriod).unwrap(),
        json!("booked_period")
    );
}

#[test]
fn seat_item_default_matches_editor_blank_cell() {
    let v = serde_json::to_value(SeatItem::default()).unwrap();
    assert_eq!(
        v,
        json!({
            "id": null,
            "row": null,
            "column": null,
            "state": "available",
            "type": "seat",
            "tags": []
        })
    );
}

#[test]
fn layout_deserializes_saved_plan() {
    let layout: SeatLayout = serde_json::from_str(
        r#"
    {
        "type": "normal",
        "items": [[
            {"id": 9, "row": 0, "column": 0, "state": "reserved", "type": "seat", "tags": [1]}
        ]],
        "rows": 1,
        "cols": 1
    }"#,
    )
    .unwrap();
    assert_eq!(layout.rows, 1);
    assert_eq!(layout.items[0][0].id, Some(9));
    assert_eq!(layout.items[0][0].state, SeatState::Reserved);
    assert_eq!(layout.items[0][0].tags, vec![1]);
}

#[test]
fn node_item_round_trips_with_graph_blob() {
    let mut node = NodeItem::new(NodeType::CircleTable, Some("Window table".to_owned()));
    node.graph.insert("x".to_owned(), json!(120));
    node.graph.insert("y".to_owned(), json!(80));
    node.tags.push(2);

    let text = serde_json::to_string(&node).unwrap();
    let back: NodeItem = serde_json::from_str(&text).unwrap();
    assert_eq!(back, node);
}

#[test]
fn tag_icon_is_optional_on_the_wire() {
    let tag: Tag =
        serde_json::from_str(r##"{"id": 5, "title": "Corner", "color": "#123456"}"##).unwrap();
    assert_eq!(tag.icon, None);
    let v = serde_json::to_value(&tag).unwrap();
    assert!(v.get("icon").is_none());
}

#[test]
fn display_labels_cover_every_state() {
    assert_eq!(SeatState::Available.label(), "Available");
    assert_eq!(SeatState::Blocked.label(), "Unavailable");
    assert_eq!(SeatState::NotShow.label(), "Hidden");
    assert_eq!(NodeType::Passage.label(), "Aisle");
    assert_eq!(NodeType::CircleTable.label(), "Round table");
}
